use anyhow::{Context, Result};
use log::LevelFilter;

use complex_poly::report::{save_report, save_svg, show_report};
use complex_poly::{Analysis, PlotConfig};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("COMPLEX_POLY_LOG", "error,complex_poly=info"))
        .init();

    let config = PlotConfig::default();
    config
        .validate()
        .with_context(|| "Default configuration is invalid")?;
    log::debug!("Configuration: {:?}", config);

    let analysis = Analysis::run(&config)
        .with_context(|| "Failed to evaluate the polynomial and locate its roots")?;

    let svg = save_svg(&analysis, &config.figure_file)
        .with_context(|| format!("Failed to write figure to {}", config.figure_file))?;
    save_report(&analysis, &svg, &config.report_file)
        .with_context(|| format!("Failed to write report to {}", config.report_file))?;

    if config.show_report {
        // headless runs keep the files on disk
        if let Err(e) = show_report(&config.report_file) {
            log::warn!("{}; open {} manually", e, config.report_file);
        }
    }

    if !analysis.evaluations_agree() {
        anyhow::bail!(
            "Power-sum and Horner evaluations disagree: max |f - p| = {:.3e} at grid index {:?}",
            analysis.diff.max_abs,
            analysis.diff.worst_index
        );
    }

    log::info!(
        "{} roots, max |f - p| = {:.3e}",
        analysis.roots.len(),
        analysis.diff.max_abs
    );

    Ok(())
}
