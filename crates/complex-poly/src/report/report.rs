use std::path::Path;

use maud::{html, Markup, PreEscaped, DOCTYPE};
use num_complex::Complex64;

use crate::analysis::Analysis;
use crate::error::PolyError;

const STYLE: &str = "
body { font-family: sans-serif; margin: 2em; color: #222; }
h1 { margin-bottom: 0.2em; }
section { margin-top: 2em; }
table { border-collapse: collapse; }
th, td { border: 1px solid #ccc; padding: 4px 10px; text-align: right; font-family: monospace; }
th { background-color: #f0f0f0; }
.ok { color: #1a7f37; font-weight: bold; }
.bad { color: #cf222e; font-weight: bold; }
.code-container {
    background-color: #f5f5f5;
    padding: 10px;
    border-radius: 5px;
    overflow-x: auto;
    font-family: monospace;
    white-space: pre-wrap;
}
";

fn fmt_complex(z: &Complex64) -> String {
    format!("{:+.6} {:+.6}i", z.re, z.im)
}

/// Build the HTML report around an already rendered SVG figure.
pub fn build_report(analysis: &Analysis, svg: &str) -> Result<Markup, PolyError> {
    let config_json = analysis.config.to_json_pretty()?;
    let agree = analysis.evaluations_agree();
    let res = analysis.grid.resolution();

    Ok(html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "Complex polynomial roots" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { "Complex polynomial roots" }

                /* Section 1: Overview */
                section {
                    h2 { "Overview" }
                    p {
                        "A random polynomial of degree " (analysis.polynomial.degree())
                        " was evaluated on a " (res) " x " (res) " grid over [-"
                        (format!("{:.4}", analysis.grid.extent())) ", "
                        (format!("{:.4}", analysis.grid.extent())) "]"
                        sup { "2" }
                        ", once as an explicit power sum f(z) and once with Horner's method p(z). "
                        "Roots are the eigenvalues of the companion matrix and are marked on the p(z) panels."
                    }
                    table {
                        tr { th { "Evaluators agree" } td {
                            @if agree {
                                span class="ok" { "yes" }
                            } @else {
                                span class="bad" { "no" }
                            }
                        } }
                        tr { th { "max |f - p|" } td { (format!("{:.3e}", analysis.diff.max_abs)) } }
                        tr { th { "max |f - p| / |p|" } td { (format!("{:.3e}", analysis.diff.max_rel)) } }
                        tr { th { "worst grid index" } td { (format!("{:?}", analysis.diff.worst_index)) } }
                        tr { th { "tolerance" } td { (format!("rtol={:e}, atol={:e}", analysis.config.rtol, analysis.config.atol)) } }
                    }
                }

                /* Section 2: Figure */
                section {
                    h2 { "Figure" }
                    div { (PreEscaped(svg)) }
                }

                /* Section 3: Coefficients and roots */
                section {
                    h2 { "Coefficients" }
                    table {
                        tr { th { "n" } th { "c_n" } }
                        @for (n, c) in analysis.coefficients().iter().enumerate() {
                            tr { td { (n) } td { (fmt_complex(c)) } }
                        }
                    }
                    h2 { "Roots" }
                    @if analysis.roots.is_empty() {
                        p { "The polynomial is constant and has no roots." }
                    } @else {
                        table {
                            tr { th { "#" } th { "root" } th { "|p(root)|" } }
                            @for (k, (root, residual)) in analysis.roots.iter().zip(&analysis.residuals).enumerate() {
                                tr {
                                    td { (k) }
                                    td { (fmt_complex(root)) }
                                    td { (format!("{:.3e}", residual)) }
                                }
                            }
                        }
                    }
                }

                /* Section 4: Configuration */
                section {
                    h2 { "Configuration" }
                    div class="code-container" {
                        pre {
                            code { (config_json) }
                        }
                    }
                }
            }
        }
    })
}

/// Build the report and write it to `path`.
pub fn save_report<P: AsRef<Path>>(
    analysis: &Analysis,
    svg: &str,
    path: P,
) -> Result<(), PolyError> {
    let markup = build_report(analysis, svg)?;
    std::fs::write(path.as_ref(), markup.into_string())?;
    log::info!("Report saved to {}", path.as_ref().display());
    Ok(())
}
