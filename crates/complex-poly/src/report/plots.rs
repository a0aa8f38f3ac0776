use std::path::Path;

use ndarray::Array2;
use num_complex::Complex64;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::analysis::Analysis;
use crate::components::{value_range, Component, Evaluator};
use crate::error::PolyError;

/// Horizontal space reserved right of each heatmap for its colour bar.
const COLORBAR_WIDTH: u32 = 110;
/// Number of bands drawn in a colour bar.
const COLORBAR_STEPS: usize = 64;
const ROOT_MARKER_RADIUS: i32 = 5;

fn render_error<E: std::fmt::Display>(err: E) -> PolyError {
    PolyError::Render(err.to_string())
}

/// Render the full figure into an SVG document held in memory.
pub fn render_svg(analysis: &Analysis) -> Result<String, PolyError> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, analysis.config.figure_size)
            .into_drawing_area();
        draw_figure(&root, analysis)?;
    }
    Ok(buf)
}

/// Render the figure and write it to `path`. Returns the SVG text as well so
/// it can be embedded elsewhere.
pub fn save_svg<P: AsRef<Path>>(analysis: &Analysis, path: P) -> Result<String, PolyError> {
    let svg = render_svg(analysis)?;
    std::fs::write(path.as_ref(), &svg)?;
    log::info!("Figure saved to {}", path.as_ref().display());
    Ok(svg)
}

/// Draw the 2x3 comparison figure.
///
/// Top row: real part, imaginary part and log-magnitude of the power-sum
/// evaluation `f`. Bottom row: the same for the Horner evaluation `p`, with
/// the roots marked. Each panel gets its own colour bar.
pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    analysis: &Analysis,
) -> Result<(), PolyError> {
    root.fill(&WHITE).map_err(render_error)?;
    let body = root
        .titled(
            &format!(
                "Degree {} polynomial: power sum f(z) vs Horner p(z), {} roots",
                analysis.polynomial.degree(),
                analysis.roots.len()
            ),
            ("sans-serif", 22),
        )
        .map_err(render_error)?;

    let panels = body.split_evenly((Evaluator::ALL.len(), Component::ALL.len()));
    for (row, evaluator) in Evaluator::ALL.iter().enumerate() {
        let values = match evaluator {
            Evaluator::Manual => &analysis.manual,
            Evaluator::Reference => &analysis.reference,
        };
        for (col, component) in Component::ALL.iter().enumerate() {
            let panel = &panels[row * Component::ALL.len() + col];
            draw_panel(panel, analysis, values, *evaluator, *component)?;
        }
    }

    root.present().map_err(render_error)?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    panel: &DrawingArea<DB, Shift>,
    analysis: &Analysis,
    values: &Array2<Complex64>,
    evaluator: Evaluator,
    component: Component,
) -> Result<(), PolyError> {
    let data = component.map(values);
    let (lo, hi) = value_range(data.iter());
    let label = component.label(evaluator);

    let (width, _) = panel.dim_in_pixel();
    let (heat_area, bar_area) =
        panel.split_horizontally(width.saturating_sub(COLORBAR_WIDTH));

    let extent = analysis.grid.extent();
    let mut chart = ChartBuilder::on(&heat_area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(-extent..extent, -extent..extent)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Re(z)")
        .y_desc("Im(z)")
        .x_labels(5)
        .y_labels(5)
        .label_style(("sans-serif", 12))
        .x_label_formatter(&|v| format!("{:.1}", v))
        .y_label_formatter(&|v| format!("{:.1}", v))
        .draw()
        .map_err(render_error)?;

    let indices = analysis.grid.sample_indices(analysis.config.render_res);
    let axis = analysis.grid.axis();
    let centers: Vec<f64> = indices.iter().map(|&i| axis[i]).collect();
    let edges = cell_edges(&centers, extent);

    chart
        .draw_series(indices.iter().enumerate().flat_map(|(a, &i)| {
            let data = &data;
            let edges = &edges;
            indices.iter().enumerate().map(move |(b, &j)| {
                let color = ViridisRGB::get_color_normalized(finite_or(data[[i, j]], lo), lo, hi);
                Rectangle::new(
                    [(edges[a], edges[b]), (edges[a + 1], edges[b + 1])],
                    color.filled(),
                )
            })
        }))
        .map_err(render_error)?;

    if evaluator == Evaluator::Reference {
        chart
            .draw_series(analysis.roots.iter().map(|r| {
                Circle::new((r.re, r.im), ROOT_MARKER_RADIUS, RED.mix(0.5).filled())
            }))
            .map_err(render_error)?;
    }

    draw_colorbar(&bar_area, &label, lo, hi)
}

fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    label: &str,
    lo: f64,
    hi: f64,
) -> Result<(), PolyError> {
    let mut bar = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .right_y_label_area_size(70)
        .build_cartesian_2d(0.0..1.0, lo..hi)
        .map_err(render_error)?;

    bar.configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .y_desc(label)
        .y_labels(6)
        .label_style(("sans-serif", 12))
        .y_label_formatter(&|v| format!("{:.1}", v))
        .draw()
        .map_err(render_error)?;

    let step = (hi - lo) / COLORBAR_STEPS as f64;
    bar.draw_series((0..COLORBAR_STEPS).map(|k| {
        let y0 = lo + step * k as f64;
        let color = ViridisRGB::get_color_normalized(y0 + 0.5 * step, lo, hi);
        Rectangle::new([(0.0, y0), (1.0, y0 + step)], color.filled())
    }))
    .map_err(render_error)?;

    Ok(())
}

/// Boundaries of the cells centred on `centers`: midpoints between
/// neighbours, closed off by `-extent` and `extent`.
fn cell_edges(centers: &[f64], extent: f64) -> Vec<f64> {
    let mut edges = Vec::with_capacity(centers.len() + 1);
    edges.push(-extent);
    edges.extend(centers.windows(2).map(|w| 0.5 * (w[0] + w[1])));
    edges.push(extent);
    edges
}

// Non-finite values (ln|0|, overflow) take the low end of the colour scale.
fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        fallback
    }
}
