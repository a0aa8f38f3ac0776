//! Figure and HTML report rendering.
pub mod plots;
pub mod report;
pub mod viewer;

pub use plots::{draw_figure, render_svg, save_svg};
pub use report::{build_report, save_report};
pub use viewer::show_report;
