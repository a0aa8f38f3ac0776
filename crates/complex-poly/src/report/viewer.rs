use std::path::Path;

use crate::error::PolyError;

/// Hand a written report to the system's default browser.
///
/// The file must exist; a missing report is an I/O error rather than an
/// empty browser tab. Returns once the viewer has been launched.
pub fn show_report<P: AsRef<Path>>(path: P) -> Result<(), PolyError> {
    let path = std::fs::canonicalize(path.as_ref())?;
    opener::open_browser(&path).map_err(|e| PolyError::Viewer(e.to_string()))?;
    log::info!("Opened {} in the default browser", path.display());
    Ok(())
}
