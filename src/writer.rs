// Persists a rendered report under a timestamped name.

use crate::error::ReportError;
use chrono::NaiveDateTime;
use std::io::Write;
use std::path::{Path, PathBuf};

/// `system_report_YYYYMMDD_HHMMSS.html`
pub const FILENAME_FORMAT: &str = "system_report_%Y%m%d_%H%M%S.html";

pub fn report_filename(taken_at: &NaiveDateTime) -> String {
    taken_at.format(FILENAME_FORMAT).to_string()
}

/// Writes `html` as UTF-8 into `dir`, replacing any same-second report.
/// The directory is not created; a missing one is a write error.
///
/// Content goes to a temp file in `dir` that is renamed over the target, so a
/// failed write leaves neither a partial report nor a clobbered earlier one.
#[tracing::instrument(skip(html), fields(operation = "write_report", bytes = html.len()))]
pub fn write_report(
    dir: &Path,
    taken_at: &NaiveDateTime,
    html: &str,
) -> Result<PathBuf, ReportError> {
    let path = dir.join(report_filename(taken_at));
    let write_err = |source: std::io::Error| ReportError::Write {
        path: path.clone(),
        source,
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".system_report_")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_err)?;
    tmp.write_all(html.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    // On failure the PersistError still owns the temp file and removes it on drop.
    tmp.persist(&path).map_err(|e| write_err(e.error))?;

    tracing::debug!(path = %path.display(), "report written");
    Ok(path)
}
