//! Report persistence.
//!
//! The report is written as pretty-printed JSON to a single file,
//! overwriting any previous run's output.

use std::fs;
use std::path::Path;

use crate::error::RunnerError;
use crate::report::Report;

pub fn write_report(path: &Path, report: &Report) -> Result<(), RunnerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| RunnerError::ReportWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    let raw = serde_json::to_string_pretty(report)?;
    fs::write(path, raw).map_err(|source| RunnerError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })
}
