use std::path::PathBuf;

use thiserror::Error;

use crate::http::method::HttpMethod;

/// Failures that can occur while running the suite or persisting the report.
///
/// Status mismatches are not errors; they are recorded as failed test
/// results. Body-parse failures are downgraded to text snippets and never
/// surface here.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Only GET and POST are dispatched; anything else is refused instead
    /// of being silently skipped.
    #[error("unsupported method {0}: only GET and POST are dispatched")]
    UnsupportedMethod(HttpMethod),

    /// The request could not complete: connection failure, timeout, DNS
    /// resolution, or a malformed URL.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to serialize report: {0}")]
    ReportSerialize(#[from] serde_json::Error),

    #[error("failed to write report file `{path}`: {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
