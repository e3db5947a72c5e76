//! Result and report types for a smoke-test run.
//!
//! A run produces an ordered log of [`TestResult`] values collected in a
//! [`RunSummary`], which is folded into a persisted [`Report`] at the end.

use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::http::method::HttpMethod;

/// Status observed for a test: an HTTP status code, or the `"ERROR"`
/// sentinel when the request never completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActualStatus {
    Code(u16),
    Error,
}

impl ActualStatus {
    pub fn matches(self, expected: u16) -> bool {
        matches!(self, ActualStatus::Code(code) if code == expected)
    }
}

impl Serialize for ActualStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ActualStatus::Code(code) => serializer.serialize_u16(*code),
            ActualStatus::Error => serializer.serialize_str("ERROR"),
        }
    }
}

impl Display for ActualStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActualStatus::Code(code) => write!(f, "{code}"),
            ActualStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Outcome of a single test case. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    pub test_name: String,
    pub endpoint: String,
    pub method: HttpMethod,
    pub expected_status: u16,
    pub actual_status: ActualStatus,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_data: Option<Value>,
}

/// Ordered accumulation of results for one run.
///
/// All counts are derived from the log itself, so `total() == passed() +
/// failed().len()` holds by construction.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    results: Vec<TestResult>,
}

impl RunSummary {
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    pub fn failed(&self) -> Vec<&TestResult> {
        self.results.iter().filter(|r| !r.success).collect()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    /// Percentage of passed tests, 0.0 for an empty run.
    pub fn success_rate(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        (self.passed() as f64 / self.total() as f64) * 100.0
    }
}

/// Persisted summary of one run, written as pretty-printed JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub timestamp: DateTime<Utc>,
    pub total_tests: usize,
    pub passed_tests: usize,
    pub success_rate: f64,
    pub results: Vec<TestResult>,
}

impl Report {
    pub fn new(summary: RunSummary) -> Self {
        Self::at(Utc::now(), summary)
    }

    pub fn at(timestamp: DateTime<Utc>, summary: RunSummary) -> Self {
        Self {
            timestamp,
            total_tests: summary.total(),
            passed_tests: summary.passed(),
            success_rate: summary.success_rate(),
            results: summary.results,
        }
    }
}
