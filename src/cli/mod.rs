use std::path::PathBuf;

use clap::Parser;

/// Deployed backend the runner targets by default; overridable per run.
pub const DEFAULT_BASE_URL: &str = "https://jrautos-cars.preview.emergentagent.com";
pub const DEFAULT_REPORT_FILE: &str = "backend_test_results.json";

/// Smoke-test the JR Autos backend API and write a JSON report.
#[derive(Debug, Parser)]
#[command(name = "apismoke", version, about)]
pub struct Cli {
    /// Base URL of the backend under test
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Path of the JSON report to write
    #[arg(long, default_value = DEFAULT_REPORT_FILE)]
    pub report: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}
