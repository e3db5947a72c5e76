use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use apismoke::cli::Cli;
use apismoke::report::{Report, RunSummary};
use apismoke::runner::TestRunner;
use apismoke::storage;
use apismoke::suite;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let runner = match TestRunner::new(&cli.base_url, Duration::from_secs(cli.timeout_secs)) {
        Ok(runner) => runner,
        Err(err) => {
            eprintln!("Failed to set up HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Starting JR Autos API tests");
    println!("Base URL: {}", runner.base_url());

    let summary = runner.run_suite(&suite::default_suite()).await;
    print_summary(&summary);
    let all_passed = summary.all_passed();

    let report = Report::new(summary);
    if let Err(err) = storage::write_report(&cli.report, &report) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    tracing::debug!(path = %cli.report.display(), "report written");

    if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_summary(summary: &RunSummary) {
    println!("\nTest Summary");
    println!("Tests run: {}", summary.total());
    println!("Tests passed: {}", summary.passed());
    println!("Success rate: {:.1}%", summary.success_rate());

    let failed = summary.failed();
    if !failed.is_empty() {
        println!("\nFailed tests ({}):", failed.len());
        for result in failed {
            let reason = result
                .error_data
                .as_ref()
                .map(Value::to_string)
                .unwrap_or_else(|| "Unknown error".to_string());
            println!("   - {}: {reason}", result.test_name);
        }
    }
}
