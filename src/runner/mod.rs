//! Sequential test runner.
//!
//! Executes suite cases one at a time against a fixed base URL. Every
//! failure mode is recovered into a [`TestResult`]; the run never aborts
//! because a single test could not complete.

use std::time::Duration;

use serde_json::Value;

use crate::http::client::ApiClient;
use crate::http::request::ApiRequest;
use crate::report::{ActualStatus, RunSummary, TestResult};
use crate::suite::{SuiteSection, TestCase};

pub struct TestRunner {
    base_url: String,
    client: ApiClient,
}

impl TestRunner {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, crate::error::RunnerError> {
        Ok(Self {
            base_url: base_url.into(),
            client: ApiClient::new(timeout)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    /// Run a single case and record its outcome.
    ///
    /// Success is decided solely by comparing status codes; the response
    /// body is captured for diagnostics but never validated. Transport
    /// failures and unsupported methods become failed results with the
    /// `"ERROR"` status sentinel.
    pub async fn execute(&self, case: &TestCase) -> TestResult {
        let url = self.endpoint_url(case.endpoint);
        println!();
        println!("Testing {}...", case.name);
        println!("   URL: {url}");

        let request = ApiRequest {
            method: case.method,
            url,
            payload: case.payload.clone(),
        };

        match self.client.send(&request).await {
            Ok(response) => {
                let success = response.status == case.expected_status;
                let captured = response.capture();
                let (response_data, error_data) = if success {
                    (Some(captured), None)
                } else {
                    (None, Some(captured))
                };

                if success {
                    println!(
                        "   Passed - Status: {} ({} ms)",
                        response.status, response.duration_ms
                    );
                    let created_id = response_data
                        .as_ref()
                        .and_then(|body| body.get("id"))
                        .and_then(Value::as_str);
                    if let Some(id) = created_id {
                        println!("   ID: {id}");
                    }
                } else {
                    println!(
                        "   Failed - Expected {}, got {} ({} ms)",
                        case.expected_status, response.status, response.duration_ms
                    );
                    if let Some(error) = &error_data {
                        println!("   Error: {error}");
                    }
                }

                TestResult {
                    test_name: case.name.to_string(),
                    endpoint: case.endpoint.to_string(),
                    method: case.method,
                    expected_status: case.expected_status,
                    actual_status: ActualStatus::Code(response.status),
                    success,
                    response_data,
                    error_data,
                }
            }
            Err(err) => {
                println!("   Failed - Error: {err}");
                tracing::warn!(test = case.name, error = %err, "request could not complete");
                TestResult {
                    test_name: case.name.to_string(),
                    endpoint: case.endpoint.to_string(),
                    method: case.method,
                    expected_status: case.expected_status,
                    actual_status: ActualStatus::Error,
                    success: false,
                    response_data: None,
                    error_data: Some(Value::String(err.to_string())),
                }
            }
        }
    }

    /// Run every case of every section in order, returning the accumulated
    /// summary.
    pub async fn run_suite(&self, sections: &[SuiteSection]) -> RunSummary {
        let mut summary = RunSummary::default();
        for section in sections {
            println!("\n=== {} ===", section.title);
            for case in &section.cases {
                let result = self.execute(case).await;
                summary.push(result);
            }
        }
        summary
    }
}
