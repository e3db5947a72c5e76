//! End-to-end scenarios for the smoke-test runner against a mock backend.

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use apismoke::http::client::ApiClient;
use apismoke::http::method::HttpMethod;
use apismoke::http::request::ApiRequest;
use apismoke::report::{ActualStatus, Report, RunSummary, TestResult};
use apismoke::runner::TestRunner;
use apismoke::storage;
use apismoke::suite::{self, TestCase};

const TIMEOUT: Duration = Duration::from_secs(2);

async fn mount_healthy_backend(server: &MockServer) {
    for endpoint in ["/api/", "/api/health", "/api/contact", "/api/vehicles", "/api/status"] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
            .mount(server)
            .await;
    }
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "contact-1" })))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "status-1" })))
        .mount(server)
        .await;
}

fn find<'a>(results: &'a [TestResult], name: &str) -> &'a TestResult {
    results
        .iter()
        .find(|r| r.test_name == name)
        .unwrap_or_else(|| panic!("no result named {name}"))
}

#[tokio::test]
async fn healthy_backend_passes_every_test() {
    let server = MockServer::start().await;
    mount_healthy_backend(&server).await;

    let runner = TestRunner::new(server.uri(), TIMEOUT).unwrap();
    let summary = runner.run_suite(&suite::default_suite()).await;

    assert_eq!(summary.total(), 7);
    assert!(summary.all_passed());
    assert_eq!(summary.success_rate(), 100.0);

    let contact = find(summary.results(), "Contact Form Submission");
    assert_eq!(contact.actual_status, ActualStatus::Code(200));
    assert_eq!(
        contact.response_data.as_ref().and_then(|body| body.get("id")),
        Some(&json!("contact-1"))
    );
}

#[tokio::test]
async fn status_mismatch_fails_only_that_test() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vehicles"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Not Found" })))
        .mount(&server)
        .await;
    mount_healthy_backend(&server).await;

    let runner = TestRunner::new(server.uri(), TIMEOUT).unwrap();
    let summary = runner.run_suite(&suite::default_suite()).await;

    assert!(!summary.all_passed());
    let failed = summary.failed();
    assert_eq!(failed.len(), 1);

    let vehicles = failed[0];
    assert_eq!(vehicles.test_name, "Get Vehicles");
    assert_eq!(vehicles.expected_status, 200);
    assert_eq!(vehicles.actual_status, ActualStatus::Code(404));
    assert_eq!(vehicles.error_data, Some(json!({ "detail": "Not Found" })));
    assert!(vehicles.response_data.is_none());
}

#[tokio::test]
async fn unreachable_backend_records_error_sentinels() {
    // Nothing listens on port 1; every connection attempt is refused.
    let runner = TestRunner::new("http://127.0.0.1:1", TIMEOUT).unwrap();
    let summary = runner.run_suite(&suite::default_suite()).await;

    assert_eq!(summary.total(), 7);
    assert_eq!(summary.passed(), 0);
    for result in summary.results() {
        assert!(!result.success);
        assert_eq!(result.actual_status, ActualStatus::Error);
        assert!(result.error_data.is_some());
    }
}

#[tokio::test]
async fn repeated_runs_produce_structurally_identical_results() {
    let server = MockServer::start().await;
    // A mixed outcome, so identical structure covers failures too.
    Mock::given(method("GET"))
        .and(path("/api/vehicles"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Not Found" })))
        .mount(&server)
        .await;
    mount_healthy_backend(&server).await;

    let runner = TestRunner::new(server.uri(), TIMEOUT).unwrap();
    let first = runner.run_suite(&suite::default_suite()).await;
    let second = runner.run_suite(&suite::default_suite()).await;

    fn shape(summary: &RunSummary) -> Vec<(String, bool)> {
        summary
            .results()
            .iter()
            .map(|r| (r.test_name.clone(), r.success))
            .collect()
    }

    assert_eq!(shape(&first), shape(&second));
    assert_eq!(first.passed(), second.passed());
    assert_eq!(first.total(), second.total());
}

#[tokio::test]
async fn response_duration_reflects_backend_latency() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "ok" }))
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(TIMEOUT).unwrap();
    let request = ApiRequest {
        method: HttpMethod::Get,
        url: format!("{}/api/health", server.uri()),
        payload: None,
    };
    let response = client.send(&request).await.unwrap();

    assert_eq!(response.status, 200);
    assert!(response.duration_ms >= 100);
}

#[tokio::test]
async fn unsupported_method_is_an_explicit_failure() {
    let server = MockServer::start().await;
    let runner = TestRunner::new(server.uri(), TIMEOUT).unwrap();

    let case = TestCase {
        name: "Delete Vehicle",
        method: HttpMethod::Delete,
        endpoint: "api/vehicles",
        expected_status: 200,
        payload: None,
    };
    let result = runner.execute(&case).await;

    assert!(!result.success);
    assert_eq!(result.actual_status, ActualStatus::Error);
    let reason = result.error_data.unwrap();
    assert!(reason.as_str().unwrap().contains("unsupported method"));
    // No request reaches the backend.
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn non_json_body_is_captured_as_truncated_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain ".repeat(60)))
        .mount(&server)
        .await;

    let runner = TestRunner::new(server.uri(), TIMEOUT).unwrap();
    let case = TestCase {
        name: "Root API",
        method: HttpMethod::Get,
        endpoint: "api/",
        expected_status: 200,
        payload: None,
    };
    let result = runner.execute(&case).await;

    assert!(result.success);
    match result.response_data {
        Some(Value::String(snippet)) => assert_eq!(snippet.chars().count(), 200),
        other => panic!("expected truncated text snippet, got {other:?}"),
    }
}

#[tokio::test]
async fn report_file_reflects_run_outcome() {
    let server = MockServer::start().await;
    mount_healthy_backend(&server).await;

    let runner = TestRunner::new(server.uri(), TIMEOUT).unwrap();
    let summary = runner.run_suite(&suite::default_suite()).await;
    let report = Report::new(summary);

    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("backend_test_results.json");
    storage::write_report(&report_path, &report).unwrap();

    let raw = std::fs::read_to_string(&report_path).unwrap();
    let json: Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(json["total_tests"], 7);
    assert_eq!(json["passed_tests"], 7);
    assert_eq!(json["success_rate"], 100.0);
    assert_eq!(json["results"].as_array().unwrap().len(), 7);
    assert_eq!(json["results"][0]["test_name"], "Root API");
    assert_eq!(json["results"][0]["method"], "GET");
    assert!(json["timestamp"].is_string());
}
