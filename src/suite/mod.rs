//! The declarative smoke-test suite.
//!
//! Each case describes one HTTP call and the status code that counts as a
//! pass. The fixed default suite covers the backend's health, contact,
//! vehicle, and status-check endpoints.

use chrono::Local;
use serde_json::{json, Value};

use crate::http::method::HttpMethod;

/// One described HTTP call with an expected outcome.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub name: &'static str,
    pub method: HttpMethod,
    pub endpoint: &'static str,
    pub expected_status: u16,
    pub payload: Option<Value>,
}

/// A titled group of cases. Grouping only affects output readability;
/// cases are independent.
#[derive(Debug, Clone)]
pub struct SuiteSection {
    pub title: &'static str,
    pub cases: Vec<TestCase>,
}

/// The fixed suite run against the backend, in execution order.
pub fn default_suite() -> Vec<SuiteSection> {
    vec![
        SuiteSection {
            title: "Testing Health Endpoints",
            cases: vec![
                get("Root API", "api/"),
                get("Health Check", "api/health"),
            ],
        },
        SuiteSection {
            title: "Testing Contact Form",
            cases: vec![post(
                "Contact Form Submission",
                "api/contact",
                json!({
                    "name": "Test User",
                    "email": "test@example.com",
                    "phone": "+52 448 000 0000",
                    "message": "This is a test message from automated testing",
                }),
            )],
        },
        SuiteSection {
            title: "Testing Contact Retrieval",
            cases: vec![get("Get Contact Messages", "api/contact")],
        },
        SuiteSection {
            title: "Testing Vehicles Endpoint",
            cases: vec![get("Get Vehicles", "api/vehicles")],
        },
        SuiteSection {
            title: "Testing Status Endpoints",
            cases: vec![
                post(
                    "Create Status Check",
                    "api/status",
                    json!({ "client_name": status_client_name() }),
                ),
                get("Get Status Checks", "api/status"),
            ],
        },
    ]
}

fn get(name: &'static str, endpoint: &'static str) -> TestCase {
    TestCase {
        name,
        method: HttpMethod::Get,
        endpoint,
        expected_status: 200,
        payload: None,
    }
}

fn post(name: &'static str, endpoint: &'static str, payload: Value) -> TestCase {
    TestCase {
        name,
        method: HttpMethod::Post,
        endpoint,
        expected_status: 200,
        payload: Some(payload),
    }
}

/// Time-suffixed client name so repeated runs create distinct status checks.
fn status_client_name() -> String {
    format!("test_client_{}", Local::now().format("%H%M%S"))
}
