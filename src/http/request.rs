use serde_json::Value;

use super::method::HttpMethod;

/// A single outbound request: method, full URL, and optional JSON payload.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub payload: Option<Value>,
}
