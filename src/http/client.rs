use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;

use crate::error::RunnerError;
use crate::http::method::HttpMethod;

use super::request::ApiRequest;
use super::response::HttpResponse;

/// Thin wrapper around `reqwest::Client` with a fixed per-request timeout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: reqwest::Client,
}

impl ApiClient {
    pub fn new(timeout: Duration) -> Result<Self, RunnerError> {
        let inner = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { inner })
    }

    /// Send a request and collect the full response body.
    ///
    /// GET sends no body; POST sends the payload JSON-encoded. Any other
    /// method is refused with `UnsupportedMethod` before a request is
    /// attempted. Malformed URLs surface through `send()` as a transport
    /// error.
    pub async fn send(&self, request: &ApiRequest) -> Result<HttpResponse, RunnerError> {
        let builder = match request.method {
            HttpMethod::Get => self
                .inner
                .get(&request.url)
                .header(CONTENT_TYPE, "application/json"),
            HttpMethod::Post => match &request.payload {
                Some(payload) => self.inner.post(&request.url).json(payload),
                None => self
                    .inner
                    .post(&request.url)
                    .header(CONTENT_TYPE, "application/json"),
            },
            other => return Err(RunnerError::UnsupportedMethod(other)),
        };

        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");
        let started = Instant::now();
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        let duration_ms = started.elapsed().as_millis();
        tracing::debug!(status, duration_ms = %duration_ms, "response received");

        Ok(HttpResponse {
            status,
            duration_ms,
            body,
        })
    }
}
