use serde_json::Value;

/// Maximum number of characters captured when a body is not valid JSON.
const SNIPPET_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub duration_ms: u128,
    pub body: String,
}

impl HttpResponse {
    /// Parse the body as JSON, if possible.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// The body truncated to a short diagnostic snippet.
    pub fn snippet(&self) -> String {
        self.body.chars().take(SNIPPET_CHARS).collect()
    }

    /// Capture the body for the report: parsed JSON when the body decodes,
    /// otherwise a truncated text snippet.
    pub fn capture(&self) -> Value {
        self.json().unwrap_or_else(|| Value::String(self.snippet()))
    }
}
