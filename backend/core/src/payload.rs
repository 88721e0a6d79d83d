use serde::Deserialize;
use serde_json::Value;

use crate::redact::{clean_deep, clean_value};

/// Upstream response body, as JSON when it parses and as raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamPayload {
    Json(Value),
    Text(String),
}

impl UpstreamPayload {
    /// Interpret a response body. A parse failure is not an error; the body
    /// is kept verbatim as text.
    pub fn from_body(body: &str) -> Self {
        match parse_json(body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(body.to_string()),
        }
    }

    /// Tag reported as `original_response_type`.
    pub fn response_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Text(_) => "text",
        }
    }

    /// Redact every string leaf and hand back the cleaned data.
    pub fn sanitize(self) -> Value {
        match self {
            Self::Json(value) => clean_deep(value),
            Self::Text(text) => Value::String(clean_value(&text)),
        }
    }
}

/// Strict JSON parse without a nesting limit. Deep documents grow the stack
/// on demand instead of overflowing it.
fn parse_json(body: &str) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_str(body);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}
