//! Response envelope returned for every lookup, successful or not.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::payload::UpstreamPayload;
use crate::query::VehicleIdentifier;

/// Attribution carried on every envelope.
pub const CREDIT: &str = "@SxThunder";

/// Static note attached to successful lookups.
pub const NOTE: &str = "All @mentions and links are hidden | Powered by @SxThunder proxy";

/// Fixed-shape JSON body. Fields that do not apply to an outcome are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_response_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleaned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub credit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ResponseEnvelope {
    /// Success envelope. Sanitizes the payload on the way in.
    pub fn success(identifier: &VehicleIdentifier, payload: UpstreamPayload) -> Self {
        let original_response_type = payload.response_type().to_string();
        Self {
            success: true,
            vehicle_number: Some(identifier.to_uppercase()),
            data: Some(payload.sanitize()),
            original_response_type: Some(original_response_type),
            cleaned: Some(true),
            error: None,
            details: None,
            credit: CREDIT.to_string(),
            note: Some(NOTE.to_string()),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            vehicle_number: None,
            data: None,
            original_response_type: None,
            cleaned: None,
            error: Some(error.into()),
            details: None,
            credit: CREDIT.to_string(),
            note: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
