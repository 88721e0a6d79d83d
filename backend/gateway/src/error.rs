use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use plateproxy_core::ResponseEnvelope;
use thiserror::Error;

/// Headline for every failure after the identifier has been accepted.
pub const FETCH_FAILED: &str = "Failed to fetch vehicle details";

/// Ways a lookup can fail. Each renders as the uniform JSON envelope.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Only GET method allowed")]
    MethodNotAllowed,

    #[error("Vehicle number missing. Example: ?num=KA04JW3068 or ?test1=UP32AB1234")]
    MissingIdentifier,

    #[error("Original API error: {status} {reason}")]
    UpstreamStatus { status: u16, reason: String },

    #[error("{0}")]
    Transport(reqwest::Error),

    #[error("{0}")]
    Processing(String),
}

impl LookupError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingIdentifier => StatusCode::BAD_REQUEST,
            Self::UpstreamStatus { .. } | Self::Transport(_) | Self::Processing(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn envelope(&self) -> ResponseEnvelope {
        match self {
            Self::MethodNotAllowed | Self::MissingIdentifier => {
                ResponseEnvelope::failure(self.to_string())
            }
            Self::UpstreamStatus { .. } | Self::Transport(_) | Self::Processing(_) => {
                ResponseEnvelope::failure(FETCH_FAILED).with_details(self.to_string())
            }
        }
    }
}

impl From<reqwest::Error> for LookupError {
    // The request URL carries the upstream key; keep it out of `details`.
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.envelope())).into_response()
    }
}

/// `CatchPanicLayer` handler: a panic while serving a lookup becomes the 500 envelope.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unexpected processing failure".to_string()
    };
    tracing::error!(error = %message, "Lookup handler panicked");
    LookupError::Processing(message).into_response()
}
