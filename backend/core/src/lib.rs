//! `plateproxy-core` — domain types for the vehicle lookup proxy.
//!
//! Provides:
//! - Query parameter bag and vehicle identifier extraction
//! - Upstream payload interpretation (JSON or raw text)
//! - Deep redaction of links and `@handles`
//! - The fixed-shape response envelope

pub mod envelope;
pub mod payload;
pub mod query;
pub mod redact;

pub use envelope::{ResponseEnvelope, CREDIT, NOTE};
pub use payload::UpstreamPayload;
pub use query::{QueryParams, VehicleIdentifier, IDENTIFIER_PARAMS};
pub use redact::{clean_deep, clean_value, LINK_PLACEHOLDER, USER_PLACEHOLDER};
