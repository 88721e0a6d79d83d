//! plateproxy Gateway HTTP API Server
//!
//! Mounts the vehicle lookup handler and a health endpoint on an axum router.

pub mod error;
pub mod health_api;
pub mod server;
pub mod upstream;
pub mod vehicle;

pub use error::LookupError;
pub use server::{router, start_server, GatewayState};
pub use upstream::UpstreamClient;
pub use vehicle::lookup;
