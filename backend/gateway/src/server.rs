//! Main HTTP Gateway Server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{any, get},
    Router,
};
use chrono::{DateTime, Utc};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::error::panic_response;
use crate::health_api;
use crate::upstream::UpstreamClient;
use crate::vehicle;

/// Application state shared across routes. Read-only after startup.
#[derive(Clone)]
pub struct GatewayState {
    pub upstream: Arc<UpstreamClient>,
    pub started_at: DateTime<Utc>,
}

impl GatewayState {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            upstream: Arc::new(upstream),
            started_at: Utc::now(),
        }
    }
}

/// Build the axum router with all routes.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/api/vehicle", any(vehicle::vehicle_lookup))
        .route("/api/health", get(health_api::get_health))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the axum HTTP server for the gateway.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(addr = %addr, "Gateway HTTP server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
