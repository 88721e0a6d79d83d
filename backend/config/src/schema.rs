//! Typed config schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::defaults;

/// Top-level proxy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProxyConfig {
    /// HTTP server bind address
    #[serde(default = "defaults::bind_address")]
    pub bind_address: String,
    /// HTTP server port
    #[serde(default = "defaults::port")]
    pub port: u16,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            bind_address: defaults::bind_address(),
            port: defaults::port(),
            upstream: UpstreamConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl ProxyConfig {
    /// `host:port` string for the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Third-party lookup API the proxy forwards to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "defaults::upstream_url")]
    pub base_url: String,
    /// Sent as the `key` query parameter.
    #[serde(default = "defaults::upstream_key")]
    pub api_key: String,
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::upstream_url(),
            api_key: defaults::upstream_key(),
            user_agent: defaults::user_agent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Fallback filter when `RUST_LOG` is unset.
    #[serde(default = "defaults::log_level")]
    pub level: String,
    /// Directory for the rolling NDJSON file log. Console only when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Emit console logs as JSON.
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            dir: None,
            json: false,
        }
    }
}
