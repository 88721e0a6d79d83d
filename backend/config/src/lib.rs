//! `plateproxy-config` — runtime configuration management.
//!
//! Provides:
//! - Typed config schema with defaults matching the public upstream
//! - TOML file loading (missing file means defaults)
//! - `PLATEPROXY_*` environment overrides
//! - Validation report with errors and warnings

pub mod defaults;
pub mod env;
pub mod io;
pub mod schema;
pub mod validation;

pub use env::CONFIG_PATH_VAR;
pub use io::load_config;
pub use schema::{LogConfig, ProxyConfig, UpstreamConfig};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{bail, Result};
use std::path::Path;

/// Load the config file (when given) and apply env overrides.
///
/// A missing file yields defaults.
pub async fn load(path: Option<&Path>) -> Result<ProxyConfig> {
    let mut config = match path {
        Some(path) => load_config(path).await?,
        None => ProxyConfig::default(),
    };
    config.apply_env();
    Ok(config)
}

/// Validate a loaded config, logging every finding.
///
/// Warnings are logged; any validation error aborts.
pub fn check(config: &ProxyConfig) -> Result<()> {
    let report = validate(config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }
    if !report.is_valid() {
        bail!("invalid configuration: {} error(s)", report.errors.len());
    }
    Ok(())
}
