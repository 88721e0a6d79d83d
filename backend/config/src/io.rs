//! Config file loading.

use crate::schema::ProxyConfig;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Load and parse the config from disk.
///
/// Returns `Ok(Default::default())` if the file doesn't exist.
pub async fn load_config(path: &Path) -> Result<ProxyConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(ProxyConfig::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ProxyConfig = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse config TOML at: {}", path.display()))?;

    info!(path = %path.display(), "Loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).await.unwrap();
        assert_eq!(config, ProxyConfig::default());
    }

    #[tokio::test]
    async fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plateproxy.toml");
        std::fs::write(
            &path,
            "port = 8081\n\n[upstream]\napi_key = \"secret\"\n\n[log]\njson = true\n",
        )
        .unwrap();

        let config = load_config(&path).await.unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.bind_address, crate::defaults::BIND_ADDRESS);
        assert_eq!(config.upstream.api_key, "secret");
        assert_eq!(config.upstream.base_url, crate::defaults::UPSTREAM_URL);
        assert!(config.log.json);
        assert_eq!(config.log.level, "info");
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "port = \"not a number\"").unwrap();

        let err = load_config(&path).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
