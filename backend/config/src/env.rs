//! Environment variable overrides.
//!
//! Every `PLATEPROXY_*` variable that is set and non-empty replaces the
//! matching value loaded from file or defaults.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::warn;

use crate::schema::ProxyConfig;

/// Points at a TOML config file when `--config` is not given.
pub const CONFIG_PATH_VAR: &str = "PLATEPROXY_CONFIG";

pub const BIND_VAR: &str = "PLATEPROXY_BIND";
pub const PORT_VAR: &str = "PLATEPROXY_PORT";
pub const UPSTREAM_URL_VAR: &str = "PLATEPROXY_UPSTREAM_URL";
pub const UPSTREAM_KEY_VAR: &str = "PLATEPROXY_UPSTREAM_KEY";
pub const USER_AGENT_VAR: &str = "PLATEPROXY_USER_AGENT";
pub const LOG_LEVEL_VAR: &str = "PLATEPROXY_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "PLATEPROXY_LOG_DIR";
pub const LOG_JSON_VAR: &str = "PLATEPROXY_LOG_JSON";

impl ProxyConfig {
    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(&std::env::vars().collect());
    }

    /// Apply overrides from a provided map (useful for testing).
    pub fn apply_env_with(&mut self, env: &HashMap<String, String>) {
        let get = |name: &str| env.get(name).filter(|v| !v.is_empty()).cloned();

        if let Some(bind) = get(BIND_VAR) {
            self.bind_address = bind;
        }
        if let Some(raw) = get(PORT_VAR) {
            match raw.parse() {
                Ok(port) => self.port = port,
                Err(_) => warn!(var = PORT_VAR, value = %raw, "Ignoring unparsable port"),
            }
        }
        if let Some(url) = get(UPSTREAM_URL_VAR) {
            self.upstream.base_url = url;
        }
        if let Some(key) = get(UPSTREAM_KEY_VAR) {
            self.upstream.api_key = key;
        }
        if let Some(agent) = get(USER_AGENT_VAR) {
            self.upstream.user_agent = agent;
        }
        if let Some(level) = get(LOG_LEVEL_VAR) {
            self.log.level = level;
        }
        if let Some(dir) = get(LOG_DIR_VAR) {
            self.log.dir = Some(PathBuf::from(dir));
        }
        if let Some(flag) = get(LOG_JSON_VAR) {
            self.log.json = matches!(flag.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
    }
}
