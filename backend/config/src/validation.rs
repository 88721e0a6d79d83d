//! Config validation with user-friendly error messages.

use crate::schema::ProxyConfig;
use thiserror::Error;
use url::Url;

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &ProxyConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_listener(config, &mut report);
    validate_upstream(config, &mut report);
    report
}

fn validate_listener(config: &ProxyConfig, report: &mut ValidationReport) {
    if config.bind_address.trim().is_empty() {
        report.error("bind_address", "Bind address cannot be empty");
    }
    if config.port == 0 {
        report.error("port", "Port must be > 0");
    }
}

fn validate_upstream(config: &ProxyConfig, report: &mut ValidationReport) {
    let upstream = &config.upstream;
    match Url::parse(&upstream.base_url) {
        Ok(url) => match url.scheme() {
            "https" => {}
            "http" => report.warn("upstream.base_url", "Upstream is plain http"),
            other => report.error(
                "upstream.base_url",
                format!("Unsupported scheme '{other}'; expected http or https"),
            ),
        },
        Err(e) => report.error("upstream.base_url", format!("Invalid URL: {e}")),
    }
    if upstream.api_key.is_empty() {
        report.warn("upstream.api_key", "Empty api key; upstream will likely reject lookups");
    }
    if upstream.user_agent.trim().is_empty() {
        report.error("upstream.user_agent", "User-Agent cannot be empty");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let report = validate(&ProxyConfig::default());
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn rejects_bad_url_and_zero_port() {
        let mut config = ProxyConfig::default();
        config.port = 0;
        config.upstream.base_url = "not a url".into();
        let report = validate(&config);
        assert!(!report.is_valid());
        let paths: Vec<_> = report.errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["port", "upstream.base_url"]);
    }

    #[test]
    fn rejects_non_http_scheme() {
        let mut config = ProxyConfig::default();
        config.upstream.base_url = "ftp://example.com/lookup".into();
        assert!(!validate(&config).is_valid());
    }

    #[test]
    fn warns_on_plain_http_and_empty_key() {
        let mut config = ProxyConfig::default();
        config.upstream.base_url = "http://127.0.0.1:9000".into();
        config.upstream.api_key.clear();
        let report = validate(&config);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 2);
    }
}
