//! Configuration file loading.
//!
//! Reads `config.toml` from the user config directory, falling back to
//! built-in defaults when the file is absent or unreadable. The effective
//! source ("default" or the file path) is surfaced in the security report.

use crate::constants;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Probe-related settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Locally-scoped targets, `host` or `host:port`.
    pub targets: Vec<String>,
    /// TCP port used when a target gives no explicit port.
    pub port: u16,
    /// Per-attempt connect timeout in milliseconds.
    pub timeout_ms: u64,
    /// Connect attempts per target.
    pub attempts: u32,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            targets: constants::DEFAULT_PROBE_TARGETS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            port: constants::DEFAULT_PROBE_PORT,
            timeout_ms: constants::DEFAULT_PROBE_TIMEOUT_MS,
            attempts: constants::DEFAULT_PROBE_ATTEMPTS,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub probe: ProbeConfig,
    /// Seconds between background investigation passes in watch mode.
    pub poll_rate_secs: Option<u64>,
}

impl Config {
    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns the TOML parse error as a string.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Invalid config.toml: {e}"))
    }

    /// Load from `path`, falling back to defaults when absent.
    ///
    /// Returns the config and a source tag for reporting.
    #[must_use]
    pub fn load(path: &Path) -> (Self, String) {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => (config, path.display().to_string()),
                Err(_) => (Self::default(), "default (config.toml invalid)".to_string()),
            },
            Err(_) => (Self::default(), "default".to_string()),
        }
    }

    /// Effective watch-mode poll interval.
    #[must_use]
    pub fn poll_rate(&self) -> Duration {
        self.poll_rate_secs
            .map_or(constants::WATCH_POLL_RATE, Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.probe.port, constants::DEFAULT_PROBE_PORT);
        assert_eq!(config.probe.attempts, constants::DEFAULT_PROBE_ATTEMPTS);
        assert_eq!(config.probe.targets.len(), 2);
        assert_eq!(config.poll_rate(), constants::WATCH_POLL_RATE);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
poll_rate_secs = 5

[probe]
targets = ["192.168.0.200", "crookedservices.local:8080"]
port = 443
timeout_ms = 500
attempts = 2
"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.probe.targets.len(), 2);
        assert_eq!(config.probe.port, 443);
        assert_eq!(config.probe.timeout_ms, 500);
        assert_eq!(config.poll_rate(), Duration::from_secs(5));
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let toml = r#"
[probe]
targets = ["10.0.0.5"]
"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.probe.targets, vec!["10.0.0.5".to_string()]);
        assert_eq!(config.probe.port, constants::DEFAULT_PROBE_PORT);
    }

    #[test]
    fn test_parse_invalid_config() {
        assert!(Config::from_toml("probe = 3").is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let (config, source) = Config::load(Path::new("/nonexistent/lanwarden/config.toml"));
        assert_eq!(config, Config::default());
        assert_eq!(source, "default");
    }
}
