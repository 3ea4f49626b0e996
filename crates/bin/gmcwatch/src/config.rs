//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `gmcwatch.toml` in the working directory (or the path given with
//! `--config`). Every field has a sensible default so the file is optional.
//! Environment variables take precedence over file values, and `--url` takes
//! precedence over both.

use std::path::Path;
use std::time::Duration;

use gmc_domain::countdown::REFRESH_INTERVAL_SECS;
use gmc_domain::mode::ConnectionMode;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device connection settings.
    pub device: DeviceSettings,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Where the device lives and how to talk to it.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DeviceSettings {
    /// Base URL of the device (e.g. `http://192.168.4.1`).
    pub url: String,
    /// Local/remote selection.
    pub mode: ModeSetting,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Seconds between status refreshes.
    pub refresh_secs: u32,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// How the connection mode is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    /// Local for loopback URLs, remote otherwise.
    #[default]
    Auto,
    Local,
    Remote,
}

impl ModeSetting {
    /// Resolve against the device URL's scheme and host.
    #[must_use]
    pub fn resolve(self, scheme: &str, host: &str) -> ConnectionMode {
        match self {
            Self::Auto => ConnectionMode::detect(scheme, host),
            Self::Local => ConnectionMode::Local,
            Self::Remote => ConnectionMode::Remote,
        }
    }
}

impl std::str::FromStr for ModeSetting {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            other => Err(ConfigError::Validation(format!(
                "mode must be auto, local or remote, got '{other}'"
            ))),
        }
    }
}

impl Config {
    /// Load configuration from `path` (if present), apply environment-variable
    /// overrides, then the `--url` override.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load(path: &Path, url_override: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides()?;
        if let Some(url) = url_override {
            config.device.url = url.to_string();
        }
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("GMC_DEVICE_URL") {
            self.device.url = val;
        }
        if let Ok(val) = std::env::var("GMC_MODE") {
            self.device.mode = val.parse()?;
        }
        if let Ok(val) = std::env::var("GMC_TIMEOUT_SECS")
            && let Ok(secs) = val.parse()
        {
            self.device.timeout_secs = secs;
        }
        if let Ok(val) = std::env::var("GMC_REFRESH_SECS")
            && let Ok(secs) = val.parse()
        {
            self.device.refresh_secs = secs;
        }
        if let Ok(val) = std::env::var("GMC_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.device.url.trim().is_empty() {
            return Err(ConfigError::Validation("device url must not be empty".to_string()));
        }
        if self.device.timeout_secs == 0 {
            return Err(ConfigError::Validation("timeout must be non-zero".to_string()));
        }
        if self.device.refresh_secs == 0 {
            return Err(ConfigError::Validation(
                "refresh interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.device.timeout_secs)
    }
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            url: "http://192.168.4.1".to_string(),
            mode: ModeSetting::Auto,
            timeout_secs: 5,
            refresh_secs: REFRESH_INTERVAL_SECS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "gmcwatch=info,gmc_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.device.url, "http://192.168.4.1");
        assert_eq!(config.device.mode, ModeSetting::Auto);
        assert_eq!(config.device.timeout_secs, 5);
        assert_eq!(config.device.refresh_secs, 15);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.device.refresh_secs, 15);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [device]
            url = 'http://192.168.1.48'
            mode = 'remote'
            timeout_secs = 2
            refresh_secs = 30

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.device.url, "http://192.168.1.48");
        assert_eq!(config.device.mode, ModeSetting::Remote);
        assert_eq!(config.device.timeout_secs, 2);
        assert_eq!(config.device.refresh_secs, 30);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [device]
            mode = 'local'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.device.mode, ModeSetting::Local);
        assert_eq!(config.device.url, "http://192.168.4.1");
    }

    #[test]
    fn should_report_parse_error_for_unknown_mode() {
        let result: Result<Config, _> = toml::from_str("[device]\nmode = 'mesh'");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file(Path::new("nonexistent.toml")).unwrap();
        assert_eq!(config.device.timeout_secs, 5);
    }

    #[test]
    fn should_reject_empty_url() {
        let mut config = Config::default();
        config.device.url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_timeout() {
        let mut config = Config::default();
        config.device.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_refresh_interval() {
        let mut config = Config::default();
        config.device.refresh_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_resolve_auto_mode_from_host() {
        assert_eq!(
            ModeSetting::Auto.resolve("http", "127.0.0.1"),
            ConnectionMode::Local
        );
        assert_eq!(
            ModeSetting::Auto.resolve("http", "192.168.4.1"),
            ConnectionMode::Remote
        );
    }

    #[test]
    fn should_honour_explicit_mode() {
        assert_eq!(
            ModeSetting::Remote.resolve("http", "localhost"),
            ConnectionMode::Remote
        );
        assert_eq!(
            ModeSetting::Local.resolve("http", "192.168.4.1"),
            ConnectionMode::Local
        );
    }

    #[test]
    fn should_parse_mode_setting_case_insensitively() {
        assert_eq!("Remote".parse::<ModeSetting>().unwrap(), ModeSetting::Remote);
        assert!("mesh".parse::<ModeSetting>().is_err());
    }

    #[test]
    fn should_format_timeout() {
        assert_eq!(Config::default().timeout(), Duration::from_secs(5));
    }
}
