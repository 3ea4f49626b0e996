//! Device network configuration exposed by `/api/config`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigValidationError;

/// Longest SSID allowed by 802.11.
pub const MAX_SSID_LEN: usize = 32;

/// Shortest non-empty WPA2 passphrase.
pub const MIN_PASSWORD_LEN: usize = 8;

/// How the device joins the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMode {
    /// The device runs its own access point.
    #[default]
    Solo,
    /// The device joins a cluster access point as a station.
    Cluster,
}

impl NetworkMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Cluster => "cluster",
        }
    }
}

impl fmt::Display for NetworkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NetworkMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solo" => Ok(Self::Solo),
            "cluster" => Ok(Self::Cluster),
            other => Err(format!("unknown network mode '{other}'")),
        }
    }
}

/// Configuration as reported by `GET /api/config`. The password is never returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub ssid: String,
    /// Measurement frequency in seconds.
    pub freq: u32,
    pub mode: NetworkMode,
}

/// New configuration submitted with `POST /api/config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub config: DeviceConfig,
    /// Wi-Fi passphrase; empty for an open access point.
    pub password: String,
}

impl ConfigUpdate {
    /// Check the update before it is sent; the device restarts on save.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigValidationError`] found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let ssid = self.config.ssid.trim();
        if ssid.is_empty() {
            return Err(ConfigValidationError::EmptySsid);
        }
        if ssid.len() > MAX_SSID_LEN {
            return Err(ConfigValidationError::SsidTooLong {
                max: MAX_SSID_LEN,
                actual: ssid.len(),
            });
        }
        if !self.password.is_empty() && self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ConfigValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        if self.config.freq == 0 {
            return Err(ConfigValidationError::ZeroFrequency);
        }
        Ok(())
    }

    /// Form fields in the order the firmware reads them.
    #[must_use]
    pub fn form_fields(&self) -> [(&'static str, String); 4] {
        [
            ("ssid", self.config.ssid.trim().to_string()),
            ("pass", self.password.clone()),
            ("freq", self.config.freq.to_string()),
            ("mode", self.config.mode.as_str().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(ssid: &str, password: &str, freq: u32) -> ConfigUpdate {
        ConfigUpdate {
            config: DeviceConfig {
                ssid: ssid.to_string(),
                freq,
                mode: NetworkMode::Solo,
            },
            password: password.to_string(),
        }
    }

    #[test]
    fn should_parse_config_body() {
        let config: DeviceConfig =
            serde_json::from_str(r#"{"ssid":"SSID_GMC_MC01","freq":15,"mode":"cluster"}"#)
                .unwrap();
        assert_eq!(config.ssid, "SSID_GMC_MC01");
        assert_eq!(config.freq, 15);
        assert_eq!(config.mode, NetworkMode::Cluster);
    }

    #[test]
    fn should_accept_open_access_point() {
        assert!(update("SSID_GMC_MC01", "", 15).validate().is_ok());
    }

    #[test]
    fn should_accept_wpa2_password() {
        assert!(update("SSID_GMC_MC01", "PWD_MC01", 15).validate().is_ok());
    }

    #[test]
    fn should_reject_empty_ssid() {
        assert_eq!(
            update("   ", "", 15).validate(),
            Err(ConfigValidationError::EmptySsid)
        );
    }

    #[test]
    fn should_reject_long_ssid() {
        let ssid = "x".repeat(33);
        assert_eq!(
            update(&ssid, "", 15).validate(),
            Err(ConfigValidationError::SsidTooLong {
                max: 32,
                actual: 33
            })
        );
    }

    #[test]
    fn should_reject_short_password() {
        assert_eq!(
            update("gmc", "1234", 15).validate(),
            Err(ConfigValidationError::PasswordTooShort { min: 8 })
        );
    }

    #[test]
    fn should_reject_zero_frequency() {
        assert_eq!(
            update("gmc", "", 0).validate(),
            Err(ConfigValidationError::ZeroFrequency)
        );
    }

    #[test]
    fn should_emit_form_fields_in_firmware_order() {
        let fields = update(" gmc ", "PWD_MC01", 30).form_fields();
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["ssid", "pass", "freq", "mode"]);
        assert_eq!(fields[0].1, "gmc");
        assert_eq!(fields[2].1, "30");
        assert_eq!(fields[3].1, "solo");
    }

    #[test]
    fn should_parse_network_mode_from_str() {
        assert_eq!("cluster".parse::<NetworkMode>(), Ok(NetworkMode::Cluster));
        assert!("mesh".parse::<NetworkMode>().is_err());
    }
}
