//! Payloads of the one-shot actions the user can trigger.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output pin state reported by `GET /api/led`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LedState {
    On,
    Off,
}

impl LedState {
    /// Color applied to the control that toggled the pin.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::On => "#f1c40f",
            Self::Off => "#7f8c8d",
        }
    }

    /// Readout shown next to the control.
    #[must_use]
    pub fn readout(self) -> String {
        format!("LED: {self}")
    }
}

impl fmt::Display for LedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("ON"),
            Self::Off => f.write_str("OFF"),
        }
    }
}

/// Body of `GET /api/led`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LedResponse {
    pub status: LedState,
}

/// Body of `GET /api/get_uptime?valeur=…`: the device echoes what it received.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValueEcho {
    /// Echoed value. The firmware sends a string but older builds sent a number.
    pub recu: serde_json::Value,
    #[serde(default)]
    pub status: Option<String>,
}

impl ValueEcho {
    /// The echoed value as plain text.
    #[must_use]
    pub fn received(&self) -> String {
        match &self.recu {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }

    /// Acknowledgment shown to the user.
    #[must_use]
    pub fn acknowledgment(&self) -> String {
        format!("Device received: {}", self.received())
    }
}
