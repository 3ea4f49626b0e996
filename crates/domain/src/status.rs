//! Status payload returned by `GET /api/status`.

use serde::{Deserialize, Serialize};

/// Raw status record reported by the device.
///
/// The firmware may add fields such as `id`, `msg` or `led_status`; they are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    /// Last measured temperature in tenths of a degree Celsius.
    pub temp: i32,
    /// Timestamp of the measurement as formatted by the device.
    #[serde(default)]
    pub date: Option<String>,
    /// Seconds since the device booted, `0` when unknown.
    #[serde(default)]
    pub uptime: u64,
}

impl StatusPayload {
    /// Fixed stand-in used when the dashboard runs without a device.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            temp: 215,
            date: Some("--:--".to_string()),
            uptime: 0,
        }
    }
}
