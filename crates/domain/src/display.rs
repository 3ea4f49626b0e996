//! Derivation of display-ready text from a [`StatusPayload`].
//!
//! Everything here is a pure function of its inputs. The poller recomputes a
//! fresh [`DisplayState`] on every refresh and keeps no history.

use std::fmt;

use crate::status::StatusPayload;

/// Shown in place of the temperature or date when no value is known.
pub const VALUE_PLACEHOLDER: &str = "--";

/// Shown in place of the date when the payload carries none.
pub const DATE_PLACEHOLDER: &str = "--:--";

/// Status text for payloads without an uptime (simulated or freshly booted device).
pub const SIMULATION_STATUS: &str = "Simulation";

/// Status text after a failed refresh.
pub const CONNECTION_LOST_STATUS: &str = "Connection lost";

/// Status text before the first refresh has resolved.
pub const PENDING_STATUS: &str = "Waiting for device\u{2026}";

/// Connectivity badge, driven solely by the outcome of a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    /// Running without a device; the placeholder payload is shown.
    Local,
    /// Last status request succeeded.
    Connected,
    /// Last status request failed; the next expiry retries.
    Disconnected,
}

/// Color associated with a [`Badge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Green,
    Orange,
    Red,
}

impl Badge {
    /// Human-readable badge label.
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Local => "Local / test",
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected - retrying",
        }
    }

    #[must_use]
    pub fn color(self) -> BadgeColor {
        match self {
            Self::Local => BadgeColor::Orange,
            Self::Connected => BadgeColor::Green,
            Self::Disconnected => BadgeColor::Red,
        }
    }
}

impl BadgeColor {
    /// CSS color value used by the dashboard.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Green => "#27ae60",
            Self::Orange => "#e67e22",
            Self::Red => "#c0392b",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Display-ready readout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub temperature_text: String,
    pub date_text: String,
    pub status_text: String,
    /// `None` until the first refresh resolves.
    pub badge: Option<Badge>,
}

impl DisplayState {
    /// State shown before the first refresh has resolved.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            temperature_text: VALUE_PLACEHOLDER.to_string(),
            date_text: VALUE_PLACEHOLDER.to_string(),
            status_text: PENDING_STATUS.to_string(),
            badge: None,
        }
    }

    /// Derive every field from a payload the device (or the local placeholder) produced.
    #[must_use]
    pub fn from_payload(payload: &StatusPayload, badge: Badge) -> Self {
        Self {
            temperature_text: temperature_text(payload.temp),
            date_text: date_text(payload.date.as_deref()),
            status_text: status_text(payload.uptime),
            badge: Some(badge),
        }
    }

    /// State after a failed refresh.
    #[must_use]
    pub fn disconnected() -> Self {
        Self {
            temperature_text: VALUE_PLACEHOLDER.to_string(),
            date_text: VALUE_PLACEHOLDER.to_string(),
            status_text: CONNECTION_LOST_STATUS.to_string(),
            badge: Some(Badge::Disconnected),
        }
    }

    /// Badge label, or an ellipsis while undetermined.
    #[must_use]
    pub fn badge_text(&self) -> &'static str {
        self.badge.map_or("\u{2026}", Badge::text)
    }

    #[must_use]
    pub fn badge_color(&self) -> Option<BadgeColor> {
        self.badge.map(Badge::color)
    }
}

/// Render tenths of a degree as degrees with one decimal and a comma separator.
///
/// `187` becomes `"18,7"`, `-5` becomes `"-0,5"`.
#[must_use]
pub fn temperature_text(tenths: i32) -> String {
    let sign = if tenths < 0 { "-" } else { "" };
    let abs = tenths.unsigned_abs();
    format!("{sign}{},{}", abs / 10, abs % 10)
}

/// Pass the device date through, substituting a placeholder when absent or blank.
#[must_use]
pub fn date_text(date: Option<&str>) -> String {
    match date {
        Some(date) if !date.trim().is_empty() => date.to_string(),
        _ => DATE_PLACEHOLDER.to_string(),
    }
}

/// `Uptime: Ns` for a running device, the simulation label otherwise.
#[must_use]
pub fn status_text(uptime_secs: u64) -> String {
    if uptime_secs == 0 {
        SIMULATION_STATUS.to_string()
    } else {
        format!("Uptime: {uptime_secs}s")
    }
}
