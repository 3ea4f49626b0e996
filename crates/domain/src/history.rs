//! Recent measurements returned by `GET /api/history`.

use serde::{Deserialize, Serialize};

/// Maximum number of points the device keeps.
pub const HISTORY_CAPACITY: usize = 120;

/// A single measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Temperature in degrees Celsius.
    pub v: f64,
    /// Time of day as `HH:MM:SS`.
    pub t: String,
}

impl HistoryPoint {
    /// Seconds since midnight, if `t` is a well-formed `HH:MM:SS` (or `HH:MM`).
    #[must_use]
    pub fn seconds_of_day(&self) -> Option<u32> {
        let mut parts = self.t.trim().split(':');
        let hours: u32 = parts.next()?.parse().ok()?;
        let minutes: u32 = parts.next()?.parse().ok()?;
        let seconds: u32 = match parts.next() {
            Some(part) => part.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() || hours > 23 || minutes > 59 || seconds > 59 {
            return None;
        }
        Some(hours * 3600 + minutes * 60 + seconds)
    }
}

/// Extremes and latest value of a history window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistorySummary {
    pub min: f64,
    pub max: f64,
    pub last: f64,
    pub count: usize,
}

impl HistorySummary {
    /// Summarize `points`; `None` when empty.
    #[must_use]
    pub fn from_points(points: &[HistoryPoint]) -> Option<Self> {
        let last = points.last()?.v;
        let (min, max) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), p| {
                (min.min(p.v), max.max(p.v))
            });
        Some(Self {
            min,
            max,
            last,
            count: points.len(),
        })
    }
}

/// Render degrees with one decimal and a comma separator.
#[must_use]
pub fn celsius_text(value: f64) -> String {
    format!("{value:.1}").replace('.', ",")
}
