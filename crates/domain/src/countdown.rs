//! One-second countdown that paces status refreshes.

/// Seconds between two status refreshes.
pub const REFRESH_INTERVAL_SECS: u32 = 15;

/// Result of a single [`Countdown::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still counting down.
    Waiting,
    /// Reached zero and was re-seeded; a refresh is due.
    Expired,
}

/// Counter decremented once per second and re-seeded on expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    interval: u32,
    seconds_remaining: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(REFRESH_INTERVAL_SECS)
    }
}

impl Countdown {
    /// Start a countdown seeded with `interval` seconds (at least one).
    #[must_use]
    pub fn new(interval: u32) -> Self {
        let interval = interval.max(1);
        Self {
            interval,
            seconds_remaining: interval,
        }
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> Tick {
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.seconds_remaining = self.interval;
            Tick::Expired
        } else {
            Tick::Waiting
        }
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    #[must_use]
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Visible countdown text.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Next refresh in {}s", self.seconds_remaining)
    }
}
