//! Status poller: the refresh state machine behind the dashboard readout.
//!
//! A single [`StatusPoller`] owns the countdown and the current
//! [`DisplayState`]. The driver (browser task or terminal loop) calls
//! [`tick`](StatusPoller::tick) once per second; every
//! [`REFRESH_INTERVAL_SECS`](gmc_domain::countdown::REFRESH_INTERVAL_SECS)
//! ticks the poller fetches `/api/status` and recomputes the readout.
//!
//! The refresh is awaited inside `tick`, so at most one status request is in
//! flight and an old response can never overwrite a newer one.

use gmc_domain::countdown::{Countdown, Tick};
use gmc_domain::display::{Badge, DisplayState};
use gmc_domain::mode::ConnectionMode;
use gmc_domain::status::StatusPayload;

use crate::ports::DeviceApi;

/// What happened during one [`StatusPoller::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Seconds left before the next refresh, after this tick.
    pub seconds_remaining: u32,
    /// Whether this tick ran a refresh.
    pub refreshed: bool,
}

/// Periodic status refresher.
pub struct StatusPoller<A> {
    api: A,
    mode: ConnectionMode,
    countdown: Countdown,
    display: DisplayState,
}

impl<A: DeviceApi> StatusPoller<A> {
    /// Create a poller with the default 15 s refresh interval.
    pub fn new(api: A, mode: ConnectionMode) -> Self {
        Self::with_countdown(api, mode, Countdown::default())
    }

    /// Create a poller with a custom countdown.
    pub fn with_countdown(api: A, mode: ConnectionMode, countdown: Countdown) -> Self {
        Self {
            api,
            mode,
            countdown,
            display: DisplayState::pending(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> ConnectionMode {
        self.mode
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// The readout as of the last refresh.
    #[must_use]
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Advance the countdown by one second, refreshing on expiry.
    pub async fn tick(&mut self) -> TickReport {
        let refreshed = match self.countdown.tick() {
            Tick::Waiting => false,
            Tick::Expired => {
                self.refresh().await;
                true
            }
        };
        TickReport {
            seconds_remaining: self.countdown.seconds_remaining(),
            refreshed,
        }
    }

    /// Fetch the status once and recompute the readout.
    ///
    /// In [`ConnectionMode::Local`] no request is made and the placeholder
    /// payload is shown. Any failure (network, HTTP status, body) collapses
    /// into the disconnected readout; the next expiry retries.
    pub async fn refresh(&mut self) -> &DisplayState {
        self.display = match self.mode {
            ConnectionMode::Local => {
                tracing::debug!("local mode, showing placeholder status");
                DisplayState::from_payload(&StatusPayload::placeholder(), Badge::Local)
            }
            ConnectionMode::Remote => match self.api.fetch_status().await {
                Ok(payload) => {
                    tracing::debug!(
                        temp = payload.temp,
                        uptime = payload.uptime,
                        "status refreshed"
                    );
                    DisplayState::from_payload(&payload, Badge::Connected)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "status refresh failed");
                    DisplayState::disconnected()
                }
            },
        };
        &self.display
    }
}
