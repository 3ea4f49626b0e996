//! Action service: one-shot commands triggered by the user.
//!
//! Actions run outside the polling loop. A failed action is logged and
//! returned to the caller, which keeps its previous readout.

use gmc_domain::action::LedState;
use gmc_domain::error::FetchError;
use gmc_domain::mode::ConnectionMode;

use crate::ports::DeviceApi;

/// Outcome of [`ActionService::sync_clock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSync {
    /// The device clock was set.
    Sent,
    /// Local mode: there is no device to sync.
    Skipped,
}

/// Application service for user-initiated device actions.
#[derive(Debug, Clone, Copy)]
pub struct ActionService<A> {
    api: A,
    mode: ConnectionMode,
}

impl<A: DeviceApi> ActionService<A> {
    /// Create a new service backed by the given device API.
    pub fn new(api: A, mode: ConnectionMode) -> Self {
        Self { api, mode }
    }

    /// Send a value to the device and return the acknowledgment text.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of the underlying request.
    pub async fn send_value(&self, value: i64) -> Result<String, FetchError> {
        match self.api.send_value(value).await {
            Ok(echo) => {
                tracing::info!(value, received = %echo.received(), "value acknowledged");
                Ok(echo.acknowledgment())
            }
            Err(err) => {
                tracing::warn!(value, error = %err, "sending value failed");
                Err(err)
            }
        }
    }

    /// Ask the device to drive its GPIO and return its plain-text answer.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of the underlying request.
    pub async fn pilot_gpio(&self) -> Result<String, FetchError> {
        match self.api.pilot_gpio().await {
            Ok(text) => {
                let text = text.trim().to_string();
                tracing::info!(answer = %text, "GPIO action done");
                Ok(text)
            }
            Err(err) => {
                tracing::warn!(error = %err, "GPIO action failed");
                Err(err)
            }
        }
    }

    /// Flip the output pin and return its new state.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of the underlying request.
    pub async fn toggle_led(&self) -> Result<LedState, FetchError> {
        match self.api.toggle_led().await {
            Ok(state) => {
                tracing::info!(%state, "LED toggled");
                Ok(state)
            }
            Err(err) => {
                tracing::warn!(error = %err, "LED toggle failed");
                Err(err)
            }
        }
    }

    /// Set the device clock to `unix_seconds`. Skipped in local mode.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of the underlying request.
    pub async fn sync_clock(&self, unix_seconds: i64) -> Result<ClockSync, FetchError> {
        if self.mode.is_local() {
            tracing::debug!("local mode, clock sync skipped");
            return Ok(ClockSync::Skipped);
        }
        match self.api.sync_time(unix_seconds).await {
            Ok(()) => {
                tracing::info!(unix_seconds, "device clock synced");
                Ok(ClockSync::Sent)
            }
            Err(err) => {
                tracing::warn!(error = %err, "clock sync failed");
                Err(err)
            }
        }
    }
}
