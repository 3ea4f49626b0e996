//! Config service: read and replace the device's network configuration.

use gmc_domain::device_config::{ConfigUpdate, DeviceConfig};
use gmc_domain::error::{ConfigValidationError, FetchError};

use crate::ports::DeviceApi;

/// Why saving a configuration failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveConfigError {
    /// Rejected before reaching the device.
    #[error("invalid configuration")]
    Invalid(#[from] ConfigValidationError),

    /// The device request failed.
    #[error("device request failed")]
    Fetch(#[from] FetchError),
}

/// Application service for the device configuration.
#[derive(Debug, Clone, Copy)]
pub struct ConfigService<A> {
    api: A,
}

impl<A: DeviceApi> ConfigService<A> {
    /// Create a new service backed by the given device API.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Read the current configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of the underlying request.
    pub async fn load(&self) -> Result<DeviceConfig, FetchError> {
        self.api.fetch_config().await.inspect_err(|err| {
            tracing::warn!(error = %err, "config fetch failed");
        })
    }

    /// Validate and submit a new configuration. The device restarts afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SaveConfigError::Invalid`] without contacting the device when
    /// validation fails, or [`SaveConfigError::Fetch`] when the request fails.
    pub async fn save(&self, update: &ConfigUpdate) -> Result<(), SaveConfigError> {
        update.validate()?;
        self.api.save_config(update).await.inspect_err(|err| {
            tracing::warn!(error = %err, "config save failed");
        })?;
        tracing::info!(
            ssid = %update.config.ssid,
            mode = %update.config.mode,
            "configuration saved, device restarting"
        );
        Ok(())
    }
}
