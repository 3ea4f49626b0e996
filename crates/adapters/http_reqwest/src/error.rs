//! Reqwest adapter error types.

use gmc_domain::error::FetchError;

/// Errors raised while constructing an [`HttpDeviceClient`](crate::HttpDeviceClient).
#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    /// The configured base URL cannot be parsed or cannot carry paths.
    #[error("invalid device URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client")]
    Build(#[from] reqwest::Error),
}

/// Classify a reqwest failure into the port's error taxonomy.
pub(crate) fn fetch_error(err: &reqwest::Error) -> FetchError {
    if err.is_decode() {
        FetchError::Decode(err.to_string())
    } else if let Some(status) = err.status() {
        FetchError::Status(status.as_u16())
    } else {
        FetchError::Network(err.to_string())
    }
}
