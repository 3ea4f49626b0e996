//! Error types shared by every layer that talks to the device.
//!
//! Adapters convert their HTTP library errors into [`FetchError`] so the
//! application layer never sees `reqwest` or `gloo-net` types. Messages are
//! carried as strings because the browser adapter's errors are not `Send`.

/// Why a request to the device failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (unreachable host, timeout, CORS, …).
    #[error("network error: {0}")]
    Network(String),

    /// The device answered with a non-2xx status code.
    #[error("device answered HTTP {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Reasons a [`DeviceConfig`](crate::device_config::DeviceConfig) is rejected
/// before it is sent to the device.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    /// The SSID is empty.
    #[error("SSID must not be empty")]
    EmptySsid,

    /// The SSID exceeds the 802.11 limit.
    #[error("SSID must be at most {max} bytes, got {actual}")]
    SsidTooLong {
        /// Maximum allowed length.
        max: usize,
        /// Actual length.
        actual: usize,
    },

    /// A non-empty password shorter than WPA2 allows.
    #[error("password must be empty or at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// The measurement frequency is zero.
    #[error("frequency must be greater than zero")]
    ZeroFrequency,
}
