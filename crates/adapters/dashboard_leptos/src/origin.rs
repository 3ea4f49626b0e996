//! Connection-mode detection from the page origin.

use gmc_domain::mode::ConnectionMode;
use leptos::prelude::*;

/// Classify `window.location`: pages opened from a file or a loopback host
/// have no device behind them.
#[must_use]
pub fn detect_connection_mode() -> ConnectionMode {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return ConnectionMode::Local;
    };
    let protocol = location.protocol().unwrap_or_default();
    let hostname = location.hostname().unwrap_or_default();
    ConnectionMode::detect(&protocol, &hostname)
}

/// Mode provided by [`App`](crate::App), detected on the spot if absent.
#[must_use]
pub fn use_connection_mode() -> ConnectionMode {
    use_context::<ConnectionMode>().unwrap_or_else(detect_connection_mode)
}
