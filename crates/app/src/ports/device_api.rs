//! Device port: every request the dashboard can make to the device.
//!
//! Futures carry no `Send` bound: the browser adapter runs on a
//! single-threaded executor and its HTTP futures are `!Send`.

use std::future::Future;

use gmc_domain::action::{LedState, ValueEcho};
use gmc_domain::device_config::{ConfigUpdate, DeviceConfig};
use gmc_domain::error::FetchError;
use gmc_domain::history::HistoryPoint;
use gmc_domain::status::StatusPayload;

/// Paths served by the device firmware.
pub mod endpoint {
    pub const STATUS: &str = "/api/status";
    /// Takes `valeur=<int>` and echoes it back.
    pub const SEND_VALUE: &str = "/api/get_uptime";
    pub const PILOT_GPIO: &str = "/api/piloter_gpio";
    pub const LED: &str = "/api/led";
    /// Takes `t=<unix seconds>`.
    pub const SYNC_TIME: &str = "/api/sync_time";
    pub const HISTORY: &str = "/api/history";
    pub const CONFIG: &str = "/api/config";
}

/// Request/response access to the device's HTTP API.
pub trait DeviceApi {
    /// `GET /api/status`.
    fn fetch_status(&self) -> impl Future<Output = Result<StatusPayload, FetchError>>;

    /// `GET /api/get_uptime?valeur=<value>`.
    fn send_value(&self, value: i64) -> impl Future<Output = Result<ValueEcho, FetchError>>;

    /// `GET /api/piloter_gpio`; returns the plain-text answer.
    fn pilot_gpio(&self) -> impl Future<Output = Result<String, FetchError>>;

    /// `GET /api/led`; the device flips the pin and reports the new state.
    fn toggle_led(&self) -> impl Future<Output = Result<LedState, FetchError>>;

    /// `GET /api/sync_time?t=<unix_seconds>`. The body is ignored.
    fn sync_time(&self, unix_seconds: i64) -> impl Future<Output = Result<(), FetchError>>;

    /// `GET /api/history`.
    fn fetch_history(&self) -> impl Future<Output = Result<Vec<HistoryPoint>, FetchError>>;

    /// `GET /api/config`.
    fn fetch_config(&self) -> impl Future<Output = Result<DeviceConfig, FetchError>>;

    /// `POST /api/config` as a form. The device restarts after answering.
    fn save_config(&self, update: &ConfigUpdate) -> impl Future<Output = Result<(), FetchError>>;
}

impl<T: DeviceApi> DeviceApi for &T {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusPayload, FetchError>> {
        (**self).fetch_status()
    }

    fn send_value(&self, value: i64) -> impl Future<Output = Result<ValueEcho, FetchError>> {
        (**self).send_value(value)
    }

    fn pilot_gpio(&self) -> impl Future<Output = Result<String, FetchError>> {
        (**self).pilot_gpio()
    }

    fn toggle_led(&self) -> impl Future<Output = Result<LedState, FetchError>> {
        (**self).toggle_led()
    }

    fn sync_time(&self, unix_seconds: i64) -> impl Future<Output = Result<(), FetchError>> {
        (**self).sync_time(unix_seconds)
    }

    fn fetch_history(&self) -> impl Future<Output = Result<Vec<HistoryPoint>, FetchError>> {
        (**self).fetch_history()
    }

    fn fetch_config(&self) -> impl Future<Output = Result<DeviceConfig, FetchError>> {
        (**self).fetch_config()
    }

    fn save_config(&self, update: &ConfigUpdate) -> impl Future<Output = Result<(), FetchError>> {
        (**self).save_config(update)
    }
}
