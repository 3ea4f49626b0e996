//! Per-request deadline for any [`DeviceApi`].
//!
//! The poller awaits each refresh inside `tick`, so a request that never
//! settles would freeze the countdown. [`TimeBounded`] races every call
//! against a timer supplied by the driver (`gloo-timers` in the browser,
//! `tokio::time` in tests) and turns an expiry into [`FetchError::Network`].

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};
use gmc_domain::action::{LedState, ValueEcho};
use gmc_domain::device_config::{ConfigUpdate, DeviceConfig};
use gmc_domain::error::FetchError;
use gmc_domain::history::HistoryPoint;
use gmc_domain::status::StatusPayload;

use crate::ports::DeviceApi;

/// Message carried by the error of an expired request.
pub const TIMED_OUT: &str = "request timed out";

/// [`DeviceApi`] decorator failing any call that outlives `sleep()`.
#[derive(Debug, Clone, Copy)]
pub struct TimeBounded<A, S> {
    api: A,
    sleep: S,
}

impl<A, S, D> TimeBounded<A, S>
where
    S: Fn() -> D,
    D: Future<Output = ()>,
{
    /// `sleep` is called once per request and must resolve at the deadline.
    pub fn new(api: A, sleep: S) -> Self {
        Self { api, sleep }
    }

    async fn bounded<T>(
        &self,
        request: impl Future<Output = Result<T, FetchError>>,
    ) -> Result<T, FetchError> {
        match select(pin!(request), pin!((self.sleep)())).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                tracing::warn!("device request timed out");
                Err(FetchError::Network(TIMED_OUT.to_string()))
            }
        }
    }
}

impl<A, S, D> DeviceApi for TimeBounded<A, S>
where
    A: DeviceApi,
    S: Fn() -> D,
    D: Future<Output = ()>,
{
    async fn fetch_status(&self) -> Result<StatusPayload, FetchError> {
        self.bounded(self.api.fetch_status()).await
    }

    async fn send_value(&self, value: i64) -> Result<ValueEcho, FetchError> {
        self.bounded(self.api.send_value(value)).await
    }

    async fn pilot_gpio(&self) -> Result<String, FetchError> {
        self.bounded(self.api.pilot_gpio()).await
    }

    async fn toggle_led(&self) -> Result<LedState, FetchError> {
        self.bounded(self.api.toggle_led()).await
    }

    async fn sync_time(&self, unix_seconds: i64) -> Result<(), FetchError> {
        self.bounded(self.api.sync_time(unix_seconds)).await
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryPoint>, FetchError> {
        self.bounded(self.api.fetch_history()).await
    }

    async fn fetch_config(&self) -> Result<DeviceConfig, FetchError> {
        self.bounded(self.api.fetch_config()).await
    }

    async fn save_config(&self, update: &ConfigUpdate) -> Result<(), FetchError> {
        self.bounded(self.api.save_config(update)).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::fake::FakeDevice;

    fn short_sleep() -> tokio::time::Sleep {
        tokio::time::sleep(Duration::from_millis(5))
    }

    #[tokio::test]
    async fn should_fail_stalled_request_with_network_error() {
        let device = FakeDevice::default();
        device.stall_status.set(true);
        let api = TimeBounded::new(&device, short_sleep);

        let result = api.fetch_status().await;

        assert_eq!(result, Err(FetchError::Network(TIMED_OUT.to_string())));
    }

    #[tokio::test]
    async fn should_pass_prompt_response_through() {
        let device = FakeDevice::default();
        let api = TimeBounded::new(&device, || std::future::pending::<()>());

        let status = api.fetch_status().await.unwrap();

        assert_eq!(status.temp, 187);
    }

    #[tokio::test]
    async fn should_keep_inner_error_when_it_arrives_first() {
        let device = FakeDevice::failing_status(FetchError::Status(503));
        let api = TimeBounded::new(&device, || std::future::pending::<()>());

        assert_eq!(api.fetch_status().await, Err(FetchError::Status(503)));
    }
}
