//! HTTP device client wrapping `gloo-net` for calls to `/api/*`.
//!
//! The dashboard is served by the device itself, so every path is relative
//! to the page origin. Components go through [`dashboard_api`], which bounds
//! each request so a silent device cannot stall the poll loop.

use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use gmc_app::ports::{DeviceApi, endpoint};
use gmc_app::time_bounded::TimeBounded;
use gmc_domain::action::{LedResponse, LedState, ValueEcho};
use gmc_domain::device_config::{ConfigUpdate, DeviceConfig};
use gmc_domain::error::FetchError;
use gmc_domain::history::HistoryPoint;
use gmc_domain::status::StatusPayload;

/// Longest a request may take before it counts as a network failure.
const REQUEST_TIMEOUT_MS: u32 = 5_000;

/// [`DeviceApi`] backed by the browser's `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooDeviceApi;

/// Device client used by every component.
pub type DashboardApi = TimeBounded<GlooDeviceApi, fn() -> TimeoutFuture>;

fn request_deadline() -> TimeoutFuture {
    TimeoutFuture::new(REQUEST_TIMEOUT_MS)
}

#[must_use]
pub fn dashboard_api() -> DashboardApi {
    let deadline: fn() -> TimeoutFuture = request_deadline;
    TimeBounded::new(GlooDeviceApi, deadline)
}

/// Classify a `gloo-net` failure into the port's error taxonomy.
fn fetch_error(err: gloo_net::Error) -> FetchError {
    match err {
        gloo_net::Error::SerdeError(err) => FetchError::Decode(err.to_string()),
        other => FetchError::Network(other.to_string()),
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
fn check_response(resp: Response) -> Result<Response, FetchError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(FetchError::Status(resp.status()))
    }
}

/// Percent-encode a form value (`application/x-www-form-urlencoded`).
fn encode_form_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(char::from(byte));
            }
            b' ' => encoded.push('+'),
            other => encoded.push_str(&format!("%{other:02X}")),
        }
    }
    encoded
}

/// Encode name/value pairs as a form body.
fn encode_form(fields: &[(&str, String)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{name}={}", encode_form_value(value)))
        .collect::<Vec<_>>()
        .join("&")
}

async fn get(path: &str) -> Result<Response, FetchError> {
    let resp = Request::get(path).send().await.map_err(fetch_error)?;
    check_response(resp)
}

impl DeviceApi for GlooDeviceApi {
    async fn fetch_status(&self) -> Result<StatusPayload, FetchError> {
        get(endpoint::STATUS).await?.json().await.map_err(fetch_error)
    }

    async fn send_value(&self, value: i64) -> Result<ValueEcho, FetchError> {
        let resp = Request::get(endpoint::SEND_VALUE)
            .query([("valeur", value.to_string())])
            .send()
            .await
            .map_err(fetch_error)?;
        check_response(resp)?.json().await.map_err(fetch_error)
    }

    async fn pilot_gpio(&self) -> Result<String, FetchError> {
        get(endpoint::PILOT_GPIO)
            .await?
            .text()
            .await
            .map_err(fetch_error)
    }

    async fn toggle_led(&self) -> Result<LedState, FetchError> {
        let body: LedResponse = get(endpoint::LED).await?.json().await.map_err(fetch_error)?;
        Ok(body.status)
    }

    async fn sync_time(&self, unix_seconds: i64) -> Result<(), FetchError> {
        let resp = Request::get(endpoint::SYNC_TIME)
            .query([("t", unix_seconds.to_string())])
            .send()
            .await
            .map_err(fetch_error)?;
        check_response(resp)?;
        Ok(())
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryPoint>, FetchError> {
        get(endpoint::HISTORY).await?.json().await.map_err(fetch_error)
    }

    async fn fetch_config(&self) -> Result<DeviceConfig, FetchError> {
        get(endpoint::CONFIG).await?.json().await.map_err(fetch_error)
    }

    async fn save_config(&self, update: &ConfigUpdate) -> Result<(), FetchError> {
        let resp = Request::post(endpoint::CONFIG)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(encode_form(&update.form_fields()))
            .map_err(fetch_error)?
            .send()
            .await
            .map_err(fetch_error)?;
        check_response(resp)?;
        Ok(())
    }
}
