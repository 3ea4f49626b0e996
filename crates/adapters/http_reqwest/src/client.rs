//! Device client over reqwest.

use std::time::Duration;

use gmc_app::ports::{DeviceApi, endpoint};
use gmc_domain::action::{LedResponse, LedState, ValueEcho};
use gmc_domain::device_config::{ConfigUpdate, DeviceConfig};
use gmc_domain::error::FetchError;
use gmc_domain::history::HistoryPoint;
use gmc_domain::status::StatusPayload;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::{HttpClientError, fetch_error};

/// [`DeviceApi`] implementation for a device reachable at `base_url`.
///
/// Cloning is cheap: the connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpDeviceClient {
    client: Client,
    base_url: Url,
}

impl HttpDeviceClient {
    /// Create a client for the device at `base_url` (e.g. `http://192.168.4.1`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::InvalidUrl`] if `base_url` is not an
    /// absolute http(s) URL, or [`HttpClientError::Build`] if the TLS/HTTP
    /// stack cannot be initialised.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpClientError> {
        let invalid = |reason: String| HttpClientError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|err| invalid(err.to_string()))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) URL".to_string()));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// The device base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|err| FetchError::Network(err.to_string()))
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response, FetchError> {
        let url = self.url(path)?;
        tracing::trace!(%url, "GET");
        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|err| fetch_error(&err))?;
        check_response(resp)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.get(path, &[])
            .await?
            .json()
            .await
            .map_err(|err| fetch_error(&err))
    }
}

/// Reject non-2xx responses.
fn check_response(resp: Response) -> Result<Response, FetchError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(FetchError::Status(resp.status().as_u16()))
    }
}

impl DeviceApi for HttpDeviceClient {
    async fn fetch_status(&self) -> Result<StatusPayload, FetchError> {
        self.get_json(endpoint::STATUS).await
    }

    async fn send_value(&self, value: i64) -> Result<ValueEcho, FetchError> {
        self.get(endpoint::SEND_VALUE, &[("valeur", value.to_string())])
            .await?
            .json()
            .await
            .map_err(|err| fetch_error(&err))
    }

    async fn pilot_gpio(&self) -> Result<String, FetchError> {
        self.get(endpoint::PILOT_GPIO, &[])
            .await?
            .text()
            .await
            .map_err(|err| fetch_error(&err))
    }

    async fn toggle_led(&self) -> Result<LedState, FetchError> {
        let resp: LedResponse = self.get_json(endpoint::LED).await?;
        Ok(resp.status)
    }

    async fn sync_time(&self, unix_seconds: i64) -> Result<(), FetchError> {
        self.get(endpoint::SYNC_TIME, &[("t", unix_seconds.to_string())])
            .await?;
        Ok(())
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryPoint>, FetchError> {
        self.get_json(endpoint::HISTORY).await
    }

    async fn fetch_config(&self) -> Result<DeviceConfig, FetchError> {
        self.get_json(endpoint::CONFIG).await
    }

    async fn save_config(&self, update: &ConfigUpdate) -> Result<(), FetchError> {
        let url = self.url(endpoint::CONFIG)?;
        let resp = self
            .client
            .post(url)
            .form(&update.form_fields())
            .send()
            .await
            .map_err(|err| fetch_error(&err))?;
        check_response(resp)?;
        Ok(())
    }
}
