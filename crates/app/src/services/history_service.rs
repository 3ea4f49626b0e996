//! History service: recent measurements for the chart and summary.

use gmc_domain::error::FetchError;
use gmc_domain::history::{HISTORY_CAPACITY, HistoryPoint, HistorySummary};
use gmc_domain::mode::ConnectionMode;

use crate::ports::DeviceApi;

/// Recent measurements plus their summary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryWindow {
    pub points: Vec<HistoryPoint>,
    pub summary: Option<HistorySummary>,
}

impl HistoryWindow {
    fn from_points(mut points: Vec<HistoryPoint>) -> Self {
        if points.len() > HISTORY_CAPACITY {
            points.drain(..points.len() - HISTORY_CAPACITY);
        }
        let summary = HistorySummary::from_points(&points);
        Self { points, summary }
    }
}

/// Application service for the measurement history.
#[derive(Debug, Clone, Copy)]
pub struct HistoryService<A> {
    api: A,
    mode: ConnectionMode,
}

impl<A: DeviceApi> HistoryService<A> {
    /// Create a new service backed by the given device API.
    pub fn new(api: A, mode: ConnectionMode) -> Self {
        Self { api, mode }
    }

    /// Load at most [`HISTORY_CAPACITY`] recent points. Empty in local mode.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of the underlying request.
    pub async fn load(&self) -> Result<HistoryWindow, FetchError> {
        if self.mode.is_local() {
            return Ok(HistoryWindow::default());
        }
        let points = self.api.fetch_history().await.inspect_err(|err| {
            tracing::warn!(error = %err, "history fetch failed");
        })?;
        tracing::debug!(count = points.len(), "history loaded");
        Ok(HistoryWindow::from_points(points))
    }
}
