//! Scriptable in-memory [`DeviceApi`] shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::future::{Future, ready};

use gmc_domain::action::{LedState, ValueEcho};
use gmc_domain::device_config::{ConfigUpdate, DeviceConfig, NetworkMode};
use gmc_domain::error::FetchError;
use gmc_domain::history::HistoryPoint;
use gmc_domain::status::StatusPayload;

use crate::ports::{DeviceApi, endpoint};

pub(crate) struct FakeDevice {
    pub status: RefCell<Result<StatusPayload, FetchError>>,
    pub led: RefCell<Result<LedState, FetchError>>,
    pub gpio: RefCell<Result<String, FetchError>>,
    pub history: RefCell<Result<Vec<HistoryPoint>, FetchError>>,
    pub config: RefCell<Result<DeviceConfig, FetchError>>,
    pub fail_writes: RefCell<Option<FetchError>>,
    pub saved: RefCell<Vec<ConfigUpdate>>,
    /// When set, `fetch_status` never settles.
    pub stall_status: Cell<bool>,
    calls: RefCell<Vec<String>>,
}

impl Default for FakeDevice {
    fn default() -> Self {
        Self {
            status: RefCell::new(Ok(StatusPayload {
                temp: 187,
                date: Some("14:02:11".to_string()),
                uptime: 42,
            })),
            led: RefCell::new(Ok(LedState::On)),
            gpio: RefCell::new(Ok("GPIO Actionne avec succes".to_string())),
            history: RefCell::new(Ok(Vec::new())),
            config: RefCell::new(Ok(DeviceConfig {
                ssid: "SSID_GMC_MC01".to_string(),
                freq: 15,
                mode: NetworkMode::Solo,
            })),
            fail_writes: RefCell::new(None),
            saved: RefCell::new(Vec::new()),
            stall_status: Cell::new(false),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeDevice {
    pub fn failing_status(err: FetchError) -> Self {
        let device = Self::default();
        *device.status.borrow_mut() = Err(err);
        device
    }

    /// Number of requests made to a path (query strings excluded).
    pub fn calls_to(&self, path: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.split('?').next() == Some(path))
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_call(&self) -> Option<String> {
        self.calls.borrow().last().cloned()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn write_result(&self) -> Result<(), FetchError> {
        match self.fail_writes.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl DeviceApi for FakeDevice {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusPayload, FetchError>> {
        self.record(endpoint::STATUS.to_string());
        let result = self.status.borrow().clone();
        let stalled = self.stall_status.get();
        async move {
            if stalled {
                std::future::pending::<()>().await;
            }
            result
        }
    }

    fn send_value(&self, value: i64) -> impl Future<Output = Result<ValueEcho, FetchError>> {
        self.record(format!("{}?valeur={value}", endpoint::SEND_VALUE));
        let result = self.write_result().map(|()| ValueEcho {
            recu: value.to_string().into(),
            status: Some("OK".to_string()),
        });
        ready(result)
    }

    fn pilot_gpio(&self) -> impl Future<Output = Result<String, FetchError>> {
        self.record(endpoint::PILOT_GPIO.to_string());
        ready(self.gpio.borrow().clone())
    }

    fn toggle_led(&self) -> impl Future<Output = Result<LedState, FetchError>> {
        self.record(endpoint::LED.to_string());
        ready(self.led.borrow().clone())
    }

    fn sync_time(&self, unix_seconds: i64) -> impl Future<Output = Result<(), FetchError>> {
        self.record(format!("{}?t={unix_seconds}", endpoint::SYNC_TIME));
        ready(self.write_result())
    }

    fn fetch_history(&self) -> impl Future<Output = Result<Vec<HistoryPoint>, FetchError>> {
        self.record(endpoint::HISTORY.to_string());
        ready(self.history.borrow().clone())
    }

    fn fetch_config(&self) -> impl Future<Output = Result<DeviceConfig, FetchError>> {
        self.record(endpoint::CONFIG.to_string());
        ready(self.config.borrow().clone())
    }

    fn save_config(&self, update: &ConfigUpdate) -> impl Future<Output = Result<(), FetchError>> {
        self.record(endpoint::CONFIG.to_string());
        let result = self.write_result();
        if result.is_ok() {
            self.saved.borrow_mut().push(update.clone());
        }
        ready(result)
    }
}
