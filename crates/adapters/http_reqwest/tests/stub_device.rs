//! End-to-end tests for the reqwest adapter against a stub device.
//!
//! Each test binds an axum router mimicking the firmware routes to an
//! ephemeral loopback port and drives the real client, poller and services
//! through it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Form, Json, Router};
use gmc_adapter_http_reqwest::HttpDeviceClient;
use gmc_app::poller::StatusPoller;
use gmc_app::ports::DeviceApi;
use gmc_app::services::action_service::{ActionService, ClockSync};
use gmc_app::services::config_service::ConfigService;
use gmc_app::services::history_service::HistoryService;
use gmc_domain::action::LedState;
use gmc_domain::device_config::{ConfigUpdate, DeviceConfig, NetworkMode};
use gmc_domain::display::Badge;
use gmc_domain::error::FetchError;
use gmc_domain::mode::ConnectionMode;
use serde_json::json;

#[derive(Clone, Default)]
struct Stub {
    led: Arc<AtomicBool>,
    clock: Arc<Mutex<Option<i64>>>,
    saved: Arc<Mutex<Option<HashMap<String, String>>>>,
}

fn router(stub: Stub) -> Router {
    Router::new()
        .route(
            "/api/status",
            get(|| async { Json(json!({"temp": 187, "date": "14:02:11", "uptime": 42})) }),
        )
        .route(
            "/api/get_uptime",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let recu = params
                    .get("valeur")
                    .cloned()
                    .unwrap_or_else(|| "Aucune valeur".to_string());
                Json(json!({"status": "OK", "recu": recu}))
            }),
        )
        .route(
            "/api/piloter_gpio",
            get(|| async { "GPIO Actionne avec succes" }),
        )
        .route(
            "/api/led",
            get(|State(stub): State<Stub>| async move {
                let on = !stub.led.fetch_xor(true, Ordering::SeqCst);
                Json(json!({"status": if on { "ON" } else { "OFF" }}))
            }),
        )
        .route(
            "/api/sync_time",
            get(
                |State(stub): State<Stub>, Query(params): Query<HashMap<String, String>>| async move {
                    let t = params.get("t").and_then(|t| t.parse().ok());
                    *stub.clock.lock().unwrap() = t;
                    "Heure synchronisee"
                },
            ),
        )
        .route(
            "/api/history",
            get(|| async { Json(json!([{"v": 21.5, "t": "10:45:00"}, {"v": 22.1, "t": "10:45:15"}])) }),
        )
        .route(
            "/api/config",
            get(|| async { Json(json!({"ssid": "SSID_GMC_MC01", "freq": 15, "mode": "solo"})) })
                .post(
                    |State(stub): State<Stub>, Form(form): Form<HashMap<String, String>>| async move {
                        *stub.saved.lock().unwrap() = Some(form);
                        Json(json!({"status": "success"}))
                    },
                ),
        )
        .with_state(stub)
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn client_for(stub: Stub) -> HttpDeviceClient {
    let base = serve(router(stub)).await;
    HttpDeviceClient::new(&base, Duration::from_secs(2)).unwrap()
}

// ---------------------------------------------------------------------------
// Status polling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_refresh_display_from_device_status() {
    let client = client_for(Stub::default()).await;
    let mut poller = StatusPoller::new(client, ConnectionMode::Remote);

    let display = poller.refresh().await;

    assert_eq!(display.temperature_text, "18,7");
    assert_eq!(display.date_text, "14:02:11");
    assert_eq!(display.status_text, "Uptime: 42s");
    assert_eq!(display.badge, Some(Badge::Connected));
}

#[tokio::test]
async fn should_report_status_error_for_missing_route() {
    let base = serve(Router::new()).await;
    let client = HttpDeviceClient::new(&base, Duration::from_secs(2)).unwrap();

    assert_eq!(client.fetch_status().await, Err(FetchError::Status(404)));
}

#[tokio::test]
async fn should_report_decode_error_for_malformed_body() {
    let base = serve(Router::new().route("/api/status", get(|| async { "not json" }))).await;
    let client = HttpDeviceClient::new(&base, Duration::from_secs(2)).unwrap();

    assert!(matches!(
        client.fetch_status().await,
        Err(FetchError::Decode(_))
    ));
}

#[tokio::test]
async fn should_mark_disconnected_when_device_unreachable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = HttpDeviceClient::new(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();
    let mut poller = StatusPoller::new(client, ConnectionMode::Remote);

    let display = poller.refresh().await;

    assert_eq!(display.badge, Some(Badge::Disconnected));
    assert_eq!(display.temperature_text, "--");
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_toggle_led_on_then_off() {
    let client = client_for(Stub::default()).await;
    let actions = ActionService::new(client, ConnectionMode::Remote);

    assert_eq!(actions.toggle_led().await.unwrap(), LedState::On);
    assert_eq!(actions.toggle_led().await.unwrap(), LedState::Off);
}

#[tokio::test]
async fn should_echo_sent_value() {
    let client = client_for(Stub::default()).await;
    let actions = ActionService::new(client, ConnectionMode::Remote);

    assert_eq!(actions.send_value(42).await.unwrap(), "Device received: 42");
}

#[tokio::test]
async fn should_return_gpio_plain_text() {
    let client = client_for(Stub::default()).await;
    let actions = ActionService::new(client, ConnectionMode::Remote);

    assert_eq!(actions.pilot_gpio().await.unwrap(), "GPIO Actionne avec succes");
}

#[tokio::test]
async fn should_pass_unix_time_to_sync_endpoint() {
    let stub = Stub::default();
    let client = client_for(stub.clone()).await;
    let actions = ActionService::new(client, ConnectionMode::Remote);

    let outcome = actions.sync_clock(1_760_000_000).await.unwrap();

    assert_eq!(outcome, ClockSync::Sent);
    assert_eq!(*stub.clock.lock().unwrap(), Some(1_760_000_000));
}

// ---------------------------------------------------------------------------
// History & configuration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_load_history_window() {
    let client = client_for(Stub::default()).await;
    let history = HistoryService::new(client, ConnectionMode::Remote);

    let window = history.load().await.unwrap();

    assert_eq!(window.points.len(), 2);
    let summary = window.summary.unwrap();
    assert!((summary.max - 22.1).abs() < f64::EPSILON);
}

#[tokio::test]
async fn should_read_and_post_configuration() {
    let stub = Stub::default();
    let client = client_for(stub.clone()).await;
    let config = ConfigService::new(client);

    let current = config.load().await.unwrap();
    assert_eq!(current.mode, NetworkMode::Solo);

    config
        .save(&ConfigUpdate {
            config: DeviceConfig {
                ssid: "SSID_GMC_SCMC".to_string(),
                freq: 30,
                mode: NetworkMode::Cluster,
            },
            password: "PWD_SCMC".to_string(),
        })
        .await
        .unwrap();

    let saved = stub.saved.lock().unwrap().clone().unwrap();
    assert_eq!(saved["ssid"], "SSID_GMC_SCMC");
    assert_eq!(saved["pass"], "PWD_SCMC");
    assert_eq!(saved["freq"], "30");
    assert_eq!(saved["mode"], "cluster");
}
