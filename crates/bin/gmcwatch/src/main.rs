//! # gmcwatch: GMC terminal client
//!
//! Composition root that wires the reqwest adapter into the application
//! services and drives them from the command line.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Initialise `tracing` output
//! - Build the device client and resolve the connection mode
//! - Run the status poller once per second, or a single action
//! - Stop cleanly on Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod args;
mod config;

use std::time::Duration;

use clap::Parser;
use gmc_adapter_http_reqwest::HttpDeviceClient;
use gmc_app::poller::StatusPoller;
use gmc_app::services::action_service::ActionService;
use gmc_app::services::config_service::ConfigService;
use gmc_app::services::history_service::HistoryService;
use gmc_domain::countdown::Countdown;
use gmc_domain::device_config::{ConfigUpdate, DeviceConfig};
use gmc_domain::display::DisplayState;
use gmc_domain::history::celsius_text;
use gmc_domain::mode::ConnectionMode;
use tracing_subscriber::EnvFilter;

use crate::args::{Args, Command, ConfigCommand};
use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = Config::load(&args.config_path, args.url.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let client = HttpDeviceClient::new(&config.device.url, config.timeout())?;
    let base_url = client.base_url();
    let mode = config
        .device
        .mode
        .resolve(base_url.scheme(), base_url.host_str().unwrap_or_default());
    tracing::info!(url = %base_url, ?mode, "device client ready");

    match args.command.unwrap_or(Command::Watch) {
        Command::Watch => watch(client, mode, &config).await,
        Command::Led => {
            let state = ActionService::new(client, mode).toggle_led().await?;
            println!("{}", state.readout());
        }
        Command::Gpio => {
            let answer = ActionService::new(client, mode).pilot_gpio().await?;
            println!("{answer}");
        }
        Command::Send { value } => {
            let ack = ActionService::new(client, mode).send_value(value).await?;
            println!("{ack}");
        }
        Command::Sync => {
            let outcome = ActionService::new(client, mode)
                .sync_clock(chrono::Utc::now().timestamp())
                .await?;
            println!("clock sync: {outcome:?}");
        }
        Command::History => {
            let window = HistoryService::new(client, mode).load().await?;
            match window.summary {
                Some(summary) => println!(
                    "{} points, min {} °C, max {} °C, last {} °C",
                    summary.count,
                    celsius_text(summary.min),
                    celsius_text(summary.max),
                    celsius_text(summary.last),
                ),
                None => println!("no measurements"),
            }
        }
        Command::Config(ConfigCommand::Show) => {
            let current = ConfigService::new(client).load().await?;
            println!(
                "ssid: {}\nfreq: {}s\nmode: {}",
                current.ssid, current.freq, current.mode
            );
        }
        Command::Config(ConfigCommand::Set {
            ssid,
            password,
            freq,
            mode: network_mode,
        }) => {
            let update = ConfigUpdate {
                config: DeviceConfig {
                    ssid,
                    freq,
                    mode: network_mode,
                },
                password,
            };
            ConfigService::new(client).save(&update).await?;
            println!("configuration saved, device restarting");
        }
    }

    Ok(())
}

/// Poll until Ctrl-C, printing the readout after every refresh.
async fn watch(client: HttpDeviceClient, mode: ConnectionMode, config: &Config) {
    let actions = ActionService::new(client.clone(), mode);
    if let Err(err) = actions.sync_clock(chrono::Utc::now().timestamp()).await {
        tracing::warn!(error = %err, "continuing without clock sync");
    }

    let countdown = Countdown::new(config.device.refresh_secs);
    let mut poller = StatusPoller::with_countdown(client, mode, countdown);
    print_readout(poller.refresh().await);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.tick().await;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let report = poller.tick().await;
                tracing::trace!(seconds_remaining = report.seconds_remaining, "tick");
                if report.refreshed {
                    print_readout(poller.display());
                }
            }
            _ = &mut shutdown => {
                tracing::info!("interrupted, stopping");
                break;
            }
        }
    }
}

fn print_readout(display: &DisplayState) {
    println!(
        "[{}] {} °C  {}  {}",
        display.badge_text(),
        display.temperature_text,
        display.date_text,
        display.status_text,
    );
}
