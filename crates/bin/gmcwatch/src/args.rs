//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gmc_domain::device_config::NetworkMode;

/// Holds the parsed CLI arguments.
#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal client for the GMC measuring device", long_about = None)]
pub struct Args {
    #[arg(
        short = 'c',
        long = "config",
        help = "Path to the TOML configuration file",
        default_value = "gmcwatch.toml"
    )]
    pub config_path: PathBuf,

    #[arg(short = 'u', long = "url", help = "Device base URL, overrides the config file")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Poll the device status until interrupted (default).
    Watch,
    /// Toggle the device LED.
    Led,
    /// Drive the device GPIO.
    Gpio,
    /// Send a value and print the device's acknowledgment.
    Send {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Set the device clock to the current time.
    Sync,
    /// Print a summary of recent measurements.
    History,
    /// Show or replace the device network configuration.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the current configuration.
    Show,
    /// Replace the configuration; the device restarts.
    Set {
        #[arg(long)]
        ssid: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long)]
        freq: u32,
        #[arg(long, default_value = "solo")]
        mode: NetworkMode,
    },
}
