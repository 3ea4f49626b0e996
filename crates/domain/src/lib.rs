//! # gmc-domain
//!
//! Pure domain model for the GMC measuring-device dashboard.
//!
//! ## Responsibilities
//! - Payload types returned by the device (`/api/status`, `/api/led`, …)
//! - Derivation of display text from a status payload
//! - The refresh countdown and the local/remote connection mode
//! - Device configuration and its validation
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod action;
pub mod countdown;
pub mod device_config;
pub mod display;
pub mod history;
pub mod mode;
pub mod status;
