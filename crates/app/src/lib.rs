//! # gmc-app
//!
//! Application layer: the status poller, user actions and the **device port**.
//!
//! ## Responsibilities
//! - Define the [`DeviceApi`](ports::DeviceApi) port that HTTP adapters implement
//! - Run the refresh state machine ([`StatusPoller`](poller::StatusPoller))
//! - Provide use-case services for actions, history and configuration
//! - Bound every device request in time ([`TimeBounded`](time_bounded::TimeBounded))
//!
//! ## Dependency rule
//! Depends on `gmc-domain` and runtime-agnostic `futures` combinators. Never
//! imports adapter crates or an async runtime; drivers (browser task,
//! terminal loop) own the scheduling and supply the timers.

pub mod poller;
pub mod ports;
pub mod services;
pub mod time_bounded;

#[cfg(test)]
mod fake;
