//! Application services: use-case implementations.
//!
//! Each service struct accepts a [`DeviceApi`](crate::ports::DeviceApi)
//! implementation via a generic parameter (constructor injection), keeping
//! this layer decoupled from concrete HTTP clients.

pub mod action_service;
pub mod config_service;
pub mod history_service;
