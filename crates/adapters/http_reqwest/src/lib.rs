//! # gmc-adapter-http-reqwest
//!
//! Native implementation of the [`DeviceApi`](gmc_app::ports::DeviceApi)
//! port on top of [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Build request URLs against a configurable device base URL
//! - Map transport, status and decoding failures into
//!   [`FetchError`](gmc_domain::error::FetchError)
//!
//! ## Dependency rule
//! Depends on `gmc-app` (for the port) and `gmc-domain` (for payload types).
//! Never leaks reqwest types past its public constructor.

pub mod client;
pub mod error;

pub use client::HttpDeviceClient;
pub use error::HttpClientError;
