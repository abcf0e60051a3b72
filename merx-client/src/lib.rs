//! # merx-client
//!
//! The commerce-platform client boundary:
//! - [`client`] — the [`CommerceClient`] capability trait
//! - [`types`] — query/page/batch wire types
//! - [`clock`] — injectable time source
//! - [`config`] — environment-driven project configuration
//! - [`http`] — reqwest-backed implementation
//! - [`error`] — [`ClientError`]

pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use client::CommerceClient;
pub use clock::{Clock, SystemClock};
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::HttpCommerceClient;
pub use types::{ApplyOutcome, ResourcePage, ResourceQuery, ResourceRecord, UpsertBatch};
