//! JSON-RPC client for the Zabbix API.
//!
//! Wraps the platform's single HTTPS endpoint with typed calls for the
//! handful of methods the workspace consumes: `user.login`, the per-kind
//! list methods, `configuration.export`, and the host inventory update.
//!
//! The session token is an explicit [`Session`] value returned by
//! [`ZabbixClient::login`] and passed by reference into every later call;
//! nothing is stored in process-wide state.

mod client;
mod config;
mod error;

pub use client::{Session, TaggedHost, ZabbixClient};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
