//! Async client for the UUP Dump API.
//!
//! All requests go through [`Client::execute`], which turns every failure into
//! one [`Error`] variant and returns successful payloads as untouched
//! [`serde_json::Value`]s.

mod client;
mod config;
mod errors;
mod logging;
mod params;
mod query;
mod user_agent;
pub use self::client::Client;
pub use self::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::{describe, Error, ErrorKind, API_ERROR_MESSAGES, MAX_BODY_EXCERPT};
pub use self::logging::configure_logging;
pub use self::params::{ParamValue, Params};
pub use self::query::{
    FetchUpdateQuery, GetFilesQuery, ListEditionsQuery, ListIdQuery, ListLangsQuery, Query,
    RequestType, UpdateInfoQuery,
};
pub use self::user_agent::DEFAULT_USER_AGENT;
