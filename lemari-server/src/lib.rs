//! lemari-server: HTTP inventory service over a single garment table
//!
//! Layered handler -> service -> repository chain: axum routes dispatch on
//! HTTP method and query-parameter shape, the service passes through to the
//! repository, and the repository issues single-statement SQL via sqlx.
//! Every response is wrapped in the `{data, metadata, error}` envelope.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use config::{ConfigError, DbConfig};
pub use http::{run_server, AppState, ServerConfig};
