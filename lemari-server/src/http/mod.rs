//! HTTP layer
//!
//! Axum server with:
//! - Request tracing middleware
//! - Request timeout
//! - CORS
//! - Graceful shutdown
//! - JSON envelope responses

pub mod envelope;
pub mod error;
pub mod routes;
pub mod server;

pub use envelope::{Envelope, ErrorBody};
pub use error::ApiError;
pub use server::{run_server, AppState, ServerConfig};
