//! API error types with IntoResponse
//!
//! Errors are rendered as the response envelope with the matching HTTP
//! status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::envelope::Envelope;
use crate::db::repos::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request-shape error: bad query parameters or malformed body (400)
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Lookup with no matching row (404)
    #[error("garment {id} not found")]
    NotFound { id: i32 },

    /// Any other storage failure (500, logged)
    #[error(transparent)]
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::NotFound { id } => {
                (StatusCode::NOT_FOUND, format!("garment {id} not found"))
            }
            Self::Database(e) => {
                // Log the actual error, return a generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                )
            }
        };

        (status, Json(Envelope::failure(status.as_u16(), msg))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { id } => Self::NotFound { id },
            other => Self::Database(other),
        }
    }
}
