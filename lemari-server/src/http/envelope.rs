//! Uniform JSON response envelope
//!
//! Every inventory response carries `{data, metadata, error}`. The error
//! object is zero-valued on success; `metadata` is reserved and always null.

use serde::{Deserialize, Serialize};

/// Response wrapper shared by every inventory endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub metadata: Option<serde_json::Value>,
    pub error: ErrorBody,
}

/// Error portion of the envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    /// HTTP status code on failure, 0 on success.
    pub code: u16,
    /// True when the request failed.
    pub status: bool,
    pub msg: String,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            metadata: None,
            error: ErrorBody::default(),
        }
    }
}

impl Envelope<()> {
    /// Success with no payload (create/update/delete).
    pub fn empty() -> Self {
        Self {
            data: None,
            metadata: None,
            error: ErrorBody::default(),
        }
    }

    pub fn failure(code: u16, msg: impl Into<String>) -> Self {
        Self {
            data: None,
            metadata: None,
            error: ErrorBody {
                code,
                status: true,
                msg: msg.into(),
            },
        }
    }
}
