//! Boundary response types.
//!
//! Every failure is recovered at the boundary into a structured
//! `{success: false, message, kind}` body; successful acknowledgements use
//! `{success: true, message}`. The HTTP layer maps these to status codes.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};

/// Structured error body returned to callers at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Machine-readable error kind.
    pub kind: ErrorKind,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            success: false,
            message: err.message.clone(),
            kind: err.kind,
        }
    }
}

/// Simple success acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    /// Always `true`.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
}

impl Ack {
    /// Create an acknowledgement with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
