// Rust guideline compliant 2026-10-16

//! Envelope for machine-readable error output.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Error as printed to stderr under `--json`.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Machine-readable error kind.
    pub code: ErrorCode,
    /// Message shown to the user.
    pub message: String,
    /// Exit status the process ends with.
    pub exit_code: i32,
}

impl ErrorEnvelope {
    /// Describes `error` for output.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            exit_code: error.exit_code(),
        }
    }
}
