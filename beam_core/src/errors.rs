//! # Error Types
//!
//! Structured error types for beam_core. Every failure is an input or
//! programming error surfaced straight to the caller; nothing here is
//! transient and nothing is retried.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_length(length: f64) -> BeamResult<()> {
//!     if length <= 0.0 {
//!         return Err(BeamError::InvalidInput {
//!             field: "length".to_string(),
//!             value: length.to_string(),
//!             reason: "Length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for model construction, solving and persistence.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// An input value is invalid (non-positive stiffness, short segment, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A singularity order outside the supported range was requested
    #[error("Unsupported exponent: {exponent}")]
    UnsupportedExponent { exponent: i32 },

    /// A query position fell outside [0, length] under the strict span policy
    #[error("Position {position} is outside the span [0, {length}]")]
    PositionOutOfSpan { position: f64, length: f64 },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl BeamError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedExponent error
    pub fn unsupported_exponent(exponent: i32) -> Self {
        BeamError::UnsupportedExponent { exponent }
    }

    /// Create a PositionOutOfSpan error
    pub fn position_out_of_span(position: f64, length: f64) -> Self {
        BeamError::PositionOutOfSpan { position, length }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
            BeamError::UnsupportedExponent { .. } => "UNSUPPORTED_EXPONENT",
            BeamError::PositionOutOfSpan { .. } => "POSITION_OUT_OF_SPAN",
            BeamError::FileError { .. } => "FILE_ERROR",
            BeamError::SerializationError { .. } => "SERIALIZATION_ERROR",
            BeamError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for BeamError {
    fn from(e: serde_json::Error) -> Self {
        BeamError::SerializationError {
            reason: e.to_string(),
        }
    }
}
