// ABOUTME: Unified error handling for the RTF program engine
// ABOUTME: Defines EngineError, stable error codes, and the JSON error envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every engine entry point returns `EngineResult<T>`. Validation failures are
//! raised synchronously before any computation proceeds; there are no partial
//! results. `ErrorCode` gives callers a stable, serializable classification.

mod validation;

pub use validation::{InvariantViolation, ValidationError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input could not be accepted
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Input names something outside the accepted set
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric input outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Internal (9000-9999)
    /// Caller handed the engine inconsistent data
    #[serde(rename = "INVARIANT_VIOLATION")]
    InvariantViolation = 9000,
    /// Output could not be serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code a transport layer should map this error to
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::InvalidFormat | Self::ValueOutOfRange => 400,
            Self::InvariantViolation | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::InvariantViolation => "Internal consistency check failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Umbrella error for every engine operation
#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed configuration or prior log
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Inconsistent data from the caller
    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),

    /// JSON encoding failure
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    /// Stable classification of this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(
                ValidationError::NonPositiveWeight { .. }
                | ValidationError::NonPositiveTrainingMax { .. }
                | ValidationError::WeekOutOfRange { .. }
                | ValidationError::PriorLogTooLong { .. },
            ) => ErrorCode::ValueOutOfRange,
            Self::Validation(
                ValidationError::UnsupportedRoundingIncrement { .. }
                | ValidationError::UnknownStyle { .. },
            ) => ErrorCode::InvalidFormat,
            Self::Validation(ValidationError::PriorLogMismatch { .. }) => ErrorCode::InvalidInput,
            Self::Invariant(_) => ErrorCode::InvariantViolation,
            Self::Serialization(_) => ErrorCode::SerializationError,
        }
    }

    /// Whether the error should be shown to the user (as opposed to logged as a bug)
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for convenience
pub type EngineResult<T> = Result<T, EngineError>;

/// JSON error envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an `ErrorResponse`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable classification
    pub code: ErrorCode,
    /// Technical message
    pub message: String,
    /// Message for the end user, present for validation errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_message: Option<String>,
}

impl From<&EngineError> for ErrorResponse {
    fn from(error: &EngineError) -> Self {
        let user_message = match error {
            EngineError::Validation(v) => Some(v.user_message()),
            EngineError::Invariant(_) | EngineError::Serialization(_) => None,
        };
        Self {
            error: ErrorResponseDetails {
                code: error.code(),
                message: error.to_string(),
                user_message,
            },
        }
    }
}
