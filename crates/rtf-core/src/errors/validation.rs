// ABOUTME: Validation and invariant error types for program engine inputs
// ABOUTME: Distinguishes user-correctable config errors from caller bugs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Validation Error Types
//!
//! - `ValidationError` - malformed `ProgramConfig` or prior log, raised before any computation
//! - `InvariantViolation` - mismatched schedules handed to the projector (a caller bug)

use thiserror::Error;

/// Malformed engine input. Always raised before any week is computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Starting weight (training max) is zero, negative, or not finite
    #[error("initial weight must be greater than 0, got {value}")]
    NonPositiveWeight {
        /// Rejected weight
        value: f64,
    },

    /// Rounding increment is not one of the supported plate increments
    #[error("unsupported rounding increment {value} kg (supported: 0.5, 1, 2.5, 5)")]
    UnsupportedRoundingIncrement {
        /// Rejected increment
        value: f64,
    },

    /// Style string did not name a known variant
    #[error("unknown program style '{value}'")]
    UnknownStyle {
        /// Rejected style name
        value: String,
    },

    /// Prior log has more entries than the program has weeks
    #[error("prior log has {len} weeks but the program only has {max}")]
    PriorLogTooLong {
        /// Entries in the supplied log
        len: usize,
        /// Weeks in the program
        max: usize,
    },

    /// A prior log entry does not line up with the canonical week sequence
    #[error("prior log entry {position} does not match the program: {reason}")]
    PriorLogMismatch {
        /// 1-based position in the log
        position: u32,
        /// What did not match
        reason: &'static str,
    },

    /// A logged or requested training max is zero, negative, or not finite
    #[error("training max for week {week} must be greater than 0, got {value}")]
    NonPositiveTrainingMax {
        /// Week the training max applies to
        week: u32,
        /// Rejected training max
        value: f64,
    },

    /// Requested week is outside the schedule
    #[error("week {week} is outside the program (1..={len})")]
    WeekOutOfRange {
        /// Requested week
        week: u32,
        /// Weeks in the schedule
        len: usize,
    },
}

impl ValidationError {
    /// Message suitable for showing next to the offending form field
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NonPositiveWeight { .. } => "Training Max must be greater than 0".to_owned(),
            Self::UnsupportedRoundingIncrement { .. } => {
                "Rounding must be 0.5, 1, 2.5 or 5 kg".to_owned()
            }
            Self::UnknownStyle { value } => {
                format!("Program style '{value}' is not available")
            }
            Self::PriorLogTooLong { .. } | Self::PriorLogMismatch { .. } => {
                "Logged weeks do not match this program".to_owned()
            }
            Self::NonPositiveTrainingMax { week, .. } => {
                format!("Training Max for week {week} must be greater than 0")
            }
            Self::WeekOutOfRange { len, .. } => {
                format!("Week must be between 1 and {len}")
            }
        }
    }
}

/// Internal consistency failure. Indicates a caller bug, never bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The two schedules handed to the projector differ in length
    #[error("schedule lengths differ: standard has {standard} weeks, hypertrophy has {hypertrophy}")]
    ScheduleLengthMismatch {
        /// Weeks in the standard schedule
        standard: usize,
        /// Weeks in the hypertrophy schedule
        hypertrophy: usize,
    },

    /// The two schedules disagree on week number or deload flag at an index
    #[error("schedules diverge at index {index}: {detail}")]
    ScheduleShapeMismatch {
        /// 0-based index of the first divergent entry
        index: usize,
        /// Which field diverged
        detail: &'static str,
    },

    /// A training week is missing its targets, or a deload week carries them
    #[error("week {week} has inconsistent deload flag and training targets")]
    MalformedWeek {
        /// Offending week number
        week: u32,
    },
}
