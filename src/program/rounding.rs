// ABOUTME: Working-weight rounding to supported plate increments
// ABOUTME: Validates the configured increment and rounds half-up to the nearest multiple
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rtf_core::constants::rounding::{INCREMENT_TOLERANCE, SUPPORTED_INCREMENTS_KG};
use rtf_core::errors::ValidationError;

/// Nudge applied before rounding so exact halves that land a hair below .5
/// after floating-point division still round up
const HALF_UP_EPSILON: f64 = 1e-9;

/// Match a requested increment against the supported set
///
/// Returns the canonical supported value so later arithmetic never carries
/// the caller's representation error.
///
/// # Errors
///
/// Returns `ValidationError::UnsupportedRoundingIncrement` for anything other
/// than 0.5, 1, 2.5 or 5 kg.
pub fn validate_increment(increment_kg: f64) -> Result<f64, ValidationError> {
    SUPPORTED_INCREMENTS_KG
        .iter()
        .copied()
        .find(|supported| (supported - increment_kg).abs() < INCREMENT_TOLERANCE)
        .ok_or(ValidationError::UnsupportedRoundingIncrement {
            value: increment_kg,
        })
}

/// Round `value` to the nearest multiple of `increment`, halves rounding up
///
/// `increment` must already be validated.
#[must_use]
pub fn round_to_increment(value: f64, increment: f64) -> f64 {
    let steps = (value / increment + HALF_UP_EPSILON).round();
    steps * increment
}

/// Whether `value` is a whole multiple of `increment` within floating tolerance
#[must_use]
pub fn is_multiple_of(value: f64, increment: f64) -> bool {
    let steps = value / increment;
    (steps - steps.round()).abs() < 1e-6
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_increment() {
        assert!((validate_increment(2.5).unwrap() - 2.5).abs() < f64::EPSILON);
        assert!((validate_increment(1.0).unwrap() - 1.0).abs() < f64::EPSILON);
        assert!(matches!(
            validate_increment(2.0),
            Err(ValidationError::UnsupportedRoundingIncrement { .. })
        ));
        assert!(validate_increment(0.0).is_err());
        assert!(validate_increment(f64::NAN).is_err());
    }

    #[test]
    fn test_round_half_up() {
        // 71.25 sits exactly between 70 and 72.5
        assert!((round_to_increment(71.25, 2.5) - 72.5).abs() < f64::EPSILON);
        assert!((round_to_increment(71.24, 2.5) - 70.0).abs() < f64::EPSILON);
        assert!((round_to_increment(77.0, 2.5) - 77.5).abs() < f64::EPSILON);
        assert!((round_to_increment(72.5, 5.0) - 75.0).abs() < f64::EPSILON);
        assert!((round_to_increment(80.75, 0.5) - 81.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_is_multiple_of() {
        assert!(is_multiple_of(77.5, 2.5));
        assert!(!is_multiple_of(76.0, 2.5));
        assert!(is_multiple_of(round_to_increment(123.456, 0.5), 0.5));
    }
}
