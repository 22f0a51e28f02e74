// ABOUTME: Program configuration and per-week plan models
// ABOUTME: ProgramConfig input and WeekPlan output of the schedule generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::style::ProgramStyle;
use crate::errors::ValidationError;

/// Default plate increment when the caller does not choose one
pub const DEFAULT_ROUNDING_INCREMENT_KG: f64 = 2.5;

/// Immutable generator input, built once per preview/submission cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramConfig {
    /// Starting training max the weekly loads are derived from
    pub initial_weight: f64,
    /// Rep/set/intensity variant
    pub style: ProgramStyle,
    /// Insert deload weeks at 7, 14 and 21
    pub with_deloads: bool,
    /// Plate increment working weights are rounded to
    pub rounding_increment_kg: f64,
}

impl ProgramConfig {
    /// Config with deloads included and the default 2.5 kg increment
    #[must_use]
    pub const fn new(initial_weight: f64, style: ProgramStyle) -> Self {
        Self {
            initial_weight,
            style,
            with_deloads: true,
            rounding_increment_kg: DEFAULT_ROUNDING_INCREMENT_KG,
        }
    }

    /// Build a config from raw form values, parsing the style name
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownStyle` if `style` names no known variant.
    /// Numeric fields are checked by the generator.
    pub fn from_form(
        initial_weight: f64,
        style: &str,
        with_deloads: bool,
        rounding_increment_kg: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            initial_weight,
            style: style.parse()?,
            with_deloads,
            rounding_increment_kg,
        })
    }

    /// Set whether deload weeks are included
    #[must_use]
    pub const fn with_deloads(mut self, with_deloads: bool) -> Self {
        self.with_deloads = with_deloads;
        self
    }

    /// Set the rounding increment
    #[must_use]
    pub const fn with_rounding(mut self, increment_kg: f64) -> Self {
        self.rounding_increment_kg = increment_kg;
        self
    }

    /// Same config with a different style
    #[must_use]
    pub const fn with_style(mut self, style: ProgramStyle) -> Self {
        self.style = style;
        self
    }
}

/// Targets of a training (non-deload) week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingTargets {
    /// Fraction of training max, in (0, 1]
    pub intensity: f64,
    /// Reps on each fixed set
    pub fixed_reps: u32,
    /// Rep target on the AMRAP set
    pub amrap_target: u32,
    /// Total sets
    pub sets: u32,
    /// 1-based index of the AMRAP set, equal to `sets`
    pub amrap_set_index: u32,
    /// Working weight, a multiple of the rounding increment
    pub weight: f64,
    /// Training max `weight` was derived from
    pub training_max: f64,
    /// Human label for the week's work
    pub goal: String,
    /// Human label for what changed vs. the prior week
    pub action: String,
}

/// One entry per program week
///
/// Deload weeks are markers only: `targets` is `None` and nothing but `week`
/// and `isDeload` appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    /// 1-based position in the emitted sequence
    pub week: u32,
    /// Whether this is a deload week
    pub is_deload: bool,
    /// Training targets, absent for deload weeks
    #[serde(flatten)]
    pub targets: Option<TrainingTargets>,
}

impl WeekPlan {
    /// Deload marker for a week
    #[must_use]
    pub const fn deload(week: u32) -> Self {
        Self {
            week,
            is_deload: true,
            targets: None,
        }
    }

    /// Training week with targets
    #[must_use]
    pub const fn training(week: u32, targets: TrainingTargets) -> Self {
        Self {
            week,
            is_deload: false,
            targets: Some(targets),
        }
    }

    /// Whether the deload flag and the presence of targets agree
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.is_deload == self.targets.is_none()
    }

    /// Training targets, if this is a training week
    #[must_use]
    pub const fn targets(&self) -> Option<&TrainingTargets> {
        self.targets.as_ref()
    }

    /// Working weight, if this is a training week
    #[must_use]
    pub fn weight(&self) -> Option<f64> {
        self.targets.as_ref().map(|t| t.weight)
    }

    /// Training max in effect, if this is a training week
    #[must_use]
    pub fn training_max(&self) -> Option<f64> {
        self.targets.as_ref().map(|t| t.training_max)
    }
}
