// ABOUTME: Dual-variant forecast models shared by local previews and the backend endpoint
// ABOUTME: ForecastWeek rows, per-variant goals, and the ForecastResponse wire envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::program::TrainingTargets;
use crate::constants::forecast::FORMAT_VERSION;
use crate::constants::program::{TRAINING_WEEKS, WEEKS_WITH_DELOADS};

/// Training goal of one variant for one week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantGoal {
    /// Fraction of training max
    pub intensity: f64,
    /// Reps on each fixed set
    pub fixed_reps: u32,
    /// Rep target on the AMRAP set
    pub amrap_target: u32,
    /// Total sets
    pub sets: u32,
    /// 1-based index of the AMRAP set
    pub amrap_set: u32,
}

impl From<&TrainingTargets> for VariantGoal {
    fn from(targets: &TrainingTargets) -> Self {
        Self {
            intensity: targets.intensity,
            fixed_reps: targets.fixed_reps,
            amrap_target: targets.amrap_target,
            sets: targets.sets,
            amrap_set: targets.amrap_set_index,
        }
    }
}

/// Side-by-side comparison row for one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastWeek {
    /// 1-based week position
    pub week: u32,
    /// Whether this is a deload week
    pub is_deload: bool,
    /// Standard variant goal, absent on deload weeks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<VariantGoal>,
    /// Hypertrophy variant goal, absent on deload weeks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hypertrophy: Option<VariantGoal>,
}

impl ForecastWeek {
    /// Deload row with no variant payload
    #[must_use]
    pub const fn deload(week: u32) -> Self {
        Self {
            week,
            is_deload: true,
            standard: None,
            hypertrophy: None,
        }
    }
}

/// Forecast envelope as returned by the backend forecast endpoint
///
/// A locally generated preview uses the same envelope so rendering code can
/// consume either interchangeably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    /// Routine the forecast belongs to; absent for unsaved previews
    pub routine_id: Option<Uuid>,
    /// Length of the routine's program, even when `forecast` is a preview
    pub weeks: u32,
    /// Wire format version
    pub version: u32,
    /// Whether the underlying schedules include deload weeks
    pub with_deloads: bool,
    /// Week-by-week comparison rows
    pub forecast: Vec<ForecastWeek>,
}

impl ForecastResponse {
    /// Wrap forecast rows in the wire envelope
    ///
    /// `weeks` is derived from `with_deloads`, so a six-week preview of a
    /// 21-week program still reports 21.
    #[must_use]
    pub fn from_forecast(
        routine_id: Option<Uuid>,
        with_deloads: bool,
        forecast: Vec<ForecastWeek>,
    ) -> Self {
        Self {
            routine_id,
            weeks: if with_deloads {
                WEEKS_WITH_DELOADS
            } else {
                TRAINING_WEEKS
            },
            version: FORMAT_VERSION,
            with_deloads,
            forecast,
        }
    }
}
