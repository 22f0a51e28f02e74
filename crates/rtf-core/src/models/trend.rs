// ABOUTME: Training-max trend models for historical and analytics display
// ABOUTME: TmAdjustment events and the TmTrendSnapshot summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::style::ProgramStyle;

/// A change of the underlying training max between two training weeks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TmAdjustment {
    /// Week the new training max takes effect
    pub week: u32,
    /// Training max before the change
    pub previous_tm: f64,
    /// Training max after the change
    pub new_tm: f64,
    /// `(new - previous) / previous * 100`, unrounded
    pub percent_change: f64,
}

impl TmAdjustment {
    /// Build an adjustment, computing the percent change
    ///
    /// `previous_tm` must be positive; the engine never produces a non-positive TM.
    #[must_use]
    pub fn new(week: u32, previous_tm: f64, new_tm: f64) -> Self {
        Self {
            week,
            previous_tm,
            new_tm,
            percent_change: (new_tm - previous_tm) / previous_tm * 100.0,
        }
    }

    /// Percent change rounded to one decimal place with sign, e.g. `+5.0%`
    #[must_use]
    pub fn percent_change_display(&self) -> String {
        format!("{:+.1}%", self.percent_change)
    }
}

/// Summary of a training-max trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TmTrendSnapshot {
    /// Style of the program the trend was derived from
    pub style: ProgramStyle,
    /// Exercise the trend belongs to, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<String>,
    /// Adjustments in week order
    pub adjustments: Vec<TmAdjustment>,
    /// Most recent training max, absent when nothing is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_tm: Option<f64>,
    /// Change from the first adjustment's previous TM to `latest_tm`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_percent_change: Option<f64>,
}
