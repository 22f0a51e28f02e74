// ABOUTME: Dual-variant forecast projector merging Standard and Hypertrophy schedules
// ABOUTME: Builds preview/full comparison rows and derives a counterpart schedule from one variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rtf_core::constants::forecast::PREVIEW_WEEKS;
use rtf_core::errors::{EngineResult, InvariantViolation};
use rtf_core::models::{ForecastWeek, ProgramConfig, ProgramStyle, VariantGoal, WeekPlan};
use tracing::{debug, error};

use super::rounding::validate_increment;
use super::schedule::{build_training_week, generate_program, WeekTransition};

/// How much of the forecast to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForecastMode {
    /// First six weeks, shown before the program is committed
    Preview,
    /// Every week
    #[default]
    Full,
}

impl ForecastMode {
    /// Maximum number of rows for this mode
    #[must_use]
    pub const fn limit(self) -> Option<usize> {
        match self {
            Self::Preview => Some(PREVIEW_WEEKS),
            Self::Full => None,
        }
    }
}

/// Side-by-side Standard/Hypertrophy projector
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastProjector {
    mode: ForecastMode,
}

impl ForecastProjector {
    /// Create a projector for a mode
    #[must_use]
    pub const fn new(mode: ForecastMode) -> Self {
        Self { mode }
    }

    /// Projector returning the first six weeks
    #[must_use]
    pub const fn preview() -> Self {
        Self::new(ForecastMode::Preview)
    }

    /// Projector returning every week
    #[must_use]
    pub const fn full() -> Self {
        Self::new(ForecastMode::Full)
    }

    /// Mode of this projector
    #[must_use]
    pub const fn mode(&self) -> ForecastMode {
        self.mode
    }

    /// Merge two schedules index-by-index into comparison rows
    ///
    /// Both schedules must share the same week numbers and deload flags. The
    /// whole sequence is checked before the mode's truncation is applied.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Invariant` if the schedules differ in shape or a
    /// week's deload flag disagrees with its targets.
    pub fn project(
        &self,
        standard: &[WeekPlan],
        hypertrophy: &[WeekPlan],
    ) -> EngineResult<Vec<ForecastWeek>> {
        if let Err(violation) = check_shapes(standard, hypertrophy) {
            error!(%violation, "Forecast projection received mismatched schedules");
            return Err(violation.into());
        }

        let take = self.mode.limit().unwrap_or(standard.len());
        let forecast: Vec<ForecastWeek> = standard
            .iter()
            .zip(hypertrophy)
            .take(take)
            .map(|(std_week, hyp_week)| match (std_week.targets(), hyp_week.targets()) {
                (Some(std_targets), Some(hyp_targets)) => ForecastWeek {
                    week: std_week.week,
                    is_deload: false,
                    standard: Some(VariantGoal::from(std_targets)),
                    hypertrophy: Some(VariantGoal::from(hyp_targets)),
                },
                _ => ForecastWeek::deload(std_week.week),
            })
            .collect();

        debug!(mode = ?self.mode, rows = forecast.len(), "Projected RTF forecast");
        Ok(forecast)
    }

    /// Generate both variants from one config and project them
    ///
    /// The config's own style is ignored; both variants share its weight,
    /// deload setting and rounding increment.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Validation` if the config is invalid.
    pub fn project_from_config(&self, config: &ProgramConfig) -> EngineResult<Vec<ForecastWeek>> {
        let standard = generate_program(&config.with_style(ProgramStyle::Standard), &[])?;
        let hypertrophy = generate_program(&config.with_style(ProgramStyle::Hypertrophy), &[])?;
        self.project(&standard, &hypertrophy)
    }
}

/// Project two schedules over every week
///
/// # Errors
///
/// Returns `EngineError::Invariant` if the schedules differ in shape.
pub fn project_forecast(
    standard: &[WeekPlan],
    hypertrophy: &[WeekPlan],
) -> EngineResult<Vec<ForecastWeek>> {
    ForecastProjector::full().project(standard, hypertrophy)
}

/// Build the other variant's schedule from one generated schedule
///
/// Keeps the week/deload skeleton and each week's training max, and applies
/// `target_style`'s intensity ramp and rep/set constants.
///
/// # Errors
///
/// Returns `EngineError::Validation` for an unsupported rounding increment and
/// `EngineError::Invariant` if a week's deload flag disagrees with its targets.
pub fn derive_counterpart(
    schedule: &[WeekPlan],
    target_style: ProgramStyle,
    rounding_increment_kg: f64,
) -> EngineResult<Vec<WeekPlan>> {
    let increment = validate_increment(rounding_increment_kg)?;
    let profile = target_style.profile();

    let mut derived = Vec::with_capacity(schedule.len());
    let mut index = 0;
    let mut previous_tm: Option<f64> = None;
    let mut previous_was_deload = false;

    for week in schedule {
        if !week.is_well_formed() {
            return Err(InvariantViolation::MalformedWeek { week: week.week }.into());
        }
        let Some(targets) = week.targets() else {
            derived.push(WeekPlan::deload(week.week));
            previous_was_deload = true;
            continue;
        };

        index += 1;
        let tm_changed = previous_tm.is_some_and(|tm| (tm - targets.training_max).abs() > 1e-9);
        let transition = if tm_changed {
            WeekTransition::TrainingMaxUpdate
        } else if index == 1 {
            WeekTransition::Baseline
        } else if previous_was_deload {
            WeekTransition::AfterDeload
        } else {
            WeekTransition::Ramp
        };

        derived.push(build_training_week(
            week.week,
            index,
            targets.training_max,
            &profile,
            increment,
            transition,
        ));
        previous_tm = Some(targets.training_max);
        previous_was_deload = false;
    }

    Ok(derived)
}

fn check_shapes(
    standard: &[WeekPlan],
    hypertrophy: &[WeekPlan],
) -> Result<(), InvariantViolation> {
    if standard.len() != hypertrophy.len() {
        return Err(InvariantViolation::ScheduleLengthMismatch {
            standard: standard.len(),
            hypertrophy: hypertrophy.len(),
        });
    }

    for (index, (std_week, hyp_week)) in standard.iter().zip(hypertrophy).enumerate() {
        if std_week.week != hyp_week.week {
            return Err(InvariantViolation::ScheduleShapeMismatch {
                index,
                detail: "week numbers differ",
            });
        }
        if std_week.is_deload != hyp_week.is_deload {
            return Err(InvariantViolation::ScheduleShapeMismatch {
                index,
                detail: "deload flags differ",
            });
        }
        if !std_week.is_well_formed() || !hyp_week.is_well_formed() {
            return Err(InvariantViolation::MalformedWeek {
                week: std_week.week,
            });
        }
    }
    Ok(())
}
