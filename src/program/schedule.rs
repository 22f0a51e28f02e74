// ABOUTME: Reps-to-Failure program schedule generator producing 18 or 21 week plans
// ABOUTME: Pure projection of weekly intensity, rep/set targets, and rounded loads from a training max
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Schedule generation
//!
//! A program is 18 training weeks. With deloads enabled a deload marker
//! follows every sixth training week, giving 21 weeks with deloads at 7, 14
//! and 21. Intensity ramps one percent point per training week from the
//! style's base; deload weeks do not advance the ramp.

use rtf_core::constants::program::{DELOAD_EVERY, TRAINING_WEEKS, WEEKS_WITH_DELOADS};
use rtf_core::errors::{EngineResult, ValidationError};
use rtf_core::models::{ProgramConfig, StyleProfile, TrainingTargets, WeekPlan};
use tracing::debug;

use super::rounding::{is_multiple_of, round_to_increment, validate_increment};

/// Largest difference between a logged and a ramp intensity treated as equal
const INTENSITY_TOLERANCE: f64 = 1e-6;

/// Position of one emitted week in the canonical program layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekSlot {
    /// Training week at a 1-based training index
    Training {
        /// 1-based emitted week number
        week: u32,
        /// 1-based logical training week
        index: u32,
    },
    /// Deload marker
    Deload {
        /// 1-based emitted week number
        week: u32,
    },
}

impl WeekSlot {
    /// Emitted week number
    #[must_use]
    pub const fn week(self) -> u32 {
        match self {
            Self::Training { week, .. } | Self::Deload { week } => week,
        }
    }

    /// Whether the slot is a deload
    #[must_use]
    pub const fn is_deload(self) -> bool {
        matches!(self, Self::Deload { .. })
    }
}

/// Canonical week layout for a program
#[must_use]
pub fn program_layout(with_deloads: bool) -> Vec<WeekSlot> {
    let mut slots = Vec::with_capacity(WEEKS_WITH_DELOADS as usize);
    let mut week = 0;
    for index in 1..=TRAINING_WEEKS {
        week += 1;
        slots.push(WeekSlot::Training { week, index });
        if with_deloads && index % DELOAD_EVERY == 0 {
            week += 1;
            slots.push(WeekSlot::Deload { week });
        }
    }
    slots
}

/// Why a training week's load differs from the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WeekTransition {
    /// First training week of the program
    Baseline,
    /// Routine +1% step
    Ramp,
    /// First training week after a deload
    AfterDeload,
    /// Operator-entered training max took effect this week
    TrainingMaxUpdate,
}

/// Build one training week
pub(crate) fn build_training_week(
    week: u32,
    index: u32,
    training_max: f64,
    profile: &StyleProfile,
    increment: f64,
    transition: WeekTransition,
) -> WeekPlan {
    let percent = profile.percent_for(index);
    let intensity = profile.intensity_for(index);
    // Scale by integer percent so the product carries no intensity rounding error
    let weight = round_to_increment(training_max * f64::from(percent) / 100.0, increment);

    let goal = format!(
        "Week {index}: {}×{} @ {percent}%, AMRAP {}+",
        profile.sets, profile.fixed_reps, profile.amrap_target
    );
    let action = match transition {
        WeekTransition::Baseline => format!("Establish baseline at {percent}%"),
        WeekTransition::Ramp => format!("Increase intensity +1% to {percent}%"),
        WeekTransition::AfterDeload => format!("Resume after deload at {percent}% (+1%)"),
        WeekTransition::TrainingMaxUpdate => {
            format!("Training max set to {training_max} kg, {percent}%")
        }
    };

    WeekPlan::training(
        week,
        TrainingTargets {
            intensity,
            fixed_reps: profile.fixed_reps,
            amrap_target: profile.amrap_target,
            sets: profile.sets,
            amrap_set_index: profile.amrap_set_index(),
            weight,
            training_max,
            goal,
            action,
        },
    )
}

/// Check a training max supplied by the caller or a log
fn validate_training_max(week: u32, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NonPositiveTrainingMax { week, value })
    }
}

/// Generator bound to a validated `ProgramConfig`
///
/// Construction performs all config validation, so every generation method
/// either returns a complete schedule or fails before computing any week.
#[derive(Debug, Clone)]
pub struct ProgramScheduleGenerator {
    config: ProgramConfig,
    profile: StyleProfile,
    increment: f64,
    layout: Vec<WeekSlot>,
}

impl ProgramScheduleGenerator {
    /// Validate a config and bind a generator to it
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonPositiveWeight` or
    /// `ValidationError::UnsupportedRoundingIncrement`.
    pub fn new(config: ProgramConfig) -> Result<Self, ValidationError> {
        if !(config.initial_weight.is_finite() && config.initial_weight > 0.0) {
            return Err(ValidationError::NonPositiveWeight {
                value: config.initial_weight,
            });
        }
        let increment = validate_increment(config.rounding_increment_kg)?;

        Ok(Self {
            config,
            profile: config.style.profile(),
            increment,
            layout: program_layout(config.with_deloads),
        })
    }

    /// Config this generator was built from
    #[must_use]
    pub const fn config(&self) -> &ProgramConfig {
        &self.config
    }

    /// Canonical layout of the program
    #[must_use]
    pub fn layout(&self) -> &[WeekSlot] {
        &self.layout
    }

    /// Generate the full program
    ///
    /// `prior_log` is the already-completed prefix of the program. Logged weeks
    /// are emitted verbatim and the rest are projected from the training max of
    /// the last logged training week. An empty log is pure projection mode.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the log does not line up with the layout,
    /// carries a non-positive training max, or holds training weeks whose
    /// targets, intensity or rounding differ from this generator's.
    pub fn generate(&self, prior_log: &[WeekPlan]) -> EngineResult<Vec<WeekPlan>> {
        self.validate_prior_log(prior_log)?;

        let training_max = prior_log
            .iter()
            .rev()
            .find_map(WeekPlan::training_max)
            .unwrap_or(self.config.initial_weight);

        let plan = self.project(prior_log, training_max, false);
        debug!(
            style = %self.config.style,
            weeks = plan.len(),
            with_deloads = self.config.with_deloads,
            logged = prior_log.len(),
            "Generated RTF program"
        );
        Ok(plan)
    }

    /// Apply an operator-entered training max from `from_week` onward
    ///
    /// Weeks before `from_week` are kept as the prior log; the remaining weeks
    /// are re-projected from `new_training_max` on the same intensity ramp.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if `from_week` is outside the schedule,
    /// `new_training_max` is not positive, or the kept prefix does not line up
    /// with this generator's layout.
    pub fn rebase_training_max(
        &self,
        schedule: &[WeekPlan],
        from_week: u32,
        new_training_max: f64,
    ) -> EngineResult<Vec<WeekPlan>> {
        let len = schedule.len();
        if from_week == 0 || from_week as usize > len {
            return Err(ValidationError::WeekOutOfRange {
                week: from_week,
                len,
            }
            .into());
        }
        let new_training_max = validate_training_max(from_week, new_training_max)?;

        let prefix = &schedule[..from_week as usize - 1];
        self.validate_prior_log(prefix)?;

        let plan = self.project(prefix, new_training_max, true);
        debug!(
            style = %self.config.style,
            from_week,
            training_max = new_training_max,
            "Rebased RTF program training max"
        );
        Ok(plan)
    }

    fn validate_prior_log(&self, prior_log: &[WeekPlan]) -> Result<(), ValidationError> {
        if prior_log.len() > self.layout.len() {
            return Err(ValidationError::PriorLogTooLong {
                len: prior_log.len(),
                max: self.layout.len(),
            });
        }

        for (entry, slot) in prior_log.iter().zip(&self.layout) {
            let position = slot.week();
            if entry.week != position {
                return Err(ValidationError::PriorLogMismatch {
                    position,
                    reason: "week number out of sequence",
                });
            }
            if entry.is_deload != slot.is_deload() {
                return Err(ValidationError::PriorLogMismatch {
                    position,
                    reason: "deload flag differs from the program layout",
                });
            }
            if !entry.is_well_formed() {
                return Err(ValidationError::PriorLogMismatch {
                    position,
                    reason: "deload flag and training targets disagree",
                });
            }
            if let (WeekSlot::Training { index, .. }, Some(targets)) = (*slot, entry.targets()) {
                validate_training_max(position, targets.training_max)?;
                self.check_logged_targets(position, index, targets)?;
            }
        }
        Ok(())
    }

    /// Logged training weeks must follow this generator's style and ramp
    fn check_logged_targets(
        &self,
        position: u32,
        index: u32,
        targets: &TrainingTargets,
    ) -> Result<(), ValidationError> {
        let profile = &self.profile;
        let reason = if targets.fixed_reps != profile.fixed_reps
            || targets.amrap_target != profile.amrap_target
            || targets.sets != profile.sets
            || targets.amrap_set_index != profile.amrap_set_index()
        {
            Some("rep and set targets belong to a different style")
        } else if (targets.intensity - profile.intensity_for(index)).abs() > INTENSITY_TOLERANCE {
            Some("intensity is off the program ramp")
        } else if !is_multiple_of(targets.weight, self.increment) {
            Some("weight is not a multiple of the rounding increment")
        } else {
            None
        };

        reason.map_or(Ok(()), |reason| {
            Err(ValidationError::PriorLogMismatch { position, reason })
        })
    }

    /// Emit `prefix` verbatim, then project the remaining slots from `training_max`
    fn project(&self, prefix: &[WeekPlan], training_max: f64, tm_changed: bool) -> Vec<WeekPlan> {
        let mut plan = Vec::with_capacity(self.layout.len());
        plan.extend_from_slice(prefix);

        let mut pending_tm_change = tm_changed;
        let mut previous_was_deload = prefix.last().is_some_and(|w| w.is_deload);

        for slot in &self.layout[prefix.len()..] {
            match *slot {
                WeekSlot::Deload { week } => {
                    plan.push(WeekPlan::deload(week));
                    previous_was_deload = true;
                }
                WeekSlot::Training { week, index } => {
                    let transition = if pending_tm_change {
                        WeekTransition::TrainingMaxUpdate
                    } else if index == 1 {
                        WeekTransition::Baseline
                    } else if previous_was_deload {
                        WeekTransition::AfterDeload
                    } else {
                        WeekTransition::Ramp
                    };
                    plan.push(build_training_week(
                        week,
                        index,
                        training_max,
                        &self.profile,
                        self.increment,
                        transition,
                    ));
                    pending_tm_change = false;
                    previous_was_deload = false;
                }
            }
        }
        plan
    }
}

/// Generate a program from a config and an optional prior log
///
/// Pure: identical inputs always produce identical output.
///
/// # Errors
///
/// Returns `EngineError::Validation` for a non-positive weight, an unsupported
/// rounding increment, or a prior log that does not match the program layout.
pub fn generate_program(
    config: &ProgramConfig,
    prior_log: &[WeekPlan],
) -> EngineResult<Vec<WeekPlan>> {
    ProgramScheduleGenerator::new(*config)?.generate(prior_log)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rtf_core::constants::program::DELOAD_WEEKS;
    use rtf_core::models::ProgramStyle;

    #[test]
    fn test_layout_with_deloads() {
        let layout = program_layout(true);
        assert_eq!(layout.len(), 21);
        let deloads: Vec<u32> = layout
            .iter()
            .filter(|s| s.is_deload())
            .map(|s| s.week())
            .collect();
        assert_eq!(deloads, DELOAD_WEEKS);
        assert_eq!(layout[7], WeekSlot::Training { week: 8, index: 7 });
    }

    #[test]
    fn test_layout_without_deloads() {
        let layout = program_layout(false);
        assert_eq!(layout.len(), 18);
        assert!(layout.iter().all(|s| !s.is_deload()));
        assert_eq!(layout[17], WeekSlot::Training { week: 18, index: 18 });
    }

    #[test]
    fn test_action_labels_follow_transitions() {
        let config = ProgramConfig::new(100.0, ProgramStyle::Standard);
        let plan = generate_program(&config, &[]).unwrap();

        let action = |i: usize| plan[i].targets().unwrap().action.clone();
        assert_eq!(action(0), "Establish baseline at 70%");
        assert_eq!(action(1), "Increase intensity +1% to 71%");
        // Week 8 follows the first deload
        assert_eq!(action(7), "Resume after deload at 76% (+1%)");
        assert_eq!(plan[0].targets().unwrap().goal, "Week 1: 5×5 @ 70%, AMRAP 8+");
    }

    #[test]
    fn test_rejects_zero_weight_before_computing() {
        let config = ProgramConfig::new(0.0, ProgramStyle::Standard);
        assert!(matches!(
            ProgramScheduleGenerator::new(config),
            Err(ValidationError::NonPositiveWeight { .. })
        ));
    }
}
