// ABOUTME: Integration tests for the RTF program schedule generator
// ABOUTME: Covers layout invariants, intensity ramp, rounding, prior logs, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{generate, hypertrophy_config, standard_config, training_intensities};
use rtf_program_engine::errors::{EngineError, ErrorCode, ValidationError};
use rtf_program_engine::models::{ProgramConfig, ProgramStyle, WeekPlan};
use rtf_program_engine::program::{
    generate_program, is_multiple_of, ProgramScheduleGenerator,
};

fn validation_error(result: Result<Vec<WeekPlan>, EngineError>) -> ValidationError {
    match result {
        Err(EngineError::Validation(err)) => err,
        other => panic!("expected validation error, got {other:?}"),
    }
}

// ============================================================================
// Determinism and shape
// ============================================================================

#[test]
fn test_generation_is_deterministic() {
    for config in [standard_config(), hypertrophy_config()] {
        for with_deloads in [true, false] {
            let config = config.with_deloads(with_deloads);
            assert_eq!(generate(&config), generate(&config));
        }
    }
}

#[test]
fn test_week_counts() {
    assert_eq!(generate(&standard_config()).len(), 21);
    assert_eq!(generate(&standard_config().with_deloads(false)).len(), 18);
    assert_eq!(generate(&hypertrophy_config()).len(), 21);
    assert_eq!(generate(&hypertrophy_config().with_deloads(false)).len(), 18);
}

#[test]
fn test_deload_placement() {
    let schedule = generate(&standard_config());
    let deloads: Vec<u32> = schedule
        .iter()
        .filter(|w| w.is_deload)
        .map(|w| w.week)
        .collect();
    assert_eq!(deloads, vec![7, 14, 21]);

    for (i, week) in schedule.iter().enumerate() {
        assert_eq!(week.week as usize, i + 1);
        if week.is_deload {
            assert!(week.targets().is_none());
        }
    }
}

#[test]
fn test_deload_weeks_serialize_as_markers() {
    let schedule = generate(&standard_config());
    let json = serde_json::to_value(&schedule[6]).unwrap();
    assert_eq!(json, serde_json::json!({ "week": 7, "isDeload": true }));
}

// ============================================================================
// Intensity ramp and variant constants
// ============================================================================

#[test]
fn test_intensity_strictly_increases_by_one_percent() {
    for config in [standard_config(), hypertrophy_config()] {
        let intensities = training_intensities(&generate(&config));
        assert_eq!(intensities.len(), 18);
        for pair in intensities.windows(2) {
            assert!(pair[1] > pair[0]);
            assert!((pair[1] - pair[0] - 0.01).abs() < 1e-9);
        }
    }
}

#[test]
fn test_known_values() {
    let standard = generate(&standard_config());
    let first = standard[0].targets().unwrap();
    assert!((first.intensity - 0.70).abs() < 1e-5);
    for t in standard.iter().filter_map(WeekPlan::targets) {
        assert_eq!((t.fixed_reps, t.amrap_target, t.sets), (5, 8, 5));
        assert_eq!(t.amrap_set_index, 5);
    }

    let hypertrophy = generate(&hypertrophy_config());
    let first = hypertrophy[0].targets().unwrap();
    assert!((first.intensity - 0.65).abs() < 1e-5);
    for t in hypertrophy.iter().filter_map(WeekPlan::targets) {
        assert_eq!((t.fixed_reps, t.amrap_target, t.sets), (8, 12, 4));
        assert_eq!(t.amrap_set_index, 4);
    }
}

#[test]
fn test_intensity_ranges() {
    for i in training_intensities(&generate(&standard_config())) {
        assert!((0.5..=1.0).contains(&i));
    }
    for i in training_intensities(&generate(&hypertrophy_config())) {
        assert!((0.4..=0.9).contains(&i));
    }
}

#[test]
fn test_goal_and_action_are_present() {
    for week in generate(&hypertrophy_config()).iter().filter_map(WeekPlan::targets) {
        assert!(!week.goal.is_empty());
        assert!(!week.action.is_empty());
    }
}

// ============================================================================
// Rounding
// ============================================================================

#[test]
fn test_weights_are_multiples_of_increment() {
    for increment in [0.5, 1.0, 2.5, 5.0] {
        for weight in [57.3, 100.0, 142.5, 201.7] {
            let config = ProgramConfig::new(weight, ProgramStyle::Standard).with_rounding(increment);
            for t in generate(&config).iter().filter_map(WeekPlan::targets) {
                assert!(
                    is_multiple_of(t.weight, increment),
                    "{} is not a multiple of {increment}",
                    t.weight
                );
            }
        }
    }
}

#[test]
fn test_known_weights() {
    let schedule = generate(&standard_config());
    let weight = |i: usize| schedule[i].weight().unwrap();
    // 70 kg, 71 -> 70, 72 -> 72.5
    assert!((weight(0) - 70.0).abs() < 1e-9);
    assert!((weight(1) - 70.0).abs() < 1e-9);
    assert!((weight(2) - 72.5).abs() < 1e-9);
}

#[test]
fn test_half_increment_rounds_up() {
    // 125 kg at 71% is 88.75, exactly halfway between 87.5 and 90
    let config = ProgramConfig::new(125.0, ProgramStyle::Standard);
    let schedule = generate(&config);
    assert!((schedule[1].weight().unwrap() - 90.0).abs() < 1e-9);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_21_week_program() {
    let schedule = generate(&standard_config());
    assert_eq!(schedule.len(), 21);
    for week in [7, 14, 21] {
        assert!(schedule[week - 1].is_deload);
    }
    assert!((schedule[0].targets().unwrap().intensity - 0.70).abs() < 1e-5);

    let last_training = schedule.iter().rev().find(|w| !w.is_deload).unwrap();
    assert_eq!(last_training.week, 20);
    assert!((last_training.targets().unwrap().intensity - 0.87).abs() < 1e-5);
}

#[test]
fn test_scenario_18_week_program() {
    let schedule = generate(&standard_config().with_deloads(false));
    assert_eq!(schedule.len(), 18);
    assert!(schedule.iter().all(|w| !w.is_deload));
    let last = schedule.last().unwrap();
    assert_eq!(last.week, 18);
    assert!((last.targets().unwrap().intensity - 0.87).abs() < 1e-5);
}

// ============================================================================
// Prior log and training max updates
// ============================================================================

#[test]
fn test_prior_log_prefix_is_kept_verbatim() {
    let full = generate(&standard_config());
    let replayed = generate_program(&standard_config(), &full[..5]).unwrap();
    assert_eq!(replayed, full);
}

#[test]
fn test_prior_log_training_max_seeds_projection() {
    let heavier = generate(&ProgramConfig::new(110.0, ProgramStyle::Standard));
    let projected = generate_program(&standard_config(), &heavier[..3]).unwrap();
    assert_eq!(projected, heavier);
}

#[test]
fn test_prior_log_must_match_layout() {
    let schedule = generate(&standard_config());

    let misplaced_deload = vec![WeekPlan::deload(1)];
    let err = validation_error(generate_program(&standard_config(), &misplaced_deload));
    assert!(matches!(err, ValidationError::PriorLogMismatch { position: 1, .. }));

    let skipped = vec![schedule[0].clone(), schedule[2].clone()];
    let err = validation_error(generate_program(&standard_config(), &skipped));
    assert!(matches!(err, ValidationError::PriorLogMismatch { position: 2, .. }));

    let mut too_long = schedule.clone();
    too_long.push(WeekPlan::deload(22));
    let err = validation_error(generate_program(&standard_config(), &too_long));
    assert!(matches!(err, ValidationError::PriorLogTooLong { len: 22, max: 21 }));
}

#[test]
fn test_prior_log_rejects_non_positive_training_max() {
    let mut log = generate(&standard_config())[..2].to_vec();
    if let Some(targets) = log[1].targets.as_mut() {
        targets.training_max = 0.0;
    }
    let err = validation_error(generate_program(&standard_config(), &log));
    assert!(matches!(err, ValidationError::NonPositiveTrainingMax { week: 2, .. }));
}

#[test]
fn test_prior_log_from_other_style_is_rejected() {
    let hypertrophy = generate(&hypertrophy_config());
    let err = validation_error(generate_program(&standard_config(), &hypertrophy[..3]));
    assert_eq!(
        err,
        ValidationError::PriorLogMismatch {
            position: 1,
            reason: "rep and set targets belong to a different style"
        }
    );
}

#[test]
fn test_prior_log_rejects_off_ramp_intensity() {
    let mut log = generate(&standard_config())[..4].to_vec();
    if let Some(targets) = log[1].targets.as_mut() {
        targets.intensity = 0.95;
    }
    let err = validation_error(generate_program(&standard_config(), &log));
    assert_eq!(
        err,
        ValidationError::PriorLogMismatch {
            position: 2,
            reason: "intensity is off the program ramp"
        }
    );
}

#[test]
fn test_prior_log_rejects_unrounded_weight() {
    let mut log = generate(&standard_config())[..4].to_vec();
    if let Some(targets) = log[1].targets.as_mut() {
        targets.weight = 71.3;
    }
    let err = validation_error(generate_program(&standard_config(), &log));
    assert_eq!(
        err,
        ValidationError::PriorLogMismatch {
            position: 2,
            reason: "weight is not a multiple of the rounding increment"
        }
    );
    assert_eq!(err.user_message(), "Logged weeks do not match this program");
}

#[test]
fn test_rebase_training_max() {
    let generator = ProgramScheduleGenerator::new(standard_config()).unwrap();
    let schedule = generator.generate(&[]).unwrap();
    let rebased = generator.rebase_training_max(&schedule, 9, 105.0).unwrap();

    assert_eq!(rebased.len(), 21);
    assert_eq!(&rebased[..8], &schedule[..8]);

    let week9 = rebased[8].targets().unwrap();
    assert!((week9.training_max - 105.0).abs() < 1e-9);
    // 77% of 105 is 80.85
    assert!((week9.weight - 80.0).abs() < 1e-9);
    assert!(week9.action.starts_with("Training max set to 105"));
    assert!((week9.intensity - schedule[8].targets().unwrap().intensity).abs() < 1e-12);

    let week10 = rebased[9].targets().unwrap();
    assert!((week10.training_max - 105.0).abs() < 1e-9);
    assert!(week10.action.starts_with("Increase intensity"));
}

#[test]
fn test_rebase_rejects_bad_input() {
    let generator = ProgramScheduleGenerator::new(standard_config()).unwrap();
    let schedule = generator.generate(&[]).unwrap();

    let err = validation_error(generator.rebase_training_max(&schedule, 0, 105.0));
    assert!(matches!(err, ValidationError::WeekOutOfRange { week: 0, len: 21 }));
    let err = validation_error(generator.rebase_training_max(&schedule, 22, 105.0));
    assert!(matches!(err, ValidationError::WeekOutOfRange { week: 22, .. }));
    let err = validation_error(generator.rebase_training_max(&schedule, 5, -1.0));
    assert!(matches!(err, ValidationError::NonPositiveTrainingMax { week: 5, .. }));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_rejects_non_positive_weight() {
    for weight in [0.0, -20.0, f64::NAN] {
        let config = ProgramConfig::new(weight, ProgramStyle::Standard);
        let result = generate_program(&config, &[]);
        let err = result.as_ref().unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValueOutOfRange);
        assert!(err.is_user_facing());
        let err = validation_error(result);
        assert_eq!(err.user_message(), "Training Max must be greater than 0");
    }
}

#[test]
fn test_rejects_unsupported_increment() {
    for increment in [0.0, 0.25, 3.0, -2.5] {
        let config = standard_config().with_rounding(increment);
        let err = validation_error(generate_program(&config, &[]));
        assert!(matches!(err, ValidationError::UnsupportedRoundingIncrement { .. }));
    }
}

#[test]
fn test_weight_checked_before_increment() {
    let config = ProgramConfig::new(0.0, ProgramStyle::Standard).with_rounding(3.0);
    let err = validation_error(generate_program(&config, &[]));
    assert!(matches!(err, ValidationError::NonPositiveWeight { .. }));
}

#[test]
fn test_rejects_unknown_style() {
    let err = ProgramConfig::from_form(100.0, "POWERLIFTING", true, 2.5).unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownStyle {
            value: "POWERLIFTING".to_owned()
        }
    );

    let config = ProgramConfig::from_form(100.0, "hypertrophy", false, 1.0).unwrap();
    assert_eq!(config.style, ProgramStyle::Hypertrophy);
    assert_eq!(generate(&config).len(), 18);
}
