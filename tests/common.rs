// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging init and program config builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `rtf_program_engine`

use rtf_program_engine::models::{ProgramConfig, ProgramStyle, WeekPlan};
use rtf_program_engine::program::generate_program;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 100 kg Standard program with deloads and 2.5 kg rounding
pub fn standard_config() -> ProgramConfig {
    ProgramConfig::new(100.0, ProgramStyle::Standard)
}

/// 100 kg Hypertrophy program with deloads and 2.5 kg rounding
pub fn hypertrophy_config() -> ProgramConfig {
    ProgramConfig::new(100.0, ProgramStyle::Hypertrophy)
}

/// Generate without a prior log, panicking on invalid config
pub fn generate(config: &ProgramConfig) -> Vec<WeekPlan> {
    init_test_logging();
    generate_program(config, &[]).unwrap()
}

/// Intensities of the training weeks in order
pub fn training_intensities(schedule: &[WeekPlan]) -> Vec<f64> {
    schedule
        .iter()
        .filter_map(|w| w.targets().map(|t| t.intensity))
        .collect()
}
