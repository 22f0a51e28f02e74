// ABOUTME: RTF program engine: schedule generation, forecast projection, and TM trends
// ABOUTME: Pure synchronous algorithms with no shared mutable state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Program Engine
//!
//! Three components, leaves first:
//!
//! - [`ProgramScheduleGenerator`] turns a [`ProgramConfig`](rtf_core::models::ProgramConfig)
//!   into the canonical week sequence
//! - [`ForecastProjector`] merges the Standard and Hypertrophy sequences into
//!   comparison rows
//! - [`TmTrendTracker`] derives training-max adjustments from a sequence
//!
//! Every call takes its inputs by value or reference and returns a fresh
//! result, so the engine is safe to call from any thread without locking.

/// Dual-variant forecast projection
pub mod forecast;
/// Weight rounding to plate increments
pub mod rounding;
/// Week-by-week schedule generation
pub mod schedule;
/// Training-max trend derivation
pub mod tm_trend;

pub use forecast::{derive_counterpart, project_forecast, ForecastMode, ForecastProjector};
pub use rounding::{is_multiple_of, round_to_increment, validate_increment};
pub use schedule::{generate_program, program_layout, ProgramScheduleGenerator, WeekSlot};
pub use tm_trend::{snapshot, TmTrendBuffer, TmTrendTracker};
