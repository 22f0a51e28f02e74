// ABOUTME: Core data models for the RTF program engine
// ABOUTME: Re-exports program, forecast, and training-max trend types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data exchanged between the engine, its callers, and the transport
//! layer. Every type is JSON-serializable with camelCase field names and
//! round-trips losslessly through `serde_json`.

mod forecast;
mod program;
mod style;
mod trend;

pub use forecast::{ForecastResponse, ForecastWeek, VariantGoal};
pub use program::{ProgramConfig, TrainingTargets, WeekPlan, DEFAULT_ROUNDING_INCREMENT_KG};
pub use style::{ProgramStyle, StyleProfile};
pub use trend::{TmAdjustment, TmTrendSnapshot};
