// ABOUTME: Main library entry point for the Reps-to-Failure program engine
// ABOUTME: Schedule generation, dual-variant forecasts, training-max trends, and shell support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # RTF Program Engine
//!
//! A deterministic scheduler for Reps-to-Failure strength programs. Given a
//! starting training max and a few style options it produces an 18 or 21 week
//! program with per-week targets, deload weeks and a training-max trend.
//!
//! ## Architecture
//!
//! - **program**: the pure engine (generator, forecast projector, TM trend tracker)
//! - **transport**: data contract of the conditional-GET cache serving stored forecasts
//! - **config**: environment defaults for the CLI shell
//! - **logging**: `tracing-subscriber` setup for the CLI shell
//!
//! Core types and errors come from the `rtf-core` crate and are re-exported here.
//!
//! ## Example Usage
//!
//! ```rust
//! use rtf_program_engine::models::{ProgramConfig, ProgramStyle};
//! use rtf_program_engine::program::{generate_program, ForecastProjector};
//!
//! # fn main() -> Result<(), rtf_program_engine::errors::EngineError> {
//! let config = ProgramConfig::new(100.0, ProgramStyle::Standard);
//! let weeks = generate_program(&config, &[])?;
//! assert_eq!(weeks.len(), 21);
//!
//! let preview = ForecastProjector::preview().project_from_config(&config)?;
//! assert_eq!(preview.len(), 6);
//! # Ok(())
//! # }
//! ```

/// Pure program engine
pub mod program;

/// Transport collaborator contract
pub mod transport;

/// CLI configuration
pub mod config;

/// Logging setup
pub mod logging;

pub use rtf_core::{constants, errors, models};
