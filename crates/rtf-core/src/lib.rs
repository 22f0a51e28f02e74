// ABOUTME: Core types and constants for the RTF program engine
// ABOUTME: Foundation crate with error handling, program constants, and wire data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # RTF Core
//!
//! Foundation crate providing shared types and constants for the Reps-to-Failure
//! program engine. It carries no scheduling logic: the generator, projector and
//! trend tracker live in `rtf_program_engine` and exchange the types defined here.
//!
//! ## Modules
//!
//! - **errors**: `EngineError`, `ValidationError`, `InvariantViolation` and stable `ErrorCode`s
//! - **constants**: Program shape (week counts, deload cadence, supported increments)
//! - **models**: `ProgramConfig`, `WeekPlan`, forecast and training-max trend types

/// Unified error handling with stable error codes
pub mod errors;

/// Program shape constants organized by domain
pub mod constants;

/// Plain, JSON-serializable data model shared by every engine component
pub mod models;
