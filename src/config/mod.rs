// ABOUTME: Configuration for the RTF command-line shell
// ABOUTME: Environment-driven defaults validated at load time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Configuration
//!
//! The engine takes every input as an argument. Only the bundled CLI reads
//! defaults from the environment.

/// Environment variable loading for CLI defaults
pub mod environment;

pub use environment::{ConfigError, OutputFormat, ShellConfig};
