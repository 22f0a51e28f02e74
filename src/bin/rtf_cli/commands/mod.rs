// ABOUTME: Re-exports command modules for rtf-cli
// ABOUTME: Provides the program, forecast, and trend subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod forecast;
pub mod program;
pub mod trend;
