// ABOUTME: Program subcommand for rtf-cli
// ABOUTME: Generates one style's schedule and prints it as a table or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use rtf_program_engine::config::OutputFormat;
use rtf_program_engine::models::ProgramConfig;
use rtf_program_engine::program::generate_program;
use tracing::info;

use crate::helpers::display::{print_json, print_program};

/// Generate and print a program
pub fn run(config: &ProgramConfig, format: OutputFormat) -> Result<()> {
    info!(
        style = %config.style,
        weight = config.initial_weight,
        "Generating RTF program"
    );
    let weeks = generate_program(config, &[])?;

    match format {
        OutputFormat::Json => print_json(&weeks),
        OutputFormat::Table => {
            print_program(config, &weeks);
            Ok(())
        }
    }
}
