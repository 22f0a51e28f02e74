// ABOUTME: Forecast subcommand for rtf-cli
// ABOUTME: Projects Standard and Hypertrophy side by side in preview or full mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use rtf_program_engine::config::OutputFormat;
use rtf_program_engine::models::{ForecastResponse, ProgramConfig};
use rtf_program_engine::program::{ForecastMode, ForecastProjector};

use crate::helpers::display::{print_forecast, print_json};

/// Project and print a forecast
pub fn run(config: &ProgramConfig, preview: bool, format: OutputFormat) -> Result<()> {
    let mode = if preview {
        ForecastMode::Preview
    } else {
        ForecastMode::Full
    };
    let forecast = ForecastProjector::new(mode).project_from_config(config)?;

    match format {
        OutputFormat::Json => print_json(&ForecastResponse::from_forecast(
            None,
            config.with_deloads,
            forecast,
        )),
        OutputFormat::Table => {
            print_forecast(&forecast);
            Ok(())
        }
    }
}
