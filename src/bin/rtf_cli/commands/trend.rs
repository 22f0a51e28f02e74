// ABOUTME: Trend subcommand for rtf-cli
// ABOUTME: Applies operator training-max updates and prints the resulting TM trend snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::str::FromStr;

use anyhow::Result;
use rtf_program_engine::config::OutputFormat;
use rtf_program_engine::models::ProgramConfig;
use rtf_program_engine::program::{ProgramScheduleGenerator, TmTrendTracker};
use tracing::info;

use crate::helpers::display::{print_json, print_trend};

/// Operator-entered training max taking effect at a week
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TmUpdate {
    /// Week the new training max applies from
    pub week: u32,
    /// New training max in kilograms
    pub training_max: f64,
}

impl FromStr for TmUpdate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (week, tm) = s
            .split_once('=')
            .ok_or_else(|| format!("expected WEEK=TM, got '{s}'"))?;
        let week = week
            .trim()
            .parse()
            .map_err(|_| format!("invalid week '{}'", week.trim()))?;
        let training_max = tm
            .trim()
            .parse()
            .map_err(|_| format!("invalid training max '{}'", tm.trim()))?;
        Ok(Self { week, training_max })
    }
}

/// Generate a program, apply updates in week order, and print its trend
pub fn run(
    config: &ProgramConfig,
    mut updates: Vec<TmUpdate>,
    exercise_id: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let generator = ProgramScheduleGenerator::new(*config)?;
    let mut schedule = generator.generate(&[])?;

    updates.sort_by_key(|update| update.week);
    for update in &updates {
        info!(
            week = update.week,
            training_max = update.training_max,
            "Applying training max update"
        );
        schedule = generator.rebase_training_max(&schedule, update.week, update.training_max)?;
    }

    let buffer = TmTrendTracker::track(&schedule, config.style);
    let snapshot = buffer.snapshot(config.style, exercise_id);

    match format {
        OutputFormat::Json => print_json(&snapshot),
        OutputFormat::Table => {
            print_trend(&snapshot);
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tm_update() {
        let update: TmUpdate = "9=105.5".parse().unwrap();
        assert_eq!(update.week, 9);
        assert!((update.training_max - 105.5).abs() < f64::EPSILON);
        assert!("9:105".parse::<TmUpdate>().is_err());
        assert!("x=105".parse::<TmUpdate>().is_err());
    }
}
