// ABOUTME: RTF CLI - command-line front end for the Reps-to-Failure program engine
// ABOUTME: Prints generated programs, Standard/Hypertrophy forecasts, and training-max trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # 21-week Standard program from a 100 kg training max
//! rtf-cli program --weight 100
//!
//! # Hypertrophy program without deloads, rounded to 1 kg, as JSON
//! rtf-cli program --weight 100 --style HYPERTROPHY --rounding 1 --no-deloads --json
//!
//! # Six-week side-by-side preview of both styles
//! rtf-cli forecast --weight 120 --preview
//!
//! # Training-max trend after two operator updates
//! rtf-cli trend --weight 100 --tm-update 9=105 --tm-update 16=110 --exercise-id squat
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rtf_program_engine::config::{OutputFormat, ShellConfig};
use rtf_program_engine::logging::LoggingConfig;
use rtf_program_engine::models::{ProgramConfig, ProgramStyle};
use tracing::debug;

use commands::trend::TmUpdate;

#[derive(Parser)]
#[command(
    name = "rtf-cli",
    about = "Reps-to-Failure program engine CLI",
    long_about = "Generate RTF strength programs, compare Standard and Hypertrophy forecasts, and inspect training-max trends."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a full program for one style
    Program {
        #[command(flatten)]
        program: ProgramArgs,

        /// Program style (STANDARD or HYPERTROPHY)
        #[arg(long)]
        style: Option<ProgramStyle>,

        /// Print wire-format JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare Standard and Hypertrophy targets week by week
    Forecast {
        #[command(flatten)]
        program: ProgramArgs,

        /// Only the first six weeks
        #[arg(long)]
        preview: bool,

        /// Print wire-format JSON
        #[arg(long)]
        json: bool,
    },

    /// Show training-max adjustments for a program
    Trend {
        #[command(flatten)]
        program: ProgramArgs,

        /// Program style (STANDARD or HYPERTROPHY)
        #[arg(long)]
        style: Option<ProgramStyle>,

        /// Operator training-max update as WEEK=TM (repeatable)
        #[arg(long = "tm-update", value_name = "WEEK=TM")]
        tm_updates: Vec<TmUpdate>,

        /// Exercise the trend belongs to
        #[arg(long)]
        exercise_id: Option<String>,

        /// Print wire-format JSON
        #[arg(long)]
        json: bool,
    },
}

/// Flags shared by every subcommand
#[derive(clap::Args)]
struct ProgramArgs {
    /// Starting training max in kilograms
    #[arg(long)]
    weight: f64,

    /// Plate rounding increment in kilograms (0.5, 1, 2.5 or 5)
    #[arg(long)]
    rounding: Option<f64>,

    /// Include deload weeks (21-week program), overriding RTF_DEFAULT_WITH_DELOADS
    #[arg(long, overrides_with = "no_deloads")]
    deloads: bool,

    /// Omit deload weeks (18-week program)
    #[arg(long, overrides_with = "deloads")]
    no_deloads: bool,
}

impl ProgramArgs {
    /// Last of `--deloads` / `--no-deloads` wins, else the shell default
    fn with_deloads(&self, default: bool) -> bool {
        if self.deloads {
            true
        } else if self.no_deloads {
            false
        } else {
            default
        }
    }

    fn to_config(&self, style: Option<ProgramStyle>, shell: &ShellConfig) -> ProgramConfig {
        ProgramConfig::new(self.weight, style.unwrap_or(shell.default_style))
            .with_deloads(self.with_deloads(shell.default_with_deloads))
            .with_rounding(self.rounding.unwrap_or(shell.default_rounding_kg))
    }
}

fn output_format(json: bool, shell: &ShellConfig) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        shell.output_format
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let shell = ShellConfig::from_env()?;
    debug!(?shell, "Loaded CLI defaults");

    match cli.command {
        Command::Program {
            program,
            style,
            json,
        } => commands::program::run(
            &program.to_config(style, &shell),
            output_format(json, &shell),
        ),
        Command::Forecast {
            program,
            preview,
            json,
        } => commands::forecast::run(
            &program.to_config(None, &shell),
            preview,
            output_format(json, &shell),
        ),
        Command::Trend {
            program,
            style,
            tm_updates,
            exercise_id,
            json,
        } => commands::trend::run(
            &program.to_config(style, &shell),
            tm_updates,
            exercise_id.as_deref(),
            output_format(json, &shell),
        ),
    }
}
