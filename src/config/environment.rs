// ABOUTME: Environment-based defaults for the RTF CLI with override and validation
// ABOUTME: Reads RTF_* variables into a ShellConfig and rejects invalid values by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt;
use std::str::FromStr;

use rtf_core::models::{ProgramStyle, DEFAULT_ROUNDING_INCREMENT_KG};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::program::validate_increment;

/// Default program style
pub const ENV_DEFAULT_STYLE: &str = "RTF_DEFAULT_STYLE";
/// Default rounding increment in kilograms
pub const ENV_DEFAULT_ROUNDING_KG: &str = "RTF_DEFAULT_ROUNDING_KG";
/// Whether deload weeks are included by default
pub const ENV_DEFAULT_WITH_DELOADS: &str = "RTF_DEFAULT_WITH_DELOADS";
/// Output format for CLI results
pub const ENV_OUTPUT_FORMAT: &str = "RTF_OUTPUT_FORMAT";

/// Configuration error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Variable present but not parseable
    #[error("Parse error: invalid {name}: {value:?}")]
    Parse {
        /// Variable name
        name: &'static str,
        /// Raw value
        value: String,
    },

    /// Variable parsed but not acceptable
    #[error("Value out of range: {name}: {reason}")]
    ValueOutOfRange {
        /// Variable name
        name: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// How the CLI prints results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Wire-format JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Json => "json",
        })
    }
}

/// Defaults for CLI flags that were not given
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    /// Style used when `--style` is absent
    pub default_style: ProgramStyle,
    /// Increment used when `--rounding` is absent
    pub default_rounding_kg: f64,
    /// Whether deloads are included unless `--no-deloads` is given
    pub default_with_deloads: bool,
    /// Output format unless `--json` is given
    pub output_format: OutputFormat,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_style: ProgramStyle::Standard,
            default_rounding_kg: DEFAULT_ROUNDING_INCREMENT_KG,
            default_with_deloads: true,
            output_format: OutputFormat::Table,
        }
    }
}

impl ShellConfig {
    /// Load defaults, applying any `RTF_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the first variable that fails to parse or
    /// validate.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        apply_env_var(ENV_DEFAULT_STYLE, &mut config.default_style)?;
        apply_env_var(ENV_DEFAULT_ROUNDING_KG, &mut config.default_rounding_kg)?;
        apply_env_var(ENV_DEFAULT_WITH_DELOADS, &mut config.default_with_deloads)?;
        apply_env_var(ENV_OUTPUT_FORMAT, &mut config.output_format)?;
        config.validate()
    }

    /// Check loaded values and canonicalize the rounding increment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for an unsupported increment.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.default_rounding_kg = validate_increment(self.default_rounding_kg).map_err(|e| {
            ConfigError::ValueOutOfRange {
                name: ENV_DEFAULT_ROUNDING_KG,
                reason: e.to_string(),
            }
        })?;
        Ok(self)
    }
}

/// Overwrite `target` with the parsed variable when it is set
fn apply_env_var<T: FromStr>(name: &'static str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(value) = env::var(name) {
        *target = value.trim().parse().map_err(|_| ConfigError::Parse {
            name,
            value: value.clone(),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" table ".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_validate_rejects_odd_increment() {
        let config = ShellConfig {
            default_rounding_kg: 3.0,
            ..ShellConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValueOutOfRange {
                name: ENV_DEFAULT_ROUNDING_KG,
                ..
            }
        ));
    }
}
