// ABOUTME: Program style enumeration and its constant lookup table
// ABOUTME: Maps STANDARD/HYPERTROPHY to base intensity, reps, AMRAP target, and set count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::styles::{
    HYPERTROPHY_AMRAP_TARGET, HYPERTROPHY_BASE_PERCENT, HYPERTROPHY_FIXED_REPS, HYPERTROPHY_SETS,
    STANDARD_AMRAP_TARGET, STANDARD_BASE_PERCENT, STANDARD_FIXED_REPS, STANDARD_SETS,
};
use crate::errors::ValidationError;

/// Rep/set/intensity variant applied uniformly across a generated program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgramStyle {
    /// 5 sets of 5 with an AMRAP target of 8, ramping from 70%
    Standard,
    /// 4 sets of 8 with an AMRAP target of 12, ramping from 65%
    Hypertrophy,
}

impl ProgramStyle {
    /// Every style, in display order
    pub const ALL: [Self; 2] = [Self::Standard, Self::Hypertrophy];

    /// Wire name of the style
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Hypertrophy => "HYPERTROPHY",
        }
    }

    /// Human-readable name of the style
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Hypertrophy => "Hypertrophy",
        }
    }

    /// The other variant, used when deriving a comparison counterpart
    #[must_use]
    pub const fn counterpart(self) -> Self {
        match self {
            Self::Standard => Self::Hypertrophy,
            Self::Hypertrophy => Self::Standard,
        }
    }

    /// Constant profile for this style
    #[must_use]
    pub const fn profile(self) -> StyleProfile {
        StyleProfile::for_style(self)
    }
}

impl fmt::Display for ProgramStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgramStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STANDARD" => Ok(Self::Standard),
            "HYPERTROPHY" => Ok(Self::Hypertrophy),
            _ => Err(ValidationError::UnknownStyle {
                value: s.to_owned(),
            }),
        }
    }
}

/// Constants a style contributes to every training week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    /// Intensity of the first training week, in percent of training max
    pub base_percent: u32,
    /// Reps on each fixed set
    pub fixed_reps: u32,
    /// Rep target on the final AMRAP set
    pub amrap_target: u32,
    /// Total sets, the last of which is the AMRAP set
    pub sets: u32,
}

const STANDARD_PROFILE: StyleProfile = StyleProfile {
    base_percent: STANDARD_BASE_PERCENT,
    fixed_reps: STANDARD_FIXED_REPS,
    amrap_target: STANDARD_AMRAP_TARGET,
    sets: STANDARD_SETS,
};

const HYPERTROPHY_PROFILE: StyleProfile = StyleProfile {
    base_percent: HYPERTROPHY_BASE_PERCENT,
    fixed_reps: HYPERTROPHY_FIXED_REPS,
    amrap_target: HYPERTROPHY_AMRAP_TARGET,
    sets: HYPERTROPHY_SETS,
};

impl StyleProfile {
    /// Lookup table entry for a style
    #[must_use]
    pub const fn for_style(style: ProgramStyle) -> Self {
        match style {
            ProgramStyle::Standard => STANDARD_PROFILE,
            ProgramStyle::Hypertrophy => HYPERTROPHY_PROFILE,
        }
    }

    /// 1-based index of the AMRAP set (always the last set)
    #[must_use]
    pub const fn amrap_set_index(&self) -> u32 {
        self.sets
    }

    /// Intensity percent for a 1-based training-week index
    #[must_use]
    pub const fn percent_for(&self, training_index: u32) -> u32 {
        self.base_percent
            + training_index.saturating_sub(1) * crate::constants::program::INTENSITY_STEP_PERCENT
    }

    /// Intensity as a fraction of training max for a 1-based training-week index
    #[must_use]
    pub fn intensity_for(&self, training_index: u32) -> f64 {
        f64::from(self.percent_for(training_index)) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parsing() {
        assert_eq!("STANDARD".parse::<ProgramStyle>(), Ok(ProgramStyle::Standard));
        assert_eq!(
            " hypertrophy ".parse::<ProgramStyle>(),
            Ok(ProgramStyle::Hypertrophy)
        );
        assert!(matches!(
            "POWERLIFTING".parse::<ProgramStyle>(),
            Err(ValidationError::UnknownStyle { .. })
        ));
    }

    #[test]
    fn test_profile_ramp() {
        let standard = ProgramStyle::Standard.profile();
        assert_eq!(standard.percent_for(1), 70);
        assert_eq!(standard.percent_for(18), 87);
        assert!((standard.intensity_for(3) - 0.72).abs() < 1e-12);

        let hypertrophy = ProgramStyle::Hypertrophy.profile();
        assert_eq!(hypertrophy.percent_for(1), 65);
        assert_eq!(hypertrophy.amrap_set_index(), 4);
    }
}
