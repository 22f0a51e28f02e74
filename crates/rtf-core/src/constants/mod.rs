// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Program shape, style ramps, rounding increments, and forecast format values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by the component that owns them. Everything here is
//! fixed by the RTF program definition and is not configurable at runtime.

/// Program length and deload cadence
pub mod program {
    /// Number of training (non-deload) weeks in every program
    pub const TRAINING_WEEKS: u32 = 18;

    /// Total weeks when deloads are included
    pub const WEEKS_WITH_DELOADS: u32 = 21;

    /// A deload follows every block of this many training weeks
    pub const DELOAD_EVERY: u32 = 6;

    /// 1-based week positions of the deload weeks when deloads are included
    pub const DELOAD_WEEKS: [u32; 3] = [7, 14, 21];

    /// Intensity step between consecutive training weeks, in percent points
    pub const INTENSITY_STEP_PERCENT: u32 = 1;
}

/// Per-style ramp and volume constants
pub mod styles {
    /// Standard: starting intensity in percent of training max
    pub const STANDARD_BASE_PERCENT: u32 = 70;
    /// Standard: reps on every fixed set
    pub const STANDARD_FIXED_REPS: u32 = 5;
    /// Standard: rep target on the final AMRAP set
    pub const STANDARD_AMRAP_TARGET: u32 = 8;
    /// Standard: total sets including the AMRAP set
    pub const STANDARD_SETS: u32 = 5;

    /// Hypertrophy: starting intensity in percent of training max
    pub const HYPERTROPHY_BASE_PERCENT: u32 = 65;
    /// Hypertrophy: reps on every fixed set
    pub const HYPERTROPHY_FIXED_REPS: u32 = 8;
    /// Hypertrophy: rep target on the final AMRAP set
    pub const HYPERTROPHY_AMRAP_TARGET: u32 = 12;
    /// Hypertrophy: total sets including the AMRAP set
    pub const HYPERTROPHY_SETS: u32 = 4;
}

/// Load rounding
pub mod rounding {
    /// Plate increments (kg) a program may round working weights to
    pub const SUPPORTED_INCREMENTS_KG: [f64; 4] = [0.5, 1.0, 2.5, 5.0];

    /// Tolerance used when matching a requested increment to a supported one
    pub const INCREMENT_TOLERANCE: f64 = 1e-9;
}

/// Forecast projection
pub mod forecast {
    /// Weeks shown by the preview projection
    pub const PREVIEW_WEEKS: usize = 6;

    /// Wire format version of `ForecastResponse`
    pub const FORMAT_VERSION: u32 = 1;
}
