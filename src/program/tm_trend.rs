// ABOUTME: Training-max trend tracker deriving TM adjustment events from a week sequence
// ABOUTME: Caller-owned append-only buffer with idempotent snapshot summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training-max trend
//!
//! Adjustments are recorded only where the underlying training max changes
//! between consecutive training weeks. The per-week intensity ramp never
//! produces an adjustment because the working weight is not the training max.

use rtf_core::models::{ProgramStyle, TmAdjustment, TmTrendSnapshot, WeekPlan};
use tracing::debug;

/// Smallest training-max difference treated as a change
const TM_CHANGE_TOLERANCE: f64 = 1e-9;

/// Append-only ordered list of training-max adjustments
///
/// Owned by the caller. Pushing is O(1) amortized and a snapshot is a single
/// O(n) scan, which is plenty for a program of at most 21 weeks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TmTrendBuffer {
    baseline_tm: Option<f64>,
    adjustments: Vec<TmAdjustment>,
}

impl TmTrendBuffer {
    /// Empty buffer with no known training max
    #[must_use]
    pub const fn new() -> Self {
        Self {
            baseline_tm: None,
            adjustments: Vec::new(),
        }
    }

    /// Empty buffer whose training max is known before any adjustment
    #[must_use]
    pub const fn with_baseline(training_max: f64) -> Self {
        Self {
            baseline_tm: Some(training_max),
            adjustments: Vec::new(),
        }
    }

    /// Append an adjustment
    pub fn push(&mut self, adjustment: TmAdjustment) {
        self.adjustments.push(adjustment);
    }

    /// Number of adjustments
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjustments.len()
    }

    /// Whether no adjustment has been pushed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjustments.is_empty()
    }

    /// Adjustments in push order
    #[must_use]
    pub fn adjustments(&self) -> &[TmAdjustment] {
        &self.adjustments
    }

    /// Last adjustment's new TM, else the baseline
    #[must_use]
    pub fn latest_tm(&self) -> Option<f64> {
        self.adjustments
            .last()
            .map(|adj| adj.new_tm)
            .or(self.baseline_tm)
    }

    /// Summarize the buffer
    ///
    /// Calling this repeatedly without pushes yields equal snapshots.
    #[must_use]
    pub fn snapshot(&self, style: ProgramStyle, exercise_id: Option<&str>) -> TmTrendSnapshot {
        let latest_tm = self.latest_tm();
        TmTrendSnapshot {
            style,
            exercise_id: exercise_id.map(str::to_owned),
            adjustments: self.adjustments.clone(),
            latest_tm,
            total_percent_change: total_percent_change(&self.adjustments, latest_tm),
        }
    }
}

impl Extend<TmAdjustment> for TmTrendBuffer {
    fn extend<I: IntoIterator<Item = TmAdjustment>>(&mut self, iter: I) {
        self.adjustments.extend(iter);
    }
}

/// Derives training-max trends from generated or logged schedules
pub struct TmTrendTracker;

impl TmTrendTracker {
    /// Adjustment events for a schedule, in week order
    ///
    /// Deload weeks and training weeks without a training max are skipped. An
    /// empty schedule yields no adjustments.
    #[must_use]
    pub fn derive_adjustments(schedule: &[WeekPlan], style: ProgramStyle) -> Vec<TmAdjustment> {
        let mut training: Vec<(u32, f64)> = schedule
            .iter()
            .filter_map(|week| week.training_max().map(|tm| (week.week, tm)))
            .collect();
        training.sort_by_key(|&(week, _)| week);

        let adjustments: Vec<TmAdjustment> = training
            .windows(2)
            .filter_map(|pair| {
                let (_, previous_tm) = pair[0];
                let (week, new_tm) = pair[1];
                ((new_tm - previous_tm).abs() > TM_CHANGE_TOLERANCE && previous_tm > 0.0)
                    .then(|| TmAdjustment::new(week, previous_tm, new_tm))
            })
            .collect();

        debug!(
            %style,
            training_weeks = training.len(),
            adjustments = adjustments.len(),
            "Derived training max adjustments"
        );
        adjustments
    }

    /// Buffer seeded with the first training week's TM and every adjustment
    #[must_use]
    pub fn track(schedule: &[WeekPlan], style: ProgramStyle) -> TmTrendBuffer {
        let baseline = schedule
            .iter()
            .filter_map(|week| week.training_max().map(|tm| (week.week, tm)))
            .min_by_key(|&(week, _)| week)
            .map(|(_, tm)| tm);

        let mut buffer = baseline.map_or_else(TmTrendBuffer::new, TmTrendBuffer::with_baseline);
        buffer.extend(Self::derive_adjustments(schedule, style));
        buffer
    }
}

/// Summarize a list of adjustments without a buffer
///
/// `latestTm` is the last adjustment's new TM, absent for an empty list.
#[must_use]
pub fn snapshot(
    adjustments: &[TmAdjustment],
    style: ProgramStyle,
    exercise_id: Option<&str>,
) -> TmTrendSnapshot {
    let mut buffer = TmTrendBuffer::new();
    buffer.extend(adjustments.iter().copied());
    buffer.snapshot(style, exercise_id)
}

fn total_percent_change(adjustments: &[TmAdjustment], latest_tm: Option<f64>) -> Option<f64> {
    let first = adjustments.first()?.previous_tm;
    let latest = latest_tm?;
    (first > 0.0).then_some((latest - first) / first * 100.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_tm_prefers_adjustments() {
        let mut buffer = TmTrendBuffer::with_baseline(100.0);
        assert_eq!(buffer.latest_tm(), Some(100.0));

        buffer.push(TmAdjustment::new(5, 100.0, 105.0));
        assert_eq!(buffer.latest_tm(), Some(105.0));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_empty_buffer_has_no_latest() {
        let buffer = TmTrendBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.latest_tm(), None);
        let snap = buffer.snapshot(ProgramStyle::Standard, None);
        assert!(snap.adjustments.is_empty());
        assert_eq!(snap.total_percent_change, None);
    }

    #[test]
    fn test_total_percent_change_spans_all_adjustments() {
        let adjustments = [
            TmAdjustment::new(5, 100.0, 105.0),
            TmAdjustment::new(12, 105.0, 110.0),
        ];
        let snap = snapshot(&adjustments, ProgramStyle::Hypertrophy, Some("squat"));
        assert_eq!(snap.latest_tm, Some(110.0));
        assert_eq!(snap.exercise_id.as_deref(), Some("squat"));
        let total = snap.total_percent_change.unwrap();
        assert!((total - 10.0).abs() < 1e-9);
    }
}
