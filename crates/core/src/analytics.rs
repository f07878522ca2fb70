//! Presentation helpers for the analytics endpoints.
//!
//! Grouping and counting happen in SQL; these helpers own the two rules
//! that are easy to get subtly wrong: NULL dimension values are relabelled
//! to `"Unknown"` only at the presentation boundary (a stored literal
//! "Unknown" string and a true NULL stay distinct through grouping), and
//! the timeline is a dense 30-day series with zero-count days emitted.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Number of days in the fixed timeline window.
pub const TIMELINE_DAYS: i64 = 30;

/// Display label for a nullable dimension value.
pub fn label_or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| "Unknown".to_string())
}

/// One point of the timeline series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePoint {
    /// ISO calendar date.
    pub date: NaiveDate,
    pub count: i64,
}

/// The 30 calendar days of the timeline window for a given `today`,
/// oldest first: `today - 30` through `today - 1` (today excluded).
pub fn timeline_window(today: NaiveDate) -> Vec<NaiveDate> {
    let start = today - Duration::days(TIMELINE_DAYS);
    (0..TIMELINE_DAYS).map(|i| start + Duration::days(i)).collect()
}

/// Expand sparse per-day counts into the dense 30-entry series.
///
/// Days absent from `counts` are emitted with count 0; dates outside the
/// window are dropped.
pub fn dense_timeline(today: NaiveDate, counts: &HashMap<NaiveDate, i64>) -> Vec<TimelinePoint> {
    timeline_window(today)
        .into_iter()
        .map(|date| TimelinePoint {
            date,
            count: counts.get(&date).copied().unwrap_or(0),
        })
        .collect()
}
