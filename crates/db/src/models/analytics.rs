//! Row types for analytics aggregation queries.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// One group of a dimension breakdown. `value` stays `None` for true
/// NULLs; the "Unknown" relabel happens at the API layer.
#[derive(Debug, Clone, FromRow)]
pub struct DimensionCount {
    pub value: Option<String>,
    pub count: i64,
}

/// Sparse per-day count within the timeline window.
#[derive(Debug, Clone, FromRow)]
pub struct DateCount {
    pub date: NaiveDate,
    pub count: i64,
}

/// Headline numbers for the dashboard home.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_placements: i64,
    pub full_time_placements: i64,
    pub part_time_placements: i64,
    pub unique_physicians: i64,
}
