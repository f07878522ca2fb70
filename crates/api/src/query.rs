//! Query-string parameter types shared by the listing and analytics
//! endpoints.
//!
//! Date params arrive as strings so that empty form submissions
//! (`?start_date=`) mean "no constraint" while genuinely malformed dates
//! produce a 400 validation error. Both the dashboard form path and raw
//! API callers go through this one struct, so the two can never drift.

use chrono::NaiveDate;
use clinboard_core::error::CoreError;
use clinboard_core::filter::PlacementFilter;
use serde::Deserialize;

/// Raw filter parameters as they appear in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub department: Option<String>,
    pub specialty: Option<String>,
    pub shift: Option<String>,
    pub status: Option<String>,
}

impl FilterParams {
    /// Parse into the typed filter. Empty date strings impose no
    /// constraint; anything else must be an ISO `YYYY-MM-DD` date.
    pub fn into_filter(self) -> Result<PlacementFilter, CoreError> {
        Ok(PlacementFilter {
            start_date: parse_date_param("start_date", self.start_date)?,
            end_date: parse_date_param("end_date", self.end_date)?,
            department: self.department,
            specialty: self.specialty,
            shift: self.shift,
            status: self.status,
        }
        .normalized())
    }
}

fn parse_date_param(name: &str, raw: Option<String>) -> Result<Option<NaiveDate>, CoreError> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                CoreError::Validation(format!(
                    "Invalid {name}: '{}' is not a YYYY-MM-DD date",
                    s.trim()
                ))
            }),
    }
}

/// Pagination and search parameters for list endpoints.
///
/// `rows` is clamped to the allow-list by the handler; the effective
/// value is persisted on the caller's session.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub rows: Option<i64>,
    pub search: Option<String>,
}

impl ListParams {
    /// The search term, or `None` when absent/blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
