//! The placement filter model.
//!
//! Every analytics and listing endpoint accepts the same optional
//! parameter set; each per-dimension analytics page excludes its own
//! dimension from the filter (a page grouping by department must not be
//! pre-filtered by department). The filter is a plain data struct --
//! translation to SQL lives in the repository layer.

use chrono::NaiveDate;
use serde::Deserialize;

/// A categorical grouping dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Department,
    Specialty,
    Shift,
    Status,
}

impl Dimension {
    /// The placements column this dimension groups by.
    pub fn column(&self) -> &'static str {
        match self {
            Dimension::Department => "department",
            Dimension::Specialty => "specialty",
            Dimension::Shift => "shift",
            Dimension::Status => "status",
        }
    }

    /// Shift breakdowns sort by code ascending; all others by count
    /// descending. The asymmetry is intentional and load-bearing for the
    /// charts, so it lives here rather than in each call site.
    pub fn order_by_count(&self) -> bool {
        !matches!(self, Dimension::Shift)
    }
}

/// Conjunctive filter over placement records.
///
/// Absent or empty parameters impose no constraint. Dates are inclusive
/// bounds. Categorical values are matched exactly; unknown values simply
/// match nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlacementFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub department: Option<String>,
    pub specialty: Option<String>,
    pub shift: Option<String>,
    pub status: Option<String>,
}

impl PlacementFilter {
    /// Drop empty/whitespace-only categorical values so they impose no
    /// constraint (HTML form submissions send empty strings for unset
    /// selects).
    pub fn normalized(mut self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value.and_then(|v| {
                let trimmed = v.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
        }
        self.department = clean(self.department);
        self.specialty = clean(self.specialty);
        self.shift = clean(self.shift);
        self.status = clean(self.status);
        self
    }

    /// A copy of this filter with one dimension cleared.
    pub fn without(&self, dimension: Dimension) -> Self {
        let mut copy = self.clone();
        match dimension {
            Dimension::Department => copy.department = None,
            Dimension::Specialty => copy.specialty = None,
            Dimension::Shift => copy.shift = None,
            Dimension::Status => copy.status = None,
        }
        copy
    }

    /// A copy with the date bounds cleared (the timeline page shows dates,
    /// so the date-range inputs are excluded from its own filter form).
    pub fn without_dates(&self) -> Self {
        let mut copy = self.clone();
        copy.start_date = None;
        copy.end_date = None;
        copy
    }
}
