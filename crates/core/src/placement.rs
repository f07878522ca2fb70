//! Shift and employment-status enumerations.
//!
//! Both are stored as short text codes in the database and on the wire;
//! the enums exist for validation and display labelling. Placement rows
//! keep the raw `Option<String>` because imported data may carry values
//! outside these sets and the data layer accepts them as-is.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Clinic shift, stored as a short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    /// "AM" -- Morning.
    Am,
    /// "MD" -- Midday.
    Md,
    /// "PM" -- Evening.
    Pm,
    /// "CLOSED" -- clinic closed.
    Closed,
}

impl Shift {
    /// All shifts in their canonical (code-ascending) order.
    pub const ALL: [Shift; 4] = [Shift::Am, Shift::Closed, Shift::Md, Shift::Pm];

    /// The stored wire code.
    pub fn code(&self) -> &'static str {
        match self {
            Shift::Am => "AM",
            Shift::Md => "MD",
            Shift::Pm => "PM",
            Shift::Closed => "CLOSED",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Shift::Am => "Morning",
            Shift::Md => "Midday",
            Shift::Pm => "Evening",
            Shift::Closed => "Closed",
        }
    }

    /// Parse a stored code, case-insensitively. Surrounding whitespace is ignored.
    pub fn parse_code(code: &str) -> Option<Shift> {
        match code.trim().to_uppercase().as_str() {
            "AM" => Some(Shift::Am),
            "MD" => Some(Shift::Md),
            "PM" => Some(Shift::Pm),
            "CLOSED" => Some(Shift::Closed),
            _ => None,
        }
    }
}

/// Employment status, stored verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    FullTime,
    PartTime,
}

impl EmploymentStatus {
    pub const ALL: [EmploymentStatus; 2] = [EmploymentStatus::FullTime, EmploymentStatus::PartTime];

    /// The stored wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentStatus::FullTime => "Full Time",
            EmploymentStatus::PartTime => "Part Time",
        }
    }

    /// Parse a stored value, case-insensitively.
    pub fn parse(value: &str) -> Option<EmploymentStatus> {
        match value.trim().to_lowercase().as_str() {
            "full time" => Some(EmploymentStatus::FullTime),
            "part time" => Some(EmploymentStatus::PartTime),
            _ => None,
        }
    }
}

/// Validate an optional shift code on the create/update form path.
///
/// `None` and empty strings are fine (every placement field is nullable);
/// a non-empty value must be a known code.
pub fn validate_shift_code(code: Option<&str>) -> Result<(), CoreError> {
    match code {
        Some(c) if !c.trim().is_empty() && Shift::parse_code(c).is_none() => Err(
            CoreError::Validation(format!("Unknown shift code: {}", c.trim())),
        ),
        _ => Ok(()),
    }
}

/// Validate an optional employment status on the create/update form path.
pub fn validate_status(value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() && EmploymentStatus::parse(v).is_none() => Err(
            CoreError::Validation(format!("Unknown status: {}", v.trim())),
        ),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_codes_round_trip() {
        for shift in Shift::ALL {
            assert_eq!(Shift::parse_code(shift.code()), Some(shift));
        }
    }

    #[test]
    fn shift_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(Shift::parse_code(" am "), Some(Shift::Am));
        assert_eq!(Shift::parse_code("closed"), Some(Shift::Closed));
        assert_eq!(Shift::parse_code("night"), None);
    }

    #[test]
    fn status_parse() {
        assert_eq!(
            EmploymentStatus::parse("full time"),
            Some(EmploymentStatus::FullTime)
        );
        assert_eq!(
            EmploymentStatus::parse("Part Time"),
            Some(EmploymentStatus::PartTime)
        );
        assert_eq!(EmploymentStatus::parse("Contractor"), None);
    }

    #[test]
    fn validate_allows_absent_and_empty() {
        assert!(validate_shift_code(None).is_ok());
        assert!(validate_shift_code(Some("  ")).is_ok());
        assert!(validate_shift_code(Some("AM")).is_ok());
        assert!(validate_shift_code(Some("XX")).is_err());
        assert!(validate_status(Some("Full Time")).is_ok());
        assert!(validate_status(Some("Intern")).is_err());
    }
}
