//! Pure row-mapping logic for the spreadsheet import pipeline.
//!
//! The API handler owns file parsing and database writes; everything
//! decision-shaped lives here as pure functions over already-extracted
//! text cells, so the skip/error rules are unit-testable without a
//! workbook or a database:
//!
//! - Header normalisation against a fixed synonym table.
//! - Per-row mapping to a tagged [`RowOutcome`].
//! - The date-parsing fallback chain and physician-id coercion.

use chrono::NaiveDate;
use serde::Serialize;

/// The nine expected template columns, in template order.
pub const EXPECTED_COLUMNS: [&str; 9] = [
    "Date",
    "Shift",
    "Physician Name",
    "ID",
    "Department",
    "Speciality",
    "Status",
    "Area",
    "Room Number",
];

/// Map a raw header cell to its canonical column name.
///
/// Matching is case-insensitive on the trimmed header. Headers outside
/// the synonym table pass through unchanged.
pub fn canonical_header(raw: &str) -> String {
    match raw.trim().to_lowercase().as_str() {
        "date" => "Date".to_string(),
        "shift" => "Shift".to_string(),
        "physician name" | "physician_name" => "Physician Name".to_string(),
        "id" | "physician_id" => "ID".to_string(),
        "department" => "Department".to_string(),
        "speciality" | "specialty" => "Speciality".to_string(),
        "status" => "Status".to_string(),
        "area" => "Area".to_string(),
        "room number" | "room_number" => "Room Number".to_string(),
        _ => raw.to_string(),
    }
}

/// Positions of the expected columns within a header row.
///
/// A column absent from the file is `None`; its cells read as empty.
#[derive(Debug, Default)]
pub struct ColumnIndex {
    pub date: Option<usize>,
    pub shift: Option<usize>,
    pub physician_name: Option<usize>,
    pub physician_id: Option<usize>,
    pub department: Option<usize>,
    pub specialty: Option<usize>,
    pub status: Option<usize>,
    pub area: Option<usize>,
    pub room_number: Option<usize>,
}

impl ColumnIndex {
    /// Resolve column positions from a header row.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut index = ColumnIndex::default();
        for (pos, header) in headers.iter().enumerate() {
            // First occurrence wins for duplicated headers.
            match canonical_header(header.as_ref()).as_str() {
                "Date" => index.date.get_or_insert(pos),
                "Shift" => index.shift.get_or_insert(pos),
                "Physician Name" => index.physician_name.get_or_insert(pos),
                "ID" => index.physician_id.get_or_insert(pos),
                "Department" => index.department.get_or_insert(pos),
                "Speciality" => index.specialty.get_or_insert(pos),
                "Status" => index.status.get_or_insert(pos),
                "Area" => index.area.get_or_insert(pos),
                "Room Number" => index.room_number.get_or_insert(pos),
                _ => continue,
            };
        }
        index
    }

    /// Extract the expected cells from one data row.
    pub fn extract(&self, cells: &[Option<String>]) -> RawRow {
        fn pick(cells: &[Option<String>], pos: Option<usize>) -> Option<String> {
            pos.and_then(|p| cells.get(p).cloned().flatten())
        }
        RawRow {
            date: pick(cells, self.date),
            shift: pick(cells, self.shift),
            physician_name: pick(cells, self.physician_name),
            physician_id: pick(cells, self.physician_id),
            department: pick(cells, self.department),
            specialty: pick(cells, self.specialty),
            status: pick(cells, self.status),
            area: pick(cells, self.area),
            room_number: pick(cells, self.room_number),
        }
    }
}

/// One data row with all cells read as text.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    pub date: Option<String>,
    pub shift: Option<String>,
    pub physician_name: Option<String>,
    pub physician_id: Option<String>,
    pub department: Option<String>,
    pub specialty: Option<String>,
    pub status: Option<String>,
    pub area: Option<String>,
    pub room_number: Option<String>,
}

/// A fully coerced placement ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementDraft {
    pub date: Option<NaiveDate>,
    pub shift: Option<String>,
    pub physician_name: Option<String>,
    pub physician_id: Option<i64>,
    pub department: Option<String>,
    pub specialty: Option<String>,
    pub status: Option<String>,
    pub area: Option<String>,
    pub room_number: Option<String>,
}

/// Why a row was skipped without being treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Date, shift, and physician name are all empty.
    AllKeyFieldsEmpty,
}

/// The outcome of mapping one raw row.
#[derive(Debug)]
pub enum RowOutcome {
    /// The row maps to a new placement.
    Draft(PlacementDraft),
    /// The row is skipped (counted as skipped, not errored).
    Skipped(SkipReason),
}

/// Running counts for an import batch.
///
/// An errored row also counts as skipped, so `skipped` is the total number
/// of rows that did not produce a record.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct ImportSummary {
    pub created: u64,
    pub skipped: u64,
    pub errored: u64,
}

impl ImportSummary {
    pub fn record_created(&mut self) {
        self.created += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn record_error(&mut self) {
        self.errored += 1;
        self.skipped += 1;
    }
}

/// Map one raw row to a tagged outcome.
///
/// A row is attempted when any of date, shift, or physician name is
/// present; only when all three are empty is it skipped, regardless of
/// other populated columns. Field coercion never fails: unparseable dates
/// and non-numeric IDs become NULL rather than rejecting the row.
pub fn map_row(row: &RawRow) -> RowOutcome {
    let date_raw = non_empty(row.date.as_deref());
    let shift = non_empty(row.shift.as_deref());
    let physician_name = non_empty(row.physician_name.as_deref());

    if date_raw.is_none() && shift.is_none() && physician_name.is_none() {
        return RowOutcome::Skipped(SkipReason::AllKeyFieldsEmpty);
    }

    RowOutcome::Draft(PlacementDraft {
        date: date_raw.as_deref().and_then(parse_date),
        shift,
        physician_name,
        physician_id: row.physician_id.as_deref().and_then(parse_physician_id),
        department: non_empty(row.department.as_deref()),
        specialty: non_empty(row.specialty.as_deref()),
        status: non_empty(row.status.as_deref()),
        area: non_empty(row.area.as_deref()),
        room_number: non_empty(row.room_number.as_deref()),
    })
}

/// Trimmed string, or `None` when empty/absent.
fn non_empty(value: Option<&str>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Explicit formats tried first, in order. Month/day precedes day/month:
/// the source spreadsheets are US-formatted, so "03/04/2025" reads as
/// March 4th.
const DATE_FORMATS: [&str; 4] = ["%m/%d/%Y", "%m-%d-%Y", "%Y-%m-%d", "%d/%m/%Y"];

/// Lenient fallbacks: two-digit years and datetime-bearing cells.
const FALLBACK_DATE_FORMATS: [&str; 3] = ["%m/%d/%y", "%Y/%m/%d", "%d.%m.%Y"];
const FALLBACK_DATETIME_FORMATS: [&str; 3] =
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];

/// Parse a date cell through the fallback chain. Total failure yields
/// `None` -- the row is still imported with a NULL date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    // Cells exported from spreadsheets often carry a time component;
    // the explicit formats only look at the first token.
    let token = raw.split_whitespace().next()?;

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(token, format) {
            return Some(date);
        }
    }

    for format in FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(token, format) {
            return Some(date);
        }
    }

    let trimmed = raw.trim();
    for format in FALLBACK_DATETIME_FORMATS {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }

    None
}

/// Parse a physician-ID cell as an integer.
///
/// Tolerates the `12345.0` float rendering spreadsheet tools produce for
/// numeric cells. Anything else non-numeric yields `None`; it is never a
/// row error.
pub fn parse_physician_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(id) = trimmed.parse::<i64>() {
        return Some(id);
    }
    // Integral float rendering, e.g. "12345.0".
    if let Ok(float) = trimmed.parse::<f64>() {
        if float.fract() == 0.0 && float.abs() < (i64::MAX as f64) {
            return Some(float as i64);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, shift: &str, name: &str) -> RawRow {
        RawRow {
            date: Some(date.to_string()),
            shift: Some(shift.to_string()),
            physician_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    // -- header normalisation --------------------------------------------

    #[test]
    fn headers_map_through_synonym_table() {
        assert_eq!(canonical_header("  SPECIALTY "), "Speciality");
        assert_eq!(canonical_header("speciality"), "Speciality");
        assert_eq!(canonical_header("physician_id"), "ID");
        assert_eq!(canonical_header("Id"), "ID");
        assert_eq!(canonical_header("room_number"), "Room Number");
        assert_eq!(canonical_header("Room Number"), "Room Number");
        // Unmapped headers pass through unchanged.
        assert_eq!(canonical_header("Notes"), "Notes");
    }

    #[test]
    fn column_index_resolves_reordered_headers() {
        let headers = ["Department", "date", "PHYSICIAN NAME", "id"];
        let index = ColumnIndex::from_headers(&headers);
        assert_eq!(index.department, Some(0));
        assert_eq!(index.date, Some(1));
        assert_eq!(index.physician_name, Some(2));
        assert_eq!(index.physician_id, Some(3));
        // Absent columns read as empty.
        assert_eq!(index.specialty, None);
        let raw = index.extract(&[
            Some("IM".to_string()),
            Some("01/15/2025".to_string()),
            Some("John Doe".to_string()),
            None,
        ]);
        assert_eq!(raw.department.as_deref(), Some("IM"));
        assert_eq!(raw.specialty, None);
        assert_eq!(raw.physician_id, None);
    }

    // -- skip rule --------------------------------------------------------

    #[test]
    fn row_with_all_key_fields_empty_is_skipped_even_when_others_populated() {
        let raw = RawRow {
            department: Some("Cardiology".to_string()),
            room_number: Some("B-12".to_string()),
            ..Default::default()
        };
        match map_row(&raw) {
            RowOutcome::Skipped(SkipReason::AllKeyFieldsEmpty) => {}
            other => panic!("expected skip, got {other:?}"),
        }
    }

    #[test]
    fn any_single_key_field_is_enough_to_attempt_the_row() {
        for raw in [
            row("01/15/2025", "", ""),
            row("", "AM", ""),
            row("", "", "Jane Smith"),
        ] {
            assert!(matches!(map_row(&raw), RowOutcome::Draft(_)));
        }
    }

    #[test]
    fn whitespace_only_key_fields_count_as_empty() {
        let raw = row("  ", " ", "\t");
        assert!(matches!(map_row(&raw), RowOutcome::Skipped(_)));
    }

    // -- field coercion ---------------------------------------------------

    #[test]
    fn non_numeric_id_stores_null_not_error() {
        let mut raw = row("01/15/2025", "AM", "John Doe");
        raw.physician_id = Some("N/A".to_string());
        match map_row(&raw) {
            RowOutcome::Draft(draft) => assert_eq!(draft.physician_id, None),
            other => panic!("expected draft, got {other:?}"),
        }
    }

    #[test]
    fn physician_id_coercion() {
        assert_eq!(parse_physician_id("12345"), Some(12345));
        assert_eq!(parse_physician_id(" 67890 "), Some(67890));
        assert_eq!(parse_physician_id("12345.0"), Some(12345));
        assert_eq!(parse_physician_id(""), None);
        assert_eq!(parse_physician_id("abc"), None);
        assert_eq!(parse_physician_id("12.5"), None);
    }

    #[test]
    fn fields_are_trimmed() {
        let mut raw = row("01/15/2025", " AM ", "  John Doe ");
        raw.department = Some("  IM ".to_string());
        match map_row(&raw) {
            RowOutcome::Draft(draft) => {
                assert_eq!(draft.shift.as_deref(), Some("AM"));
                assert_eq!(draft.physician_name.as_deref(), Some("John Doe"));
                assert_eq!(draft.department.as_deref(), Some("IM"));
            }
            other => panic!("expected draft, got {other:?}"),
        }
    }

    // -- date chain -------------------------------------------------------

    #[test]
    fn month_day_precedence_wins_on_ambiguous_dates() {
        // "03/04/2025" must read as March 4th, not April 3rd.
        assert_eq!(parse_date("03/04/2025"), NaiveDate::from_ymd_opt(2025, 3, 4));
    }

    #[test]
    fn day_month_applies_when_month_day_cannot() {
        // Month slot out of range, so the d/m/Y fallback takes it.
        assert_eq!(parse_date("25/12/2025"), NaiveDate::from_ymd_opt(2025, 12, 25));
    }

    #[test]
    fn iso_and_datetime_cells_parse() {
        assert_eq!(parse_date("2025-11-30"), NaiveDate::from_ymd_opt(2025, 11, 30));
        assert_eq!(
            parse_date("2025-11-30 08:15:00"),
            NaiveDate::from_ymd_opt(2025, 11, 30)
        );
        assert_eq!(parse_date("1/5/2025"), NaiveDate::from_ymd_opt(2025, 1, 5));
    }

    #[test]
    fn unparseable_date_becomes_null_without_rejecting_the_row() {
        assert_eq!(parse_date("next tuesday"), None);
        let raw = row("next tuesday", "AM", "John Doe");
        match map_row(&raw) {
            RowOutcome::Draft(draft) => assert_eq!(draft.date, None),
            other => panic!("expected draft, got {other:?}"),
        }
    }

    // -- summary counting --------------------------------------------------

    #[test]
    fn errored_rows_also_count_as_skipped() {
        let mut summary = ImportSummary::default();
        summary.record_created();
        summary.record_created();
        summary.record_skipped();
        summary.record_error();
        assert_eq!(summary.created, 2);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.errored, 1);
    }
}
