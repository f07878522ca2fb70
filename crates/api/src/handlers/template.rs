//! Handler for the blank spreadsheet template download.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use clinboard_core::import::EXPECTED_COLUMNS;
use rust_xlsxwriter::Workbook;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;

/// The xlsx MIME type.
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Filename offered in the Content-Disposition header.
const TEMPLATE_FILENAME: &str = "placement_import_template.xlsx";

/// Column width cap, in characters.
const MAX_COLUMN_WIDTH: usize = 30;

/// Two illustrative rows showing the expected cell formats.
const EXAMPLE_ROWS: [[&str; 9]; 2] = [
    [
        "01/15/2025",
        "AM",
        "John Doe",
        "12345",
        "Internal Medicine",
        "Cardiology",
        "Full Time",
        "East Wing",
        "204",
    ],
    [
        "01/15/2025",
        "PM",
        "Jane Smith",
        "67890",
        "Pediatrics",
        "Neonatology",
        "Part Time",
        "West Wing",
        "110",
    ],
];

/// GET /api/v1/placements/template
///
/// Generate the nine-column blank import template with two example rows.
/// Built fresh on every request; no database read.
pub async fn template(_auth_user: AuthUser) -> AppResult<Response> {
    let buffer = build_template_workbook()
        .map_err(|e| AppError::InternalError(format!("Template generation error: {e}")))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{TEMPLATE_FILENAME}\""),
            ),
        ],
        buffer,
    )
        .into_response())
}

/// Build the template workbook, returning the serialized bytes.
fn build_template_workbook() -> Result<Vec<u8>, rust_xlsxwriter::XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Placements")?;

    for (col, header) in EXPECTED_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (row, cells) in EXAMPLE_ROWS.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col as u16, *cell)?;
        }
    }

    // Width: longest cell in the column plus breathing room, capped.
    for (col, header) in EXPECTED_COLUMNS.iter().enumerate() {
        let longest = EXAMPLE_ROWS
            .iter()
            .map(|row| row[col].len())
            .max()
            .unwrap_or(0)
            .max(header.len());
        let width = (longest + 2).min(MAX_COLUMN_WIDTH);
        worksheet.set_column_width(col as u16, width as f64)?;
    }

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_bytes_are_a_zip_container() {
        let bytes = build_template_workbook().expect("template builds");
        // xlsx files are zip archives: PK magic.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn example_rows_match_the_column_count() {
        for row in EXAMPLE_ROWS {
            assert_eq!(row.len(), EXPECTED_COLUMNS.len());
        }
    }
}
