//! Handler for the spreadsheet bulk-import endpoint.
//!
//! The workbook is parsed entirely in memory: every cell reads as text,
//! the first row is the header, and the pure row-mapping rules live in
//! `clinboard_core::import`. Row-level failures are tallied and never
//! abort the batch; only an unreadable workbook fails the request.

use std::io::Cursor;

use axum::extract::{Multipart, State};
use axum::Json;
use calamine::{Data, Reader};
use clinboard_core::import::{map_row, ColumnIndex, ImportSummary, RowOutcome};
use clinboard_db::models::placement::CreatePlacement;
use clinboard_db::repositories::PlacementRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for `POST /placements/import`.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    /// Rows removed by replace mode (0 when appending).
    pub deleted_existing: u64,
    pub created: u64,
    pub skipped: u64,
    pub errored: u64,
}

/// POST /api/v1/placements/import
///
/// Multipart form: a `file` field carrying the workbook and an optional
/// `replace` boolean field. Replace mode clears the table before any row
/// is examined, so a workbook full of bad rows still ends with an empty
/// table plus whatever imported cleanly.
pub async fn import(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    mut multipart: Multipart,
) -> AppResult<Json<ImportResponse>> {
    let mut file_bytes: Option<Vec<u8>> = None;
    let mut replace = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        match field.name() {
            Some("file") => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_bytes = Some(data.to_vec());
            }
            Some("replace") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                replace = matches!(value.trim(), "true" | "1" | "on");
            }
            _ => continue,
        }
    }

    let file_bytes = file_bytes
        .ok_or_else(|| AppError::BadRequest("Missing 'file' field in upload".to_string()))?;

    let deleted_existing = if replace {
        PlacementRepo::delete_all(&state.pool).await?
    } else {
        0
    };

    let rows = read_rows(&file_bytes)?;
    let mut summary = ImportSummary::default();

    if let Some((header, data_rows)) = rows.split_first() {
        let index = ColumnIndex::from_headers(header);

        for (row_number, cells) in data_rows.iter().enumerate() {
            let cells: Vec<Option<String>> = cells
                .iter()
                .map(|c| if c.is_empty() { None } else { Some(c.clone()) })
                .collect();
            let raw = index.extract(&cells);

            match map_row(&raw) {
                RowOutcome::Skipped(_) => summary.record_skipped(),
                RowOutcome::Draft(draft) => {
                    let input = CreatePlacement::from(draft);
                    match PlacementRepo::create(&state.pool, &input).await {
                        Ok(_) => summary.record_created(),
                        Err(e) => {
                            // Header is row 1; data starts at row 2.
                            tracing::warn!(
                                row = row_number + 2,
                                error = %e,
                                "Import row failed, continuing"
                            );
                            summary.record_error();
                        }
                    }
                }
            }
        }
    }

    tracing::info!(
        created = summary.created,
        skipped = summary.skipped,
        errored = summary.errored,
        deleted_existing,
        replace,
        "Spreadsheet import finished"
    );

    Ok(Json(ImportResponse {
        deleted_existing,
        created: summary.created,
        skipped: summary.skipped,
        errored: summary.errored,
    }))
}

/// Read the first sheet of the uploaded workbook, every cell as text.
///
/// Accepts .xlsx and .xls (calamine auto-detects the container format).
fn read_rows(bytes: &[u8]) -> Result<Vec<Vec<String>>, AppError> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook = calamine::open_workbook_auto_from_rs(cursor)
        .map_err(|e| AppError::BadRequest(format!("Unreadable workbook: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::BadRequest("Workbook has no sheets".to_string()))?
        .map_err(|e| AppError::BadRequest(format!("Unreadable sheet: {e}")))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect())
}

/// Render one cell as trimmed text, the way the mapping rules expect.
///
/// Numeric cells render without a trailing `.0` when integral; date cells
/// render as ISO dates so the parsing chain picks them up.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|ndt| ndt.date().format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Error(e) => {
            tracing::warn!(error = ?e, "Error cell in workbook read as empty");
            String::new()
        }
    }
}
