//! Placement model: one record of a physician assigned to a
//! shift/location on a date.

use chrono::NaiveDate;
use clinboard_core::import::PlacementDraft;
use clinboard_core::placement::{validate_shift_code, validate_status};
use clinboard_core::error::CoreError;
use clinboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `placements` table.
///
/// Every domain field is nullable -- there is no required-field invariant
/// at the data layer.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Placement {
    pub id: DbId,
    pub date: Option<NaiveDate>,
    pub shift: Option<String>,
    pub physician_name: Option<String>,
    pub physician_id: Option<i64>,
    pub department: Option<String>,
    pub specialty: Option<String>,
    pub status: Option<String>,
    pub area: Option<String>,
    pub room_number: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a placement via the form path.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreatePlacement {
    pub date: Option<NaiveDate>,
    pub shift: Option<String>,
    #[validate(length(max = 255))]
    pub physician_name: Option<String>,
    pub physician_id: Option<i64>,
    #[validate(length(max = 255))]
    pub department: Option<String>,
    #[validate(length(max = 255))]
    pub specialty: Option<String>,
    pub status: Option<String>,
    #[validate(length(max = 255))]
    pub area: Option<String>,
    #[validate(length(max = 50))]
    pub room_number: Option<String>,
}

impl CreatePlacement {
    /// Form-path validation: field lengths plus shift/status code checks.
    ///
    /// The import path deliberately does not call this -- imported rows
    /// accept values outside the enumerations.
    pub fn validate_form(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        validate_shift_code(self.shift.as_deref())?;
        validate_status(self.status.as_deref())?;
        Ok(())
    }
}

impl From<PlacementDraft> for CreatePlacement {
    fn from(draft: PlacementDraft) -> Self {
        CreatePlacement {
            date: draft.date,
            shift: draft.shift,
            physician_name: draft.physician_name,
            physician_id: draft.physician_id,
            department: draft.department,
            specialty: draft.specialty,
            status: draft.status,
            area: draft.area,
            room_number: draft.room_number,
        }
    }
}

// Updates reuse [`CreatePlacement`]: the edit form submits every field,
// so PUT is a full replace (absent fields become NULL, mirroring the form).
