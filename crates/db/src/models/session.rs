//! Login session model.
//!
//! Sessions double as the preference store: page size, theme, and
//! notification flags live on the session row and vanish with it.

use clinboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub page_size: i64,
    pub theme: String,
    pub notifications: bool,
    pub email_notifications: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Session-scoped UI preferences.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SessionPreferences {
    pub page_size: i64,
    pub theme: String,
    pub notifications: bool,
    pub email_notifications: bool,
}

/// DTO for updating session preferences. Absent fields are unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSessionPreferences {
    pub theme: Option<String>,
    pub notifications: Option<bool>,
    pub email_notifications: Option<bool>,
}
