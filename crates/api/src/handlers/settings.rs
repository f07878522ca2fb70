//! Handlers for session-scoped UI settings.
//!
//! Theme and notification flags live on the session row, never on the
//! user: a new login starts from the defaults.

use axum::extract::State;
use axum::Json;
use clinboard_core::error::CoreError;
use clinboard_db::models::session::{SessionPreferences, UpdateSessionPreferences};
use clinboard_db::repositories::SessionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Accepted theme values.
const THEMES: [&str; 3] = ["light", "dark", "auto"];

/// GET /api/v1/user/settings
pub async fn get(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<SessionPreferences>> {
    let prefs = SessionRepo::preferences(&state.pool, auth_user.session_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Session no longer exists".into())))?;
    Ok(Json(prefs))
}

/// PUT /api/v1/user/settings
///
/// Absent fields are unchanged; returns the stored settings.
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<UpdateSessionPreferences>,
) -> AppResult<Json<SessionPreferences>> {
    if let Some(theme) = input.theme.as_deref() {
        if !THEMES.contains(&theme) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown theme: {theme} (expected one of: light, dark, auto)"
            ))));
        }
    }

    let prefs = SessionRepo::update_preferences(&state.pool, auth_user.session_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Session no longer exists".into())))?;
    Ok(Json(prefs))
}
