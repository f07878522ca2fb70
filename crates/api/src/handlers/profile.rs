//! Handlers for the authenticated user's own profile.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use clinboard_core::error::CoreError;
use clinboard_db::models::user::{PublicUser, UpdateUser};
use clinboard_db::repositories::UserRepo;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PUT /user/profile`. Deliberately narrower than the
/// admin update DTO: no password, no superuser/active flags.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfile {
    #[validate(length(min = 1, max = 150))]
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request body for `POST /user/profile/password`.
#[derive(Debug, Deserialize)]
pub struct ChangePassword {
    pub current_password: String,
    pub new_password: String,
}

/// GET /api/v1/user/profile
pub async fn get(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<PublicUser>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;
    Ok(Json(PublicUser::from(user)))
}

/// PUT /api/v1/user/profile
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<PublicUser>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let update = UpdateUser {
        username: input.username,
        email: input.email,
        first_name: input.first_name,
        last_name: input.last_name,
        ..Default::default()
    };

    let user = UserRepo::update(&state.pool, auth_user.user_id, &update, None)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;
    Ok(Json(PublicUser::from(user)))
}

/// POST /api/v1/user/profile/password
///
/// Requires the current password; the new one must meet the minimum
/// strength rule. Returns 204 No Content.
pub async fn change_password(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<ChangePassword>,
) -> AppResult<StatusCode> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let current_valid = verify_password(&input.current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Current password is incorrect".into(),
        )));
    }

    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    UserRepo::update(
        &state.pool,
        auth_user.user_id,
        &UpdateUser::default(),
        Some(&password_hash),
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}
