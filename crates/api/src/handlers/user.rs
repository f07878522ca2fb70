//! Handlers for the superuser-gated `/admin/users` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use clinboard_core::error::CoreError;
use clinboard_core::pagination::{clamp_page, page_offset};
use clinboard_core::types::DbId;
use clinboard_db::models::user::{CreateUser, PublicUser, UpdateUser};
use clinboard_db::repositories::UserRepo;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::handlers::placement::resolve_page_size;
use crate::middleware::rbac::RequireSuperuser;
use crate::query::ListParams;
use crate::response::{PageResponse, Pagination};
use crate::state::AppState;

/// GET /api/v1/admin/users
///
/// Searchable, paginated listing; the same page-size allow-list and
/// session persistence rules as the placement list.
pub async fn list(
    State(state): State<AppState>,
    RequireSuperuser(admin): RequireSuperuser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PageResponse<PublicUser>>> {
    let rows = resolve_page_size(&state, admin.session_id, params.rows).await?;
    let page = clamp_page(params.page);
    let search = params.search_term();

    let users = UserRepo::list(&state.pool, search, rows, page_offset(page, rows)).await?;
    let total = UserRepo::count(&state.pool, search).await?;

    Ok(Json(PageResponse {
        data: users.into_iter().map(PublicUser::from).collect(),
        pagination: Pagination { page, rows, total },
    }))
}

/// POST /api/v1/admin/users
pub async fn create(
    State(state): State<AppState>,
    RequireSuperuser(_admin): RequireSuperuser,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<PublicUser>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(&state.pool, &input, &password_hash).await?;
    Ok((StatusCode::CREATED, Json(PublicUser::from(user))))
}

/// GET /api/v1/admin/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireSuperuser(_admin): RequireSuperuser,
    Path(id): Path<DbId>,
) -> AppResult<Json<PublicUser>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(PublicUser::from(user)))
}

/// PUT /api/v1/admin/users/{id}
///
/// Absent fields are unchanged. A provided password is re-hashed.
pub async fn update(
    State(state): State<AppState>,
    RequireSuperuser(_admin): RequireSuperuser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<PublicUser>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let password_hash = match input.password.as_deref() {
        Some(password) => Some(
            hash_password(password)
                .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?,
        ),
        None => None,
    };

    let user = UserRepo::update(&state.pool, id, &input, password_hash.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(PublicUser::from(user)))
}

/// DELETE /api/v1/admin/users/{id}
///
/// Self-deletion is rejected.
pub async fn delete(
    State(state): State<AppState>,
    RequireSuperuser(admin): RequireSuperuser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if id == admin.user_id {
        return Err(AppError::Core(CoreError::Validation(
            "Cannot delete your own account".into(),
        )));
    }

    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}
