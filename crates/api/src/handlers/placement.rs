//! Handlers for the `/placements` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use clinboard_core::error::CoreError;
use clinboard_core::pagination::{clamp_page, clamp_page_size, page_offset, DEFAULT_PAGE_SIZE};
use clinboard_core::types::DbId;
use clinboard_db::models::placement::{CreatePlacement, Placement};
use clinboard_db::repositories::{PlacementRepo, SessionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{FilterParams, ListParams};
use crate::response::{PageResponse, Pagination};
use crate::state::AppState;

/// GET /api/v1/placements
///
/// Filtered, searchable, paginated listing. The effective rows-per-page
/// value persists on the session: an explicit `rows` is clamped to the
/// allow-list and stored; requests without one reuse the stored value.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(filter_params): Query<FilterParams>,
    Query(list_params): Query<ListParams>,
) -> AppResult<Json<PageResponse<Placement>>> {
    let filter = filter_params.into_filter()?;
    let rows =
        resolve_page_size(&state, auth_user.session_id, list_params.rows).await?;
    let page = clamp_page(list_params.page);
    let search = list_params.search_term();

    let items = PlacementRepo::list(
        &state.pool,
        &filter,
        search,
        rows,
        page_offset(page, rows),
    )
    .await?;
    let total = PlacementRepo::count_listed(&state.pool, &filter, search).await?;

    Ok(Json(PageResponse {
        data: items,
        pagination: Pagination { page, rows, total },
    }))
}

/// POST /api/v1/placements
pub async fn create(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Json(input): Json<CreatePlacement>,
) -> AppResult<(StatusCode, Json<Placement>)> {
    input.validate_form()?;
    let placement = PlacementRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(placement)))
}

/// GET /api/v1/placements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Placement>> {
    let placement = PlacementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Placement",
            id,
        }))?;
    Ok(Json(placement))
}

/// PUT /api/v1/placements/{id}
///
/// Full replace: the edit form submits every field, so absent fields
/// become NULL.
pub async fn update(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreatePlacement>,
) -> AppResult<Json<Placement>> {
    input.validate_form()?;
    let placement = PlacementRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Placement",
            id,
        }))?;
    Ok(Json(placement))
}

/// DELETE /api/v1/placements/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PlacementRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Placement",
            id,
        }))
    }
}

/// Resolve the effective rows-per-page for a list request.
///
/// An explicit request value is clamped to the allow-list and persisted on
/// the session (so a fallback to the default also sticks). Without one,
/// the session's stored value applies.
pub(crate) async fn resolve_page_size(
    state: &AppState,
    session_id: DbId,
    requested: Option<i64>,
) -> AppResult<i64> {
    if let Some(requested) = requested {
        let effective = clamp_page_size(Some(requested));
        SessionRepo::set_page_size(&state.pool, session_id, effective).await?;
        return Ok(effective);
    }

    let stored = SessionRepo::preferences(&state.pool, session_id)
        .await?
        .map(|prefs| prefs.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    Ok(clamp_page_size(Some(stored)))
}
