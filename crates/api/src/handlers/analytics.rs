//! Handlers for the `/analytics` resource.
//!
//! All endpoints accept the common filter parameter set. The combined
//! `data` endpoint applies every filter at once; each per-dimension
//! endpoint excludes its own dimension (a department breakdown must not
//! be pre-filtered by department), and the timeline excludes the date
//! bounds.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use clinboard_core::analytics::{dense_timeline, label_or_unknown, TimelinePoint};
use clinboard_core::filter::{Dimension, PlacementFilter};
use clinboard_core::placement::{EmploymentStatus, Shift};
use clinboard_db::models::analytics::{DashboardSummary, DimensionCount};
use clinboard_db::repositories::PlacementRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::FilterParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One group of a dimension breakdown, NULLs already relabelled.
#[derive(Debug, Serialize)]
pub struct DimensionStat {
    pub label: String,
    pub count: i64,
}

/// Response body for `GET /analytics/data`.
#[derive(Debug, Serialize)]
pub struct AnalyticsData {
    pub department_stats: Vec<DimensionStat>,
    pub specialty_stats: Vec<DimensionStat>,
    pub shift_stats: Vec<DimensionStat>,
    pub status_stats: Vec<DimensionStat>,
    pub time_series: Vec<TimelinePoint>,
    pub total_count: i64,
}

/// Response body for the per-dimension endpoints.
#[derive(Debug, Serialize)]
pub struct DimensionBreakdown {
    pub stats: Vec<DimensionStat>,
    pub total_count: i64,
}

/// Response body for `GET /analytics/timeline`.
#[derive(Debug, Serialize)]
pub struct TimelineBreakdown {
    pub time_series: Vec<TimelinePoint>,
    pub total_count: i64,
}

/// A fixed choice (stored code + display label) for the filter form.
#[derive(Debug, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

/// Response body for `GET /analytics/filter-options`.
#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub departments: Vec<String>,
    pub specialties: Vec<String>,
    pub shifts: Vec<Choice>,
    pub statuses: Vec<Choice>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/analytics/data
///
/// Combined dashboard payload: all four breakdowns, the 30-day timeline,
/// and the total, with every filter applied simultaneously.
pub async fn data(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(params): Query<FilterParams>,
) -> AppResult<Json<AnalyticsData>> {
    let filter = params.into_filter()?;

    let department_stats = breakdown(&state, &filter, Dimension::Department).await?;
    let specialty_stats = breakdown(&state, &filter, Dimension::Specialty).await?;
    let shift_stats = breakdown(&state, &filter, Dimension::Shift).await?;
    let status_stats = breakdown(&state, &filter, Dimension::Status).await?;
    let time_series = timeline_series(&state, &filter).await?;
    let total_count = PlacementRepo::count(&state.pool, &filter).await?;

    Ok(Json(AnalyticsData {
        department_stats,
        specialty_stats,
        shift_stats,
        status_stats,
        time_series,
        total_count,
    }))
}

/// GET /api/v1/analytics/departments
pub async fn departments(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(params): Query<FilterParams>,
) -> AppResult<Json<DimensionBreakdown>> {
    dimension_page(&state, params, Dimension::Department).await
}

/// GET /api/v1/analytics/specialties
pub async fn specialties(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(params): Query<FilterParams>,
) -> AppResult<Json<DimensionBreakdown>> {
    dimension_page(&state, params, Dimension::Specialty).await
}

/// GET /api/v1/analytics/shifts
pub async fn shifts(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(params): Query<FilterParams>,
) -> AppResult<Json<DimensionBreakdown>> {
    dimension_page(&state, params, Dimension::Shift).await
}

/// GET /api/v1/analytics/statuses
pub async fn statuses(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(params): Query<FilterParams>,
) -> AppResult<Json<DimensionBreakdown>> {
    dimension_page(&state, params, Dimension::Status).await
}

/// GET /api/v1/analytics/timeline
///
/// The timeline page excludes the date-range inputs from its own filter;
/// categorical filters still apply.
pub async fn timeline(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(params): Query<FilterParams>,
) -> AppResult<Json<TimelineBreakdown>> {
    let filter = params.into_filter()?.without_dates();
    let time_series = timeline_series(&state, &filter).await?;
    let total_count = PlacementRepo::count(&state.pool, &filter).await?;
    Ok(Json(TimelineBreakdown {
        time_series,
        total_count,
    }))
}

/// GET /api/v1/analytics/summary
///
/// Headline numbers for the dashboard home over the filtered set.
pub async fn summary(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(params): Query<FilterParams>,
) -> AppResult<Json<DashboardSummary>> {
    let filter = params.into_filter()?;
    let summary = PlacementRepo::summary(&state.pool, &filter).await?;
    Ok(Json(summary))
}

/// GET /api/v1/analytics/filter-options
///
/// Values for the filter form: distinct stored departments/specialties,
/// plus the fixed shift and status choice lists.
pub async fn filter_options(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> AppResult<Json<FilterOptions>> {
    let departments =
        PlacementRepo::distinct_values(&state.pool, Dimension::Department).await?;
    let specialties =
        PlacementRepo::distinct_values(&state.pool, Dimension::Specialty).await?;

    let shifts = Shift::ALL
        .iter()
        .map(|s| Choice {
            value: s.code(),
            label: s.label(),
        })
        .collect();
    let statuses = EmploymentStatus::ALL
        .iter()
        .map(|s| Choice {
            value: s.as_str(),
            label: s.as_str(),
        })
        .collect();

    Ok(Json(FilterOptions {
        departments,
        specialties,
        shifts,
        statuses,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Breakdown + total for one per-dimension page, with the page's own
/// dimension cleared from the filter.
async fn dimension_page(
    state: &AppState,
    params: FilterParams,
    dimension: Dimension,
) -> AppResult<Json<DimensionBreakdown>> {
    let filter = params.into_filter()?.without(dimension);
    let stats = breakdown(state, &filter, dimension).await?;
    let total_count = PlacementRepo::count(&state.pool, &filter).await?;
    Ok(Json(DimensionBreakdown { stats, total_count }))
}

/// Run one grouped count and relabel NULL groups to "Unknown".
async fn breakdown(
    state: &AppState,
    filter: &PlacementFilter,
    dimension: Dimension,
) -> AppResult<Vec<DimensionStat>> {
    let counts = PlacementRepo::count_by_dimension(&state.pool, filter, dimension).await?;
    Ok(counts.into_iter().map(to_stat).collect())
}

fn to_stat(count: DimensionCount) -> DimensionStat {
    DimensionStat {
        label: label_or_unknown(count.value),
        count: count.count,
    }
}

/// Dense 30-day series ending yesterday for the given filter.
async fn timeline_series(
    state: &AppState,
    filter: &PlacementFilter,
) -> AppResult<Vec<TimelinePoint>> {
    let today = Utc::now().date_naive();
    let window = clinboard_core::analytics::timeline_window(today);
    let (start, end) = (window[0], *window.last().unwrap_or(&today));

    let sparse = PlacementRepo::counts_by_date(&state.pool, filter, start, end).await?;
    let counts: HashMap<_, _> = sparse.into_iter().map(|dc| (dc.date, dc.count)).collect();
    Ok(dense_timeline(today, &counts))
}
