//! Route definitions for the `/analytics` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Routes mounted at `/analytics`. All read-only.
///
/// ```text
/// GET /data            -> combined breakdowns + timeline + total
/// GET /departments     -> department breakdown (own dimension excluded)
/// GET /specialties     -> specialty breakdown
/// GET /shifts          -> shift breakdown (ordered by code)
/// GET /statuses        -> status breakdown
/// GET /timeline        -> 30-day dense series (date bounds excluded)
/// GET /summary         -> headline counts
/// GET /filter-options  -> filter form choices
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/data", get(analytics::data))
        .route("/departments", get(analytics::departments))
        .route("/specialties", get(analytics::specialties))
        .route("/shifts", get(analytics::shifts))
        .route("/statuses", get(analytics::statuses))
        .route("/timeline", get(analytics::timeline))
        .route("/summary", get(analytics::summary))
        .route("/filter-options", get(analytics::filter_options))
}
