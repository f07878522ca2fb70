pub mod admin;
pub mod analytics;
pub mod auth;
pub mod health;
pub mod placements;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
///
/// /placements                      list, create
/// /placements/import               spreadsheet bulk import (multipart)
/// /placements/template             blank template download
/// /placements/{id}                 get, update, delete
///
/// /analytics/data                  combined breakdowns + timeline
/// /analytics/departments           department breakdown
/// /analytics/specialties           specialty breakdown
/// /analytics/shifts                shift breakdown (ordered by code)
/// /analytics/statuses              status breakdown
/// /analytics/timeline              30-day dense series
/// /analytics/summary               headline counts
/// /analytics/filter-options        filter form choices
///
/// /admin/users                     list, create (superuser only)
/// /admin/users/{id}                get, update, delete
///
/// /user/profile                    get, update own profile
/// /user/profile/password           change own password (POST)
/// /user/settings                   get, update session preferences
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout).
        .nest("/auth", auth::router())
        // Placement CRUD, import, and template download.
        .nest("/placements", placements::router())
        // Aggregate analytics.
        .nest("/analytics", analytics::router())
        // Superuser-gated user management.
        .nest("/admin", admin::router())
        // Own profile and session-scoped settings.
        .nest("/user", user::router())
}
