//! Route definitions for the authenticated user's own resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{profile, settings};
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// GET  /profile           -> own profile
/// PUT  /profile           -> update own profile
/// POST /profile/password  -> change own password
/// GET  /settings          -> session preferences
/// PUT  /settings          -> update session preferences
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile::get).put(profile::update))
        .route("/profile/password", post(profile::change_password))
        .route("/settings", get(settings::get).put(settings::update))
}
