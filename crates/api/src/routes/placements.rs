//! Route definitions for the `/placements` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{import, placement, template};
use crate::state::AppState;

/// Routes mounted at `/placements`.
///
/// ```text
/// GET    /          -> list (filter + search + pagination)
/// POST   /          -> create
/// POST   /import    -> spreadsheet bulk import (multipart)
/// GET    /template  -> blank template download
/// GET    /{id}      -> get
/// PUT    /{id}      -> update (full replace)
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(placement::list).post(placement::create))
        .route("/import", post(import::import))
        .route("/template", get(template::template))
        .route(
            "/{id}",
            get(placement::get_by_id)
                .put(placement::update)
                .delete(placement::delete),
        )
}
