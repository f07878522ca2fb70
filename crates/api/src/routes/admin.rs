//! Route definitions for superuser-gated administration.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/admin`. Every handler takes [`RequireSuperuser`],
/// so authorization is enforced at the extractor level.
///
/// [`RequireSuperuser`]: crate::middleware::rbac::RequireSuperuser
///
/// ```text
/// GET    /users       -> list (search + pagination)
/// POST   /users       -> create
/// GET    /users/{id}  -> get
/// PUT    /users/{id}  -> update
/// DELETE /users/{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(user::list).post(user::create))
        .route(
            "/users/{id}",
            get(user::get_by_id).put(user::update).delete(user::delete),
        )
}
