//! Authorization extractors.
//!
//! The access model is two-tiered: any authenticated user can work with
//! placements and analytics; user management requires a superuser. A
//! failed check answers with 403 JSON, never a redirect.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use clinboard_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the superuser flag. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireSuperuser(user): RequireSuperuser) -> AppResult<Json<()>> {
///     // user is guaranteed to be a superuser here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireSuperuser(pub AuthUser);

impl FromRequestParts<AppState> for RequireSuperuser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_superuser {
            return Err(AppError::Core(CoreError::Forbidden(
                "Superuser access required".into(),
            )));
        }
        Ok(RequireSuperuser(user))
    }
}
