//! Domain-level error type shared across the workspace.

use crate::types::DbId;

/// Errors produced by domain logic, mapped to HTTP statuses in the API crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with existing state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
