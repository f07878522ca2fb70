//! Repository for the `sessions` table.
//!
//! Sessions carry the refresh-token hash and the session-scoped UI
//! preferences (page size, theme, notification flags).

use clinboard_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::session::{Session, SessionPreferences, UpdateSessionPreferences};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, refresh_token_hash, expires_at, revoked_at, \
     page_size, theme, notifications, email_notifications, created_at, updated_at";

/// Provides session persistence.
pub struct SessionRepo;

impl SessionRepo {
    /// Create a session for a fresh login.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        refresh_token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (user_id, refresh_token_hash, expires_at) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(user_id)
            .bind(refresh_token_hash)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find an active (unrevoked, unexpired) session by refresh-token hash.
    pub async fn find_by_refresh_token_hash(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions \
             WHERE refresh_token_hash = $1 AND revoked_at IS NULL AND expires_at > NOW()"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Find a session by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE id = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Revoke a session (logout or refresh-token rotation).
    pub async fn revoke(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE sessions SET revoked_at = NOW() WHERE id = $1 AND revoked_at IS NULL")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Session preferences
    // -----------------------------------------------------------------------

    /// Read the UI preferences stored on a session.
    pub async fn preferences(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SessionPreferences>, sqlx::Error> {
        sqlx::query_as::<_, SessionPreferences>(
            "SELECT page_size, theme, notifications, email_notifications \
             FROM sessions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Update the theme/notification preferences on a session. Absent
    /// fields are unchanged. Returns the stored preferences.
    pub async fn update_preferences(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSessionPreferences,
    ) -> Result<Option<SessionPreferences>, sqlx::Error> {
        sqlx::query_as::<_, SessionPreferences>(
            "UPDATE sessions SET \
                 theme = COALESCE($2, theme), \
                 notifications = COALESCE($3, notifications), \
                 email_notifications = COALESCE($4, email_notifications), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING page_size, theme, notifications, email_notifications",
        )
        .bind(id)
        .bind(&input.theme)
        .bind(input.notifications)
        .bind(input.email_notifications)
        .fetch_optional(pool)
        .await
    }

    /// Persist the effective rows-per-page value on a session, so a
    /// clamped fallback carries over to later requests.
    pub async fn set_page_size(
        pool: &PgPool,
        id: DbId,
        page_size: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE sessions SET page_size = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(page_size)
            .execute(pool)
            .await?;
        Ok(())
    }
}
