//! Repository for the `users` table.

use clinboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, first_name, last_name, password_hash, \
     is_superuser, is_active, last_login_at, created_at, updated_at";

/// Provides CRUD operations for user accounts.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user. `password_hash` must already be hashed.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUser,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users \
                 (username, email, first_name, last_name, password_hash, is_superuser, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(password_hash)
            .bind(input.is_superuser)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (login path).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// List users, newest first, with optional free-text search across
    /// username, email, and names.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>, sqlx::Error> {
        let search_clause = if search.is_some() {
            " AND (username ILIKE $3 OR email ILIKE $3 \
             OR first_name ILIKE $3 OR last_name ILIKE $3)"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM users \
             WHERE TRUE{search_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );

        let mut q = sqlx::query_as::<_, User>(&query).bind(limit).bind(offset);
        if let Some(s) = search {
            q = q.bind(super::contains_pattern(s));
        }
        q.fetch_all(pool).await
    }

    /// Count users matching the optional search (for pagination).
    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let search_clause = if search.is_some() {
            " AND (username ILIKE $1 OR email ILIKE $1 \
             OR first_name ILIKE $1 OR last_name ILIKE $1)"
        } else {
            ""
        };
        let query = format!("SELECT COUNT(*) AS count FROM users WHERE TRUE{search_clause}");

        let mut q = sqlx::query_as::<_, (i64,)>(&query);
        if let Some(s) = search {
            q = q.bind(super::contains_pattern(s));
        }
        Ok(q.fetch_one(pool).await?.0)
    }

    /// Update a user. Only non-`None` fields are applied; the password
    /// hash (if provided) must already be hashed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
        password_hash: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET \
                 username = COALESCE($2, username), \
                 email = COALESCE($3, email), \
                 first_name = COALESCE($4, first_name), \
                 last_name = COALESCE($5, last_name), \
                 password_hash = COALESCE($6, password_hash), \
                 is_superuser = COALESCE($7, is_superuser), \
                 is_active = COALESCE($8, is_active), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(password_hash)
            .bind(input.is_superuser)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Stamp a successful login.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
