//! User account model.

use clinboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `users` table.
///
/// `password_hash` is deliberately not serialized.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_superuser: bool,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public view of a user, safe to return from the API.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PublicUser {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_superuser: bool,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        PublicUser {
            id: u.id,
            username: u.username,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            is_superuser: u.is_superuser,
            is_active: u.is_active,
            last_login_at: u.last_login_at,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// DTO for creating a user (admin screen). The password arrives in plain
/// text and is hashed in the handler before reaching the repository.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// DTO for updating a user. Absent fields are left unchanged; an absent
/// password keeps the current one.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 150))]
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(length(min = 8))]
    pub password: Option<String>,
    pub is_superuser: Option<bool>,
    pub is_active: Option<bool>,
}
