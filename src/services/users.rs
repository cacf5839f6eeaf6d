//! User persistence — signup insert, credential lookup, profile updates.

use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("email or username already registered")]
    AlreadyRegistered,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Fields required to create an account.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// Account row with fields needed for profile responses.
#[derive(Debug, Clone, serde::Serialize)]
pub struct UserRecord {
    #[serde(skip)]
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

fn record_from_row(row: &sqlx::postgres::PgRow) -> UserRecord {
    UserRecord {
        id: row.get("id"),
        username: row.get("username"),
        name: row.get("name"),
        email: row.get("email"),
        avatar: row.get("avatar"),
    }
}

/// Insert a new user, rejecting duplicate email or username.
pub async fn create_user(pool: &PgPool, new: &NewUser<'_>) -> Result<UserRecord, SignupError> {
    let taken: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1 OR username = $2)")
        .bind(new.email)
        .bind(new.username)
        .fetch_one(pool)
        .await?;
    if taken {
        return Err(SignupError::AlreadyRegistered);
    }

    let row = sqlx::query(
        r"INSERT INTO users (username, name, email, password_hash)
          VALUES ($1, $2, $3, $4)
          RETURNING id, username, name, email, avatar",
    )
    .bind(new.username)
    .bind(new.name)
    .bind(new.email)
    .bind(new.password_hash)
    .fetch_one(pool)
    .await?;

    Ok(record_from_row(&row))
}

/// Credentials row used by login.
#[derive(Debug)]
pub struct Credentials {
    pub id: Uuid,
    pub password_hash: String,
}

/// Look up login credentials by email.
pub async fn find_credentials(pool: &PgPool, email: &str) -> Result<Option<Credentials>, sqlx::Error> {
    let row = sqlx::query("SELECT id, password_hash FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| Credentials { id: r.get("id"), password_hash: r.get("password_hash") }))
}

/// Update name, email, and optionally the stored avatar filename.
///
/// A `None` avatar leaves any previously stored filename in place, matching
/// the multipart contract where the file field is optional.
pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    name: &str,
    email: &str,
    avatar: Option<&str>,
) -> Result<UserRecord, sqlx::Error> {
    let row = sqlx::query(
        r"UPDATE users
          SET name = $2, email = $3, avatar = COALESCE($4, avatar)
          WHERE id = $1
          RETURNING id, username, name, email, avatar",
    )
    .bind(user_id)
    .bind(name)
    .bind(email)
    .bind(avatar)
    .fetch_one(pool)
    .await?;

    Ok(record_from_row(&row))
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
