//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON shapes so serde round-trips stay
//! lossless. The server returns avatar *filenames*; the full URL is derived
//! here by joining onto the avatar base path.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Base path the server serves uploaded avatars from.
pub const AVATAR_BASE_PATH: &str = "/avatars";

/// Join a stored avatar filename onto the serving base path.
#[must_use]
pub fn avatar_url(file_name: &str) -> String {
    format!("{AVATAR_BASE_PATH}/{file_name}")
}

/// An authenticated user as returned by `GET /profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login handle chosen at signup.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Stored avatar filename, if one has been uploaded.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Full URL of the user's avatar, if one is set.
    #[must_use]
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(avatar_url)
    }
}

/// `POST /signup` request body. `username` doubles the display name, matching
/// the signup form which collects a single name field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// `POST /login` success body.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}
