//! Auth routes — signup, login, and bearer-token session extraction.

use axum::extract::{FromRef, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::services::users::{NewUser, SignupError, UserRecord};
use crate::services::{password, session, users};
use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the bearer token from an `Authorization` header, if present.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let raw = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = raw.strip_prefix(BEARER_PREFIX)?.trim();
    if token.is_empty() { None } else { Some(token) }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the `Authorization: Bearer` header.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Err(ApiError::unauthorized("Not authenticated"));
        };

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session validation failed");
                ApiError::internal("Failed to validate session")
            })?
            .ok_or_else(|| ApiError::unauthorized("Could not validate credentials"))?;

        Ok(Self { user })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Reject signup payloads with blank fields before touching the database.
pub(crate) fn validate_signup(req: &SignupRequest) -> Result<(), &'static str> {
    if req.username.trim().is_empty()
        || req.name.trim().is_empty()
        || req.email.trim().is_empty()
        || req.password.is_empty()
    {
        return Err("All fields are required");
    }
    if !req.email.contains('@') {
        return Err("Invalid email address");
    }
    Ok(())
}

/// `POST /signup` — create an account. Does not log the user in.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<UserRecord>, ApiError> {
    validate_signup(&req).map_err(ApiError::bad_request)?;

    let password_hash = password::hash_password(&req.password);
    let new = NewUser {
        username: req.username.trim(),
        name: req.name.trim(),
        email: req.email.trim(),
        password_hash: &password_hash,
    };

    match users::create_user(&state.pool, &new).await {
        Ok(record) => {
            tracing::info!(username = %record.username, "account created");
            Ok(Json(record))
        }
        Err(SignupError::AlreadyRegistered) => {
            Err(ApiError::bad_request("Email or username already registered"))
        }
        Err(SignupError::Db(e)) => {
            tracing::error!(error = %e, "signup insert failed");
            Err(ApiError::internal("Failed to create user"))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// `POST /login` — verify credentials and issue a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let creds = users::find_credentials(&state.pool, req.email.trim())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "credential lookup failed");
            ApiError::internal("Failed to log in")
        })?;

    let Some(creds) = creds else {
        return Err(ApiError::unauthorized("Incorrect email or password"));
    };
    if !password::verify_password(&req.password, &creds.password_hash) {
        return Err(ApiError::unauthorized("Incorrect email or password"));
    }

    let token = session::create_session(&state.pool, creds.id).await.map_err(|e| {
        tracing::error!(error = %e, "session creation failed");
        ApiError::internal("Failed to create session")
    })?;

    Ok(Json(TokenResponse { access_token: token, token_type: "bearer" }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
