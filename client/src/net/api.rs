//! REST API helpers for communicating with the account server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses to one displayable `String`: a `{detail}` body
//! when the server sent one, a per-operation fallback otherwise, and a fixed
//! connection message for network-level failures. Callers show the string
//! near the active form and move on.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{SignupRequest, User};
#[cfg(feature = "hydrate")]
use super::types::TokenResponse;

#[cfg(any(test, feature = "hydrate"))]
const CONNECT_FAILED: &str = "Could not connect to the server.";
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FAILED: &str = "Login failed";
#[cfg(any(test, feature = "hydrate"))]
const SIGNUP_FAILED: &str = "Signup failed";
#[cfg(any(test, feature = "hydrate"))]
const PROFILE_FETCH_FAILED: &str = "Session is no longer valid";
#[cfg(any(test, feature = "hydrate"))]
const PROFILE_UPDATE_FAILED: &str = "Profile update failed";

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Prefer the server's `{"detail": ...}` message, falling back per operation.
#[cfg(any(test, feature = "hydrate"))]
fn detail_or(body: &serde_json::Value, fallback: &str) -> String {
    body.get("detail")
        .and_then(serde_json::Value::as_str)
        .filter(|d| !d.is_empty())
        .map_or_else(|| fallback.to_owned(), ToOwned::to_owned)
}

#[cfg(feature = "hydrate")]
async fn response_body(resp: &gloo_net::http::Response) -> serde_json::Value {
    resp.json::<serde_json::Value>()
        .await
        .unwrap_or(serde_json::Value::Null)
}

/// `POST /signup` — create an account. Success does not log the user in.
///
/// # Errors
///
/// Returns a displayable message on any HTTP or network failure.
pub async fn signup(req: &SignupRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/signup")
            .json(req)
            .map_err(|_| CONNECT_FAILED.to_owned())?
            .send()
            .await
            .map_err(|_| CONNECT_FAILED.to_owned())?;
        if !resp.ok() {
            let body = response_body(&resp).await;
            return Err(detail_or(&body, SIGNUP_FAILED));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// `POST /login` — exchange credentials for a bearer token.
///
/// # Errors
///
/// Returns a displayable message on bad credentials or network failure.
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/login")
            .json(&payload)
            .map_err(|_| CONNECT_FAILED.to_owned())?
            .send()
            .await
            .map_err(|_| CONNECT_FAILED.to_owned())?;
        let body = response_body(&resp).await;
        if !resp.ok() {
            return Err(detail_or(&body, LOGIN_FAILED));
        }
        let token: TokenResponse =
            serde_json::from_value(body).map_err(|_| LOGIN_FAILED.to_owned())?;
        Ok(token.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// `GET /profile` — fetch the profile behind the stored bearer token.
///
/// Any failure means the session should be treated as invalid: callers clear
/// the persisted token and fall back to the authentication view.
///
/// # Errors
///
/// Returns a displayable message on any HTTP or network failure.
pub async fn fetch_profile(token: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/profile")
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|_| CONNECT_FAILED.to_owned())?;
        if !resp.ok() {
            let body = response_body(&resp).await;
            return Err(detail_or(&body, PROFILE_FETCH_FAILED));
        }
        resp.json::<User>()
            .await
            .map_err(|_| PROFILE_FETCH_FAILED.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// `PUT /profile` — multipart update of name/email plus an optional avatar
/// file, returning the updated profile.
///
/// Browser-only: the multipart body is built from `web_sys::FormData`, so no
/// SSR stub exists. Callers reach this only from hydrate-gated spawns.
///
/// # Errors
///
/// Returns a displayable message on any HTTP or network failure.
#[cfg(feature = "hydrate")]
pub async fn update_profile(
    token: &str,
    name: &str,
    email: &str,
    avatar: Option<web_sys::File>,
) -> Result<User, String> {
    let form = web_sys::FormData::new().map_err(|_| PROFILE_UPDATE_FAILED.to_owned())?;
    let _ = form.append_with_str("name", name);
    let _ = form.append_with_str("email", email);
    if let Some(file) = &avatar {
        let _ = form.append_with_blob_and_filename("avatar", file, &file.name());
    }

    let resp = gloo_net::http::Request::put("/profile")
        .header("Authorization", &bearer_header(token))
        .body(form)
        .map_err(|_| CONNECT_FAILED.to_owned())?
        .send()
        .await
        .map_err(|_| CONNECT_FAILED.to_owned())?;
    if !resp.ok() {
        let body = response_body(&resp).await;
        return Err(detail_or(&body, PROFILE_UPDATE_FAILED));
    }
    resp.json::<User>()
        .await
        .map_err(|_| PROFILE_UPDATE_FAILED.to_owned())
}
