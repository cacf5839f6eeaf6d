//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON account API and Leptos SSR rendering under a
//! single Axum router. The API keeps its root-level paths (`/signup`,
//! `/login`, `/profile`, `/avatars`) while the rendered app lives under
//! `/app`, with GET redirects bridging the two.

pub mod auth;
pub mod profile;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

// =============================================================================
// API ERROR
// =============================================================================

/// Route-level failure carried to the client as `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self { status, detail: detail.into() }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "detail": self.detail }))).into_response()
    }
}

// =============================================================================
// ROUTERS
// =============================================================================

/// JSON account API plus avatar static serving.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let avatars = ServeDir::new(state.avatar_dir.clone());

    Router::new()
        .route("/signup", get(redirect_signup_to_app).post(auth::signup))
        .route("/login", get(redirect_login_to_app).post(auth::login))
        .route("/profile", get(profile::get_profile).put(profile::update_profile))
        .route("/healthz", get(healthz))
        .nest_service("/avatars", avatars)
        .layer(cors)
        .with_state(state)
}

async fn redirect_login_to_app() -> Redirect {
    Redirect::temporary("/app/login")
}

async fn redirect_signup_to_app() -> Redirect {
    Redirect::temporary("/app/signup")
}

async fn redirect_root_to_app() -> Redirect {
    Redirect::temporary("/app")
}

/// Full application router: API routes + Leptos SSR at `/app`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    // Leptos SSR routes (under /app via client-side route definitions).
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .route("/", get(redirect_root_to_app))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
