//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: guarded pages bounce
//! signed-out visitors to the login page, and auth pages bounce signed-in
//! users to their profile. Neither fires while a stored session is still
//! being resumed.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Redirect to `/app/login` whenever auth has settled with no user present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/app/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/app/profile` whenever a user is present.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate("/app/profile", NavigateOptions::default());
        }
    });
}
