//! Application shell, context wiring, and route table.
//!
//! ARCHITECTURE
//! ============
//! `App` owns the session state holder and provides it via context; route
//! components read it to choose between the authentication and profile
//! views. On startup a persisted token, if any, is exchanged for a profile
//! before the guards settle.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;

use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::signup::SignupPage;
use crate::state::auth::AuthState;

/// SSR document shell rendered around the app for each page request.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Resume a persisted session: exchange the stored token for a profile,
    // clearing it if the server no longer accepts it.
    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = crate::util::token::load() {
            auth.update(|s| s.loading = true);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_profile(&token).await {
                    Ok(user) => auth.set(AuthState::signed_in(user)),
                    Err(_) => {
                        crate::util::token::clear();
                        auth.set(AuthState::default());
                    }
                }
            });
        }
    }

    view! {
        <Title text="Userhub"/>
        <Stylesheet id="leptos" href="/pkg/userhub.css"/>
        <Router>
            <Routes fallback=|| view! { <p class="page__missing">"Page not found."</p> }>
                <Route path=path!("/app") view=HomeRedirect/>
                <Route path=path!("/app/login") view=LoginPage/>
                <Route path=path!("/app/signup") view=SignupPage/>
                <Route path=path!("/app/profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}

/// `/app` — forward to the profile or login page once auth has settled.
#[component]
fn HomeRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = if state.is_authenticated() { "/app/profile" } else { "/app/login" };
        navigate(target, NavigateOptions::default());
    });

    view! {
        <main class="page">
            <p class="page__loading">"Loading..."</p>
        </main>
    }
}
