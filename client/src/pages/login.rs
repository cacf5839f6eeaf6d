//! Login page — email + password against `POST /login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_input::FormInput;
use crate::components::layout::MainLayout;
use crate::state::auth::AuthState;
use crate::state::form::FormFields;
use crate::util::auth::install_authed_redirect;

/// Trim the email and require both fields before any network call.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_authed_redirect(auth, navigate);

    let form = RwSignal::new(FormFields::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let fields = form.get();
        let (email, password) = match validate_login_input(&fields.email, &fields.password) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email, &password).await {
                Ok(token) => match crate::net::api::fetch_profile(&token).await {
                    Ok(user) => {
                        crate::util::token::save(&token);
                        form.update(FormFields::reset);
                        // The authed redirect effect takes it from here.
                        auth.set(AuthState::signed_in(user));
                    }
                    Err(e) => {
                        crate::util::token::clear();
                        info.set(e);
                    }
                },
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
        }
    };

    view! {
        <MainLayout title="Log In">
            <form class="form" on:submit=on_submit>
                <FormInput
                    id="email"
                    input_type="email"
                    placeholder="Email"
                    value=Signal::derive(move || form.get().email)
                    on_input=Callback::new(move |v| form.update(|f| f.email = v))
                />
                <FormInput
                    id="password"
                    input_type="password"
                    placeholder="Password"
                    value=Signal::derive(move || form.get().password)
                    on_input=Callback::new(move |v| form.update(|f| f.password = v))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Log In"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="form__message">{move || info.get()}</p>
            </Show>
            <p class="card__switch">
                "Don't have an account? "
                <A href="/app/signup">"Sign up"</A>
            </p>
        </MainLayout>
    }
}
