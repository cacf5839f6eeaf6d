//! Signup page — name/email/password with confirmation against `POST /signup`.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_input::FormInput;
use crate::components::layout::MainLayout;
use crate::net::types::SignupRequest;
use crate::state::auth::AuthState;
use crate::state::form::FormFields;
use crate::util::auth::install_authed_redirect;

/// Build the signup payload, rejecting incomplete or mismatched input before
/// any network call. The single name field doubles as the login handle.
pub(crate) fn validate_signup_input(fields: &FormFields) -> Result<SignupRequest, &'static str> {
    let name = fields.name.trim();
    let email = fields.email.trim();
    if name.is_empty() || email.is_empty() || fields.password.is_empty() {
        return Err("All fields are required.");
    }
    if fields.password != fields.confirm_password {
        return Err("Passwords do not match!");
    }
    Ok(SignupRequest {
        username: name.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        password: fields.password.clone(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
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
        let request = match validate_signup_input(&form.get()) {
            Ok(req) => req,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&request).await {
                Ok(()) => {
                    form.update(FormFields::reset);
                    info.set("Signup successful! Please log in.".to_owned());
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <MainLayout title="Sign Up">
            <form class="form" on:submit=on_submit>
                <FormInput
                    id="name"
                    input_type="text"
                    placeholder="Full Name"
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                />
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
                <FormInput
                    id="confirm-password"
                    input_type="password"
                    placeholder="Confirm Password"
                    value=Signal::derive(move || form.get().confirm_password)
                    on_input=Callback::new(move |v| form.update(|f| f.confirm_password = v))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Sign Up"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="form__message">{move || info.get()}</p>
            </Show>
            <p class="card__switch">
                "Already have an account? "
                <A href="/app/login">"Log in"</A>
            </p>
        </MainLayout>
    }
}
