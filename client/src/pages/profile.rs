//! Profile page — view and edit the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It seeds its form from the loaded
//! session once, then drives `PUT /profile` for text updates and avatar
//! uploads. Logout clears the persisted token and the session holder; the
//! unauth redirect takes care of leaving the page.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_input::FormInput;
use crate::components::layout::MainLayout;
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::state::form::FormFields;
use crate::util::auth::install_unauth_redirect;

/// Copy the session identity into an editable form draft.
pub(crate) fn seed_from_user(fields: &mut FormFields, user: &User) {
    fields.name = user.name.clone();
    fields.email = user.email.clone();
}

/// Trim and require both editable fields before any network call.
pub(crate) fn validate_profile_input(name: &str, email: &str) -> Result<(String, String), &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err("Name and email are required.");
    }
    Ok((name.to_owned(), email.to_owned()))
}

#[cfg(feature = "hydrate")]
fn file_from_input_event(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let form = RwSignal::new(FormFields::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Seed the form from the session exactly once; later keystrokes win.
    let seeded = RwSignal::new(false);
    Effect::new(move || {
        if seeded.get() {
            return;
        }
        if let Some(user) = auth.get().user {
            form.update(|f| seed_from_user(f, &user));
            seeded.set(true);
        }
    });

    let on_update = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let fields = form.get();
        let (name, email) = match validate_profile_input(&fields.name, &fields.email) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let Some(token) = crate::util::token::load() else {
            return;
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&token, &name, &email, None).await {
                Ok(user) => {
                    auth.set(AuthState::signed_in(user));
                    info.set("Profile updated successfully!".to_owned());
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, name, email);
            busy.set(false);
        }
    };

    let on_avatar_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if busy.get() {
                return;
            }
            let Some(file) = file_from_input_event(&ev) else {
                return;
            };
            let fields = form.get();
            let (name, email) = match validate_profile_input(&fields.name, &fields.email) {
                Ok(input) => input,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
            let Some(token) = crate::util::token::load() else {
                return;
            };
            busy.set(true);
            info.set(String::new());

            leptos::task::spawn_local(async move {
                match crate::net::api::update_profile(&token, &name, &email, Some(file)).await {
                    Ok(user) => {
                        auth.set(AuthState::signed_in(user));
                        info.set("Avatar updated successfully!".to_owned());
                    }
                    Err(e) => info.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_logout = move |_| {
        crate::util::token::clear();
        // The unauth redirect effect returns the view to the login page.
        auth.set(AuthState::default());
    };

    let avatar_src = move || auth.get().user.as_ref().and_then(User::avatar_url);
    let display_name = move || {
        auth.get()
            .user
            .as_ref()
            .map_or_else(String::new, |u| u.name.clone())
    };

    view! {
        <MainLayout title="Profile">
            <div class="profile__header">
                {move || match avatar_src() {
                    Some(src) => view! { <img class="profile__avatar" src=src alt="Avatar"/> }.into_any(),
                    None => view! { <div class="profile__avatar profile__avatar--empty"></div> }.into_any(),
                }}
                <p class="profile__name">{display_name}</p>
                <label class="profile__upload">
                    "Change avatar"
                    <input type="file" accept="image/*" on:change=on_avatar_change/>
                </label>
            </div>
            <form class="form" on:submit=on_update>
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
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Update Profile"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="form__message">{move || info.get()}</p>
            </Show>
            <button class="btn btn--ghost" on:click=on_logout>
                "Log Out"
            </button>
        </MainLayout>
    }
}
