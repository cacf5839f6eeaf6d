//! Shared centered-card page layout.

use leptos::prelude::*;

/// Full-page wrapper with a titled card, used by every route screen.
#[component]
pub fn MainLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <main class="page">
            <div class="card">
                <h1 class="card__title">{title}</h1>
                {children()}
            </div>
        </main>
    }
}
