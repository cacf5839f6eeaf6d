//! Text input bound to a single form field.

use leptos::prelude::*;

/// Controlled text input: renders `value` and reports each keystroke through
/// `on_input` so the owning page can update its form state holder.
#[component]
pub fn FormInput(
    #[prop(into)] id: String,
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            id=id
            class="field"
            type=input_type
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}
