//! Search input bound to a section's filter term.

use leptos::prelude::*;

#[component]
pub fn SearchBox(value: Signal<String>, on_input: Callback<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <div class="search-box">
            <span class="search-box__icon" aria-hidden="true">"🔍"</span>
            <input
                class="search-box__input"
                type="search"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
