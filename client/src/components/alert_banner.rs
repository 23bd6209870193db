//! Inline success/error message shown above a section.

use leptos::prelude::*;

use crate::state::section::Banner;

#[component]
pub fn AlertBanner(banner: Signal<Option<Banner>>) -> impl IntoView {
    view! {
        <Show when=move || banner.get().is_some()>
            <div
                class="alert"
                class:alert--error=move || banner.get().is_some_and(|b| b.is_error())
                class:alert--success=move || banner.get().is_some_and(|b| !b.is_error())
                role="alert"
            >
                {move || banner.get().map(|b| b.text().to_owned()).unwrap_or_default()}
            </div>
        </Show>
    }
}
