//! Page header for the record sections: back link, title and primary action.

use leptos::prelude::*;

use crate::util::browser;

/// Header with a "back to dashboard" control.
///
/// The action button is hidden while a form is open.
#[component]
pub fn SectionHeader(
    title: &'static str,
    subtitle: &'static str,
    action_label: &'static str,
    on_action: Callback<()>,
    hide_action: Signal<bool>,
    #[prop(optional)] count: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <header class="section-header">
            <button
                class="btn btn--ghost section-header__back"
                on:click=move |_| {
                    browser::redirect("/dashboard");
                }
            >
                "← Volver al Dashboard"
            </button>
            <div class="section-header__titles">
                <h1 class="section-header__title">{title}</h1>
                <p class="section-header__subtitle">{subtitle}</p>
            </div>
            {count.map(|count| view! { <span class="badge section-header__count">{move || count.get()}</span> })}
            <Show when=move || !hide_action.get()>
                <button class="btn btn--primary section-header__action" on:click=move |_| on_action.run(())>
                    "+ "
                    {action_label}
                </button>
            </Show>
        </header>
    }
}
