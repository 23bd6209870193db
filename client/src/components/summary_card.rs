//! Metric card on the dashboard landing view.

use leptos::prelude::*;

#[component]
pub fn SummaryCard(title: &'static str, value: &'static str, change: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <div class="summary-card">
            <div class="summary-card__head">
                <span class="summary-card__title">{title}</span>
                <span class="summary-card__icon" aria-hidden="true">{icon}</span>
            </div>
            <div class="summary-card__value">{value}</div>
            <p class="summary-card__change">{change}" desde el mes pasado"</p>
        </div>
    }
}
