//! Headline number card for the dashboard.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] caption: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__title">{title}</span>
            <span class="stat-card__value">{move || value.get()}</span>
            {caption.map(|c| view! { <span class="stat-card__caption">{c}</span> })}
        </div>
    }
}
