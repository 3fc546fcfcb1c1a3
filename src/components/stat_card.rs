use leptos::prelude::*;

/// Dashboard summary card: a title, a headline value, and a one-line
/// description underneath.
#[component]
pub fn StatCard(title: &'static str, value: String, description: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__title">{title}</span>
            <div class="stat-card__value">{value}</div>
            <p class="stat-card__description">{description}</p>
        </div>
    }
}
