use leptos::prelude::*;

/// Centered loading indicator used while a table or dashboard block loads.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-label="Loading">
            <div class="spinner__ring"></div>
        </div>
    }
}
