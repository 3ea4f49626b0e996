//! Placeholder shown while a device resource is in flight.

use leptos::prelude::*;

fn loading_text(what: &str) -> String {
    format!("Loading {what}\u{2026}")
}

/// Spinner plus `Loading <what>…`, announced to screen readers.
#[component]
pub fn Loading(
    /// What is being fetched, e.g. `"history"`.
    what: &'static str,
) -> impl IntoView {
    view! {
        <p class="loading" role="status">
            <span class="spinner"></span>
            {loading_text(what)}
        </p>
    }
}
