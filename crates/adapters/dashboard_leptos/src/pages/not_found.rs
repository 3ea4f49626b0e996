use leptos::prelude::*;

/// 404 page displayed when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The device only serves the dashboard and its configuration."</p>
            <p>
                <a href="/">"Back to the dashboard"</a>
            </p>
        </div>
    }
}
