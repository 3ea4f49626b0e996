use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li><a href="/">"Dashboard"</a></li>
                <li><a href="/config">"Configuration"</a></li>
            </ul>
        </nav>
    }
}
