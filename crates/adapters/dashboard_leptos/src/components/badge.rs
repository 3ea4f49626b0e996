//! Connectivity badge.

use gmc_domain::display::DisplayState;
use leptos::prelude::*;

/// Pill showing whether the last refresh reached the device.
#[component]
pub fn ConnectionBadge(display: ReadSignal<DisplayState>) -> impl IntoView {
    let style = move || {
        display.with(|state| {
            state
                .badge_color()
                .map(|color| format!("background-color: {}", color.css()))
                .unwrap_or_default()
        })
    };
    view! {
        <span class="badge" style=style>
            {move || display.with(DisplayState::badge_text)}
        </span>
    }
}
