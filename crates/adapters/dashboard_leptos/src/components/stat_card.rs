//! Stat card component for displaying a labelled readout.

use leptos::prelude::*;

/// A card displaying a label and a reactive value.
#[component]
pub fn StatCard(
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// The text to display.
    #[prop(into)]
    value: Signal<String>,
    /// Unit appended after the value, if any.
    #[prop(optional, into)]
    unit: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value">
                {move || value.get()}
                {unit.map(|unit| view! { <span class="stat-unit">{unit}</span> })}
            </span>
        </div>
    }
}
