//! Live readout fed by the status poller.

use gmc_domain::display::DisplayState;
use leptos::prelude::*;

use super::{ConnectionBadge, StatCard};

#[component]
pub fn StatusPanel(
    display: ReadSignal<DisplayState>,
    /// "Next refresh in Ns".
    countdown: ReadSignal<String>,
) -> impl IntoView {
    let temperature = Signal::derive(move || display.with(|d| d.temperature_text.clone()));
    let date = Signal::derive(move || display.with(|d| d.date_text.clone()));
    let status = Signal::derive(move || display.with(|d| d.status_text.clone()));

    view! {
        <section class="status-panel">
            <header class="status-header">
                <ConnectionBadge display=display/>
                <span class="countdown">{move || countdown.get()}</span>
            </header>
            <div class="stat-grid">
                <StatCard label="Temperature" value=temperature unit="\u{00B0}C"/>
                <StatCard label="Device time" value=date/>
                <StatCard label="Status" value=status/>
            </div>
        </section>
    }
}
