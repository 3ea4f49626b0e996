//! Dashboard page: live readout, actions and history.

use gloo_timers::future::TimeoutFuture;
use gmc_app::poller::StatusPoller;
use gmc_domain::countdown::Countdown;
use gmc_domain::display::DisplayState;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::dashboard_api;
use crate::components::{ActionBar, HistoryChart, StatusPanel};
use crate::origin::use_connection_mode;

const TICK_MS: u32 = 1_000;

#[component]
pub fn Home() -> impl IntoView {
    let mode = use_connection_mode();
    let (display, set_display) = signal(DisplayState::pending());
    let (countdown, set_countdown) = signal(Countdown::default().label());

    // The task owns the poller and exits once the page's signals are disposed.
    spawn_local(async move {
        let mut poller = StatusPoller::new(dashboard_api(), mode);
        let first = poller.refresh().await.clone();
        if set_display.try_set(first).is_some() {
            return;
        }
        loop {
            TimeoutFuture::new(TICK_MS).await;
            let report = poller.tick().await;
            if set_countdown.try_set(poller.countdown().label()).is_some() {
                break;
            }
            if report.refreshed {
                set_display.try_set(poller.display().clone());
            }
        }
    });

    view! {
        <div class="home">
            <h1>"GMC"</h1>
            <StatusPanel display=display countdown=countdown/>
            <ActionBar/>
            <HistoryChart/>
        </div>
    }
}
