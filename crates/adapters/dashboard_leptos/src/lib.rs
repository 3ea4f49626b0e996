//! Browser dashboard for the GMC device.
//!
//! Served by the device itself; every request goes to `/api/*` on the page
//! origin. Opened from a file or a loopback host, the dashboard runs in local
//! mode with a fixed placeholder readout.

use gmc_app::services::action_service::{ActionService, ClockSync};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
pub mod origin;
mod pages;

use api::{DashboardApi, dashboard_api};
use components::{Nav, ToastContainer};
use pages::{ConfigPage, Home, NotFound};

/// Push the browser clock to the device once per page load.
fn sync_device_clock(actions: ActionService<DashboardApi>) {
    let now = chrono::Utc::now().timestamp();
    spawn_local(async move {
        match actions.sync_clock(now).await {
            Ok(ClockSync::Sent) => leptos::logging::log!("device clock set to {now}"),
            Ok(ClockSync::Skipped) => {}
            Err(err) => leptos::logging::warn!("clock sync failed: {err}"),
        }
    });
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let mode = origin::detect_connection_mode();
    provide_context(mode);
    sync_device_clock(ActionService::new(dashboard_api(), mode));

    view! {
        <ToastContainer>
            <Router>
                <Nav/>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=Home/>
                        <Route path=path!("config") view=ConfigPage/>
                    </Routes>
                </main>
            </Router>
        </ToastContainer>
    }
}
