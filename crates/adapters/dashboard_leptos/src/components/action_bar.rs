//! Buttons for the device's one-shot actions.
//!
//! Failures are logged to the console and leave the last result on screen.

use gmc_app::services::action_service::ActionService;
use gmc_domain::action::LedState;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{DashboardApi, dashboard_api};
use crate::origin::use_connection_mode;

#[component]
pub fn ActionBar() -> impl IntoView {
    let actions = ActionService::new(dashboard_api(), use_connection_mode());

    view! {
        <section class="action-bar">
            <h2>"Actions"</h2>
            <LedButton actions=actions/>
            <GpioButton actions=actions/>
            <SendValueForm actions=actions/>
        </section>
    }
}

/// Toggles the LED and recolors itself with the state the device reports.
#[component]
fn LedButton(actions: ActionService<DashboardApi>) -> impl IntoView {
    let (led, set_led) = signal(None::<LedState>);
    let (is_updating, set_is_updating) = signal(false);

    let on_click = move |_| {
        set_is_updating.set(true);
        spawn_local(async move {
            match actions.toggle_led().await {
                Ok(state) => {
                    set_led.try_set(Some(state));
                }
                Err(err) => leptos::logging::warn!("LED toggle failed: {err}"),
            }
            set_is_updating.try_set(false);
        });
    };

    let style = move || {
        led.get()
            .map(|state| format!("background-color: {}", state.color()))
            .unwrap_or_default()
    };

    view! {
        <div class="action">
            <button class="btn" style=style disabled=move || is_updating.get() on:click=on_click>
                "Toggle LED"
            </button>
            <span class="action-result">{move || led.get().map(LedState::readout)}</span>
        </div>
    }
}

/// Asks the device to pilot its GPIO and shows the plain-text answer.
#[component]
fn GpioButton(actions: ActionService<DashboardApi>) -> impl IntoView {
    let (answer, set_answer) = signal(None::<String>);

    let on_click = move |_| {
        spawn_local(async move {
            match actions.pilot_gpio().await {
                Ok(text) => {
                    set_answer.try_set(Some(text));
                }
                Err(err) => leptos::logging::warn!("GPIO request failed: {err}"),
            }
        });
    };

    view! {
        <div class="action">
            <button class="btn" on:click=on_click>"Pilot GPIO"</button>
            <span class="action-result">{move || answer.get()}</span>
        </div>
    }
}

/// Sends an integer and shows the device's acknowledgment.
#[component]
fn SendValueForm(actions: ActionService<DashboardApi>) -> impl IntoView {
    let (value, set_value) = signal(String::from("0"));
    let (ack, set_ack) = signal(None::<String>);

    let on_click = move |_| {
        let raw = value.get_untracked();
        let Ok(parsed) = raw.trim().parse::<i64>() else {
            leptos::logging::warn!("not an integer: {raw:?}");
            return;
        };
        spawn_local(async move {
            match actions.send_value(parsed).await {
                Ok(text) => {
                    set_ack.try_set(Some(text));
                }
                Err(err) => leptos::logging::warn!("send value failed: {err}"),
            }
        });
    };

    view! {
        <div class="action">
            <input
                type="number"
                step="1"
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
            <button class="btn" on:click=on_click>"Send value"</button>
            <span class="action-result">{move || ack.get()}</span>
        </div>
    }
}
