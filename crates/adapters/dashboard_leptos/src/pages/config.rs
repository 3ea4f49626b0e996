//! Device configuration form.
//!
//! Saving makes the device restart, so the page goes offline for a few
//! seconds afterwards.

use gmc_app::services::config_service::{ConfigService, SaveConfigError};
use gmc_domain::device_config::{ConfigUpdate, DeviceConfig, NetworkMode};
use gmc_domain::error::FetchError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::dashboard_api;
use crate::components::{Loading, use_toasts};
use crate::origin::use_connection_mode;

/// Validation problems stay next to the form; a failed request gets a toast.
fn save_failure_text(err: &FetchError) -> String {
    format!("Configuration not saved: {err}")
}

#[component]
pub fn ConfigPage() -> impl IntoView {
    let mode = use_connection_mode();

    view! {
        <div class="config">
            <h1>"Configuration"</h1>
            <Show
                when=move || !mode.is_local()
                fallback=|| view! { <p><em>"No device behind a local page."</em></p> }
            >
                <ConfigLoader/>
            </Show>
        </div>
    }
}

#[component]
fn ConfigLoader() -> impl IntoView {
    let service = ConfigService::new(dashboard_api());
    let current = LocalResource::new(move || async move { service.load().await });

    view! {
        <Suspense fallback=move || view! { <Loading what="configuration"/> }>
            {move || {
                current
                    .read()
                    .as_ref()
                    .map(|result| match result {
                        Ok(config) => view! { <ConfigForm initial=config.clone()/> }.into_any(),
                        Err(err) => {
                            view! { <p class="error">"Error loading configuration: " {err.to_string()}</p> }
                                .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}

#[component]
fn ConfigForm(initial: DeviceConfig) -> impl IntoView {
    let service = ConfigService::new(dashboard_api());
    let toasts = use_toasts();

    let (ssid, set_ssid) = signal(initial.ssid);
    let (password, set_password) = signal(String::new());
    let (freq, set_freq) = signal(initial.freq.to_string());
    let (network_mode, set_network_mode) = signal(initial.mode);
    let (is_saving, set_is_saving) = signal(false);
    let (error_message, set_error_message) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        let Ok(freq) = freq.get_untracked().trim().parse::<u32>() else {
            set_error_message.set(Some("frequency must be a whole number of seconds".into()));
            return;
        };
        let update = ConfigUpdate {
            config: DeviceConfig {
                ssid: ssid.get_untracked().trim().to_string(),
                freq,
                mode: network_mode.get_untracked(),
            },
            password: password.get_untracked(),
        };

        set_is_saving.set(true);
        spawn_local(async move {
            match service.save(&update).await {
                Ok(()) => {
                    if let Some(toasts) = toasts {
                        toasts.success("Configuration saved, the device is restarting");
                    }
                    set_password.try_set(String::new());
                }
                Err(SaveConfigError::Invalid(err)) => {
                    set_error_message.try_set(Some(err.to_string()));
                }
                Err(SaveConfigError::Fetch(err)) => {
                    leptos::logging::warn!("config save failed: {err}");
                    if let Some(toasts) = toasts {
                        toasts.error(save_failure_text(&err));
                    }
                }
            }
            set_is_saving.try_set(false);
        });
    };

    view! {
        <form class="config-form" on:submit=on_submit>
            <label>
                "Wi-Fi SSID"
                <input
                    type="text"
                    maxlength="32"
                    prop:value=move || ssid.get()
                    on:input=move |ev| set_ssid.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Wi-Fi password"
                <input
                    type="password"
                    placeholder="empty for an open network"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Measurement interval (s)"
                <input
                    type="number"
                    min="1"
                    prop:value=move || freq.get()
                    on:input=move |ev| set_freq.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Network mode"
                <select
                    prop:value=move || network_mode.get().as_str()
                    on:change=move |ev| {
                        if let Ok(mode) = event_target_value(&ev).parse::<NetworkMode>() {
                            set_network_mode.set(mode);
                        }
                    }
                >
                    <option value="solo">"Solo"</option>
                    <option value="cluster">"Cluster"</option>
                </select>
            </label>
            <Show when=move || error_message.get().is_some()>
                <p class="error">{move || error_message.get().unwrap_or_default()}</p>
            </Show>
            <button type="submit" class="btn btn-primary" disabled=move || is_saving.get()>
                {move || if is_saving.get() { "Saving\u{2026}" } else { "Save" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_explain_failed_save_request() {
        assert_eq!(
            save_failure_text(&FetchError::Status(500)),
            "Configuration not saved: device answered HTTP 500"
        );
    }
}
