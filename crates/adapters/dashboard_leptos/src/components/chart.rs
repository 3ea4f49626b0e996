//! Temperature history chart using `leptos-chartistry` with SVG rendering.

use gmc_app::services::history_service::{HistoryService, HistoryWindow};
use gmc_domain::history::{HistoryPoint, celsius_text};
use leptos::prelude::*;
use leptos_chartistry::*;

use super::{Loading, StatCard};
use crate::api::dashboard_api;
use crate::origin::use_connection_mode;

/// A single data point for the chart series.
#[derive(Clone)]
struct ChartPoint {
    /// Seconds since midnight.
    seconds: f64,
    celsius: f64,
}

/// Keep the points whose time of day parses; the device sends `HH:MM:SS`.
fn chart_points(points: &[HistoryPoint]) -> Vec<ChartPoint> {
    points
        .iter()
        .filter_map(|point| {
            Some(ChartPoint {
                seconds: f64::from(point.seconds_of_day()?),
                celsius: point.v,
            })
        })
        .collect()
}

/// Render the temperature line.
#[component]
fn TemperatureChart(data: Signal<Vec<ChartPoint>>) -> impl IntoView {
    let series = Series::new(|p: &ChartPoint| p.seconds)
        .line(Line::new(|p: &ChartPoint| p.celsius).with_name("\u{00B0}C"));
    let inner = vec![
        AxisMarker::left_edge().into_inner(),
        AxisMarker::bottom_edge().into_inner(),
        XGridLine::default().into_inner(),
        YGridLine::default().into_inner(),
        XGuideLine::over_data().into_inner(),
        YGuideLine::over_mouse().into_inner(),
    ];
    view! {
        <Chart
            aspect_ratio=AspectRatio::from_env_width_apply_ratio(3.0)
            left=TickLabels::aligned_floats()
            bottom=TickLabels::aligned_floats()
            inner=inner
            tooltip=Tooltip::left_cursor()
            series=series
            data=data
        />
    }
}

/// Min / max / last cards above the chart.
#[component]
fn HistorySummaryCards(window: HistoryWindow) -> impl IntoView {
    window.summary.map(|summary| {
        let min = celsius_text(summary.min);
        let max = celsius_text(summary.max);
        let last = celsius_text(summary.last);
        view! {
            <div class="stat-grid">
                <StatCard label="Min" value=Signal::derive(move || min.clone()) unit="\u{00B0}C"/>
                <StatCard label="Max" value=Signal::derive(move || max.clone()) unit="\u{00B0}C"/>
                <StatCard label="Last" value=Signal::derive(move || last.clone()) unit="\u{00B0}C"/>
            </div>
        }
    })
}

/// Recent measurements, reloaded on demand.
#[component]
pub fn HistoryChart() -> impl IntoView {
    let service = HistoryService::new(dashboard_api(), use_connection_mode());
    let (reload, set_reload) = signal(0_u32);

    let history = LocalResource::new(move || {
        reload.track();
        async move { service.load().await }
    });

    view! {
        <section class="history-chart">
            <h2>"History"</h2>
            <button class="btn btn-secondary btn-sm" on:click=move |_| set_reload.update(|n| *n = n.wrapping_add(1))>
                "Reload"
            </button>
            <Suspense fallback=move || view! { <Loading what="history"/> }>
                {move || {
                    history
                        .read()
                        .as_ref()
                        .map(|result| match result {
                            Ok(window) if window.points.is_empty() => {
                                view! { <p><em>"No measurements yet."</em></p> }.into_any()
                            }
                            Ok(window) => {
                                let points = chart_points(&window.points);
                                view! {
                                    <HistorySummaryCards window=window.clone()/>
                                    <TemperatureChart data=Signal::derive(move || points.clone())/>
                                }
                                .into_any()
                            }
                            Err(err) => {
                                leptos::logging::warn!("history fetch failed: {err}");
                                view! { <p class="error">"History unavailable: " {err.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
