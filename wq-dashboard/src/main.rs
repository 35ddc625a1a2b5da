//! Water quality viewer
//!
//! Single-page viewer for satellite-derived water-quality measurements.
//! The user picks a water body, a parameter, a statistic, and a date range;
//! the filtered series renders as a D3 scatter chart. Clicking a point
//! resolves the pre-rendered map image for that date at the selected
//! aggregation level and shows it in the right-hand panel.
//!
//! Data flow:
//! 1. `build.rs` copies `snapshot.csv` and `maps_index.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds both into the WASM binary.
//! 3. On mount, the snapshot is parsed once into an immutable
//!    `ObservationTable`; the map index is parsed into a `MapIndex`.
//! 4. Every interaction rebuilds the series and re-renders the chart; a
//!    chart click re-resolves the map panel.
//!
//! The map images themselves are deployed as static assets under `maps/`
//! next to the app; the resolver's relative paths double as URLs.

use dioxus::prelude::*;
use std::rc::Rc;
use wqv_chart_ui::components::{
    AggregationSelector, ChartContainer, DateRangePicker, LoadingSpinner, MapPanel, MapView,
    MessageBox, MessageKind, ParameterSelector, SeriesFilterControls, StatisticSelector,
    WaterBodySelector,
};
use wqv_chart_ui::js_bridge::{self, ScatterPayload};
use wqv_chart_ui::state::AppState;
use wqv_core::error::WqError;
use wqv_core::observation::ObservationTable;
use wqv_core::parameter::Parameter;
use wqv_maps::grammar::MapRequest;
use wqv_maps::index::MapIndex;
use wqv_series::selection::{RollingWindow, Selection};
use wqv_series::series::{build_series, SeriesSummary};
use wqv_utils::dates;

/// Observation snapshot, embedded at build time.
const SNAPSHOT_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/snapshot.csv"));
/// Listing of the deployed map tree, embedded at build time.
const MAPS_INDEX_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/maps_index.csv"));

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "wq-scatter-chart";
/// Hidden input receiving chart click events from D3.
const CLICK_SINK_ID: &str = "wq-click-sink";
/// URL prefix under which the map tree is deployed next to the app.
const MAPS_URL_PREFIX: &str = "maps";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("wq-dashboard-root"))
        .launch(App);
}

fn point_color(parameter: Parameter) -> &'static str {
    match parameter {
        Parameter::Chla => "limegreen",
        Parameter::Turbidity => "brown",
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let map_index = use_hook(|| Rc::new(MapIndex::from_lines(MAPS_INDEX_CSV)));

    // Condition shown in place of the chart (no data / missing column).
    let mut chart_msg = use_signal(|| None::<String>);
    // Summary of the currently rendered series.
    let mut summary = use_signal(|| None::<SeriesSummary>);

    // Load the snapshot once on mount.
    use_effect(move || {
        js_bridge::init_charts();
        match ObservationTable::from_csv_str(SNAPSHOT_CSV) {
            Ok(table) => {
                state.water_bodies.set(table.water_bodies());
                if let Some(default) = table.default_water_body() {
                    state.water_body.set(default);
                }
                if let Some((min, max)) = table.date_bounds() {
                    let min = dates::format_date(&min);
                    let max = dates::format_date(&max);
                    state.min_date.set(min.clone());
                    state.max_date.set(max.clone());
                    state.start_date.set(min);
                    state.end_date.set(max);
                }
                state.table.set(Some(Rc::new(table)));
                state.loading.set(false);
            }
            Err(e) => {
                log::error!("failed to load snapshot: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load observations: {}", e)));
                state.loading.set(false);
            }
        }
    });

    // Rebuild the series and re-render the chart on every selection change.
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let Some(table) = (state.table)() else {
            return;
        };
        let water_body = (state.water_body)();
        if water_body.is_empty() {
            return;
        }
        let (Ok(start), Ok(end)) = (
            dates::parse_date(&(state.start_date)()),
            dates::parse_date(&(state.end_date)()),
        ) else {
            return;
        };

        let mut selection = Selection::new(
            water_body,
            (state.parameter)(),
            (state.statistic)(),
            start,
            end,
        );
        selection.low_count_filter = (state.low_count_filter)();
        if (state.rolling_enabled)() {
            selection.rolling = Some(RollingWindow::Days((state.rolling_days)()));
        }

        match build_series(&table, &selection) {
            Ok(series) => {
                chart_msg.set(None);
                summary.set(Some(series.summary));
                let label = format!(
                    "{} ({})",
                    selection.parameter.label(),
                    selection.statistic.label()
                );
                let payload = ScatterPayload {
                    points: &series.points,
                    rolling: series.rolling.as_deref(),
                    unit: selection.parameter.unit(),
                    color: point_color(selection.parameter),
                    label: label.as_str(),
                    sink_id: CLICK_SINK_ID,
                };
                js_bridge::render_scatter(CHART_ID, &payload);
            }
            Err(e) => {
                summary.set(None);
                js_bridge::clear_chart(CHART_ID);
                chart_msg.set(Some(e.to_string()));
            }
        }
    });

    // Resolve the map panel view from the clicked point and the active
    // parameter + aggregation level.
    let map_view = use_memo(move || {
        let resolved = (state.clicked)()
            .ok_or(WqError::NoSelection)
            .and_then(|point| {
                let request = MapRequest {
                    gid: point.gid,
                    date: point.date,
                    parameter: (state.parameter)(),
                    level: (state.level)(),
                };
                map_index.resolve(&request).map(|rel| (rel, point.gid))
            });
        match resolved {
            Ok((rel, gid)) => MapView::Image {
                src: format!("{}/{}", MAPS_URL_PREFIX, rel),
                gid,
            },
            Err(WqError::NoSelection) => MapView::NoSelection,
            Err(e) => MapView::Warning(e.to_string()),
        }
    });

    rsx! {
        div {
            class: "container",
            style: "max-width: 1400px; margin: 0 auto; padding: 16px; font-family: sans-serif;",

            h1 {
                style: "color: #2c3e50; margin-bottom: 4px; font-size: 26px;",
                "Water quality from satellite observations"
            }
            p {
                style: "color: #666; margin-top: 0; margin-bottom: 16px;",
                "Chlorophyll-a and turbidity time series with pre-rendered maps"
            }

            if let Some(error) = (state.error_msg)() {
                MessageBox {
                    kind: MessageKind::Error,
                    message: error,
                }
            }

            if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 24px; align-items: flex-start;",

                    div {
                        style: "flex: 1 1 55%; min-width: 0;",
                        WaterBodySelector {}
                        ParameterSelector {}
                        StatisticSelector {}
                        DateRangePicker {}
                        SeriesFilterControls {}
                        AggregationSelector {}

                        if let Some(msg) = chart_msg() {
                            MessageBox {
                                kind: MessageKind::Warning,
                                message: msg,
                            }
                        }
                        ChartContainer {
                            id: CHART_ID.to_string(),
                            sink_id: CLICK_SINK_ID.to_string(),
                            on_point_click: move |point| state.clicked.set(Some(point)),
                        }
                        if let Some(s) = summary() {
                            p {
                                style: "font-size: 12px; color: #666;",
                                "{s.points} points, mean {s.mean:.2}, min {s.min:.2}, max {s.max:.2}"
                            }
                        }
                    }

                    div {
                        style: "flex: 1 1 45%; min-width: 0;",
                        MapPanel { view: map_view() }
                    }
                }
            }
        }
    }
}
