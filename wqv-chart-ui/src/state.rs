//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use chrono::NaiveDate;
use dioxus::prelude::*;
use serde::Deserialize;
use std::rc::Rc;
use wqv_core::observation::ObservationTable;
use wqv_core::parameter::{Parameter, Statistic};
use wqv_maps::level::AggregationLevel;

/// The chart point the user last clicked, as round-tripped from D3.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClickedPoint {
    pub gid: u32,
    pub date: NaiveDate,
}

/// Shared application state for the viewer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded observation snapshot (None until loaded)
    pub table: Signal<Option<Rc<ObservationTable>>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if snapshot loading went wrong
    pub error_msg: Signal<Option<String>>,
    /// Available water bodies
    pub water_bodies: Signal<Vec<String>>,
    /// Currently selected water body
    pub water_body: Signal<String>,
    /// Selected water-quality parameter
    pub parameter: Signal<Parameter>,
    /// Selected statistic
    pub statistic: Signal<Statistic>,
    /// Map aggregation level
    pub level: Signal<AggregationLevel>,
    /// Start date for range filtering (YYYY-MM-DD, HTML date input format)
    pub start_date: Signal<String>,
    /// End date for range filtering
    pub end_date: Signal<String>,
    /// Earliest selectable date
    pub min_date: Signal<String>,
    /// Latest selectable date
    pub max_date: Signal<String>,
    /// Whether the low-pixel-count filter is on
    pub low_count_filter: Signal<bool>,
    /// Whether the rolling-mean overlay is on
    pub rolling_enabled: Signal<bool>,
    /// Rolling window length in calendar days
    pub rolling_days: Signal<u32>,
    /// Last clicked chart point, if any
    pub clicked: Signal<Option<ClickedPoint>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            table: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            water_bodies: Signal::new(Vec::new()),
            water_body: Signal::new(String::new()),
            parameter: Signal::new(Parameter::Chla),
            statistic: Signal::new(Statistic::Mean),
            level: Signal::new(AggregationLevel::Daily),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            min_date: Signal::new(String::new()),
            max_date: Signal::new(String::new()),
            low_count_filter: Signal::new(false),
            rolling_enabled: Signal::new(false),
            rolling_days: Signal::new(30),
            clicked: Signal::new(None),
        }
    }
}
