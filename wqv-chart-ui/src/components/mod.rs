//! Reusable Dioxus RSX components for the water-quality viewer.

mod aggregation_selector;
mod chart_container;
mod date_range_picker;
mod loading_spinner;
mod map_panel;
mod message_box;
mod parameter_selector;
mod series_filter_controls;
mod statistic_selector;
mod water_body_selector;

pub use aggregation_selector::AggregationSelector;
pub use chart_container::ChartContainer;
pub use date_range_picker::DateRangePicker;
pub use loading_spinner::LoadingSpinner;
pub use map_panel::{MapPanel, MapView};
pub use message_box::{MessageBox, MessageKind};
pub use parameter_selector::ParameterSelector;
pub use series_filter_controls::SeriesFilterControls;
pub use statistic_selector::StatisticSelector;
pub use water_body_selector::WaterBodySelector;
