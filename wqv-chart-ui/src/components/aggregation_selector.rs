//! Horizontal radio selector for the map aggregation level.

use crate::state::AppState;
use dioxus::prelude::*;
use wqv_maps::level::AggregationLevel;

/// Aggregation-level radio row. Trophic-state levels stay selectable for
/// turbidity; the map panel explains they are not available rather than the
/// control silently disappearing.
#[component]
pub fn AggregationSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.level)();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            span {
                style: "font-weight: bold;",
                "Map aggregation: "
            }
            for level in AggregationLevel::ALL {
                label {
                    style: "display: flex; gap: 4px; align-items: center;",
                    input {
                        r#type: "radio",
                        name: "aggregation-level",
                        checked: level == selected,
                        onchange: move |_| state.level.set(level),
                    }
                    "{level.label()}"
                }
            }
        }
    }
}
