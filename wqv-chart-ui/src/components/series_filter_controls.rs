//! Toggles for the optional series filters and overlays.

use crate::state::AppState;
use dioxus::prelude::*;

/// Low-pixel-count filter toggle plus rolling-mean toggle with a
/// window-length input in days.
#[component]
pub fn SeriesFilterControls() -> Element {
    let mut state = use_context::<AppState>();
    let low_count = (state.low_count_filter)();
    let rolling = (state.rolling_enabled)();
    let days = (state.rolling_days)();

    let on_days_change = move |evt: Event<FormData>| {
        if let Ok(days) = evt.value().parse::<u32>() {
            state.rolling_days.set(days.clamp(1, 365));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 20px; align-items: center; flex-wrap: wrap;",
            label {
                style: "display: flex; gap: 4px; align-items: center;",
                input {
                    r#type: "checkbox",
                    checked: low_count,
                    onchange: move |evt: Event<FormData>| {
                        state.low_count_filter.set(evt.checked());
                    },
                }
                "Hide low pixel-count points"
            }
            label {
                style: "display: flex; gap: 4px; align-items: center;",
                input {
                    r#type: "checkbox",
                    checked: rolling,
                    onchange: move |evt: Event<FormData>| {
                        state.rolling_enabled.set(evt.checked());
                    },
                }
                "Rolling mean"
            }
            if rolling {
                label {
                    style: "display: flex; gap: 4px; align-items: center;",
                    input {
                        r#type: "number",
                        value: "{days}",
                        min: "1",
                        max: "365",
                        style: "width: 60px;",
                        onchange: on_days_change,
                    }
                    " days"
                }
            }
        }
    }
}
