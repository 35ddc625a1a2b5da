//! Dropdown selector for the charted statistic.

use crate::state::AppState;
use dioxus::prelude::*;
use wqv_core::parameter::Statistic;

/// Statistic dropdown (mean / median / max / min).
#[component]
pub fn StatisticSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.statistic)();

    let on_change = move |evt: Event<FormData>| {
        if let Some(statistic) = Statistic::parse(&evt.value()) {
            state.statistic.set(statistic);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "statistic-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Statistic: "
            }
            select {
                id: "statistic-select",
                onchange: on_change,
                for statistic in Statistic::ALL {
                    option {
                        value: "{statistic.column_suffix()}",
                        selected: statistic == selected,
                        "{statistic.label()}"
                    }
                }
            }
        }
    }
}
