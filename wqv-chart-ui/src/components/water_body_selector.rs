//! Dropdown selector for choosing a water body.

use crate::state::AppState;
use dioxus::prelude::*;

/// Water body dropdown selector.
/// Reads available water bodies from AppState and updates the selection on
/// change. Changing water body clears the clicked point, since site ids do
/// not carry over between water bodies.
#[component]
pub fn WaterBodySelector() -> Element {
    let mut state = use_context::<AppState>();
    let water_bodies = state.water_bodies.read().clone();
    let selected = (state.water_body)();

    let on_change = move |evt: Event<FormData>| {
        state.water_body.set(evt.value());
        state.clicked.set(None);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "water-body-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Water body: "
            }
            select {
                id: "water-body-select",
                onchange: on_change,
                for name in water_bodies.iter() {
                    option {
                        value: "{name}",
                        selected: *name == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
