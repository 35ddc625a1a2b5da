//! Radio selector for the water-quality parameter.

use crate::state::AppState;
use dioxus::prelude::*;
use wqv_core::parameter::Parameter;

/// Parameter radio group (chlorophyll-a / turbidity).
#[component]
pub fn ParameterSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.parameter)();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 16px; align-items: center;",
            span {
                style: "font-weight: bold;",
                "Parameter: "
            }
            for parameter in Parameter::ALL {
                label {
                    style: "display: flex; gap: 4px; align-items: center;",
                    input {
                        r#type: "radio",
                        name: "parameter",
                        checked: parameter == selected,
                        onchange: move |_| state.parameter.set(parameter),
                    }
                    "{parameter.label()}"
                }
            }
        }
    }
}
