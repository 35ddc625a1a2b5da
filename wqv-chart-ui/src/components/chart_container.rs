//! Chart container with loading state and the click-event sink.

use crate::state::ClickedPoint;
use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// The DOM id of the hidden input D3 writes clicked points into
    pub sink_id: String,
    /// Fired with the parsed point when the user clicks a chart dot
    pub on_point_click: EventHandler<ClickedPoint>,
    /// Whether the chart is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Optional minimum height in pixels
    #[props(default = 480)]
    pub min_height: u32,
}

/// A container div for the D3 scatter chart with a loading overlay.
///
/// The hidden sink input is how chart clicks cross from JS back into
/// Dioxus: the renderer sets its value to the clicked point's JSON and
/// dispatches a bubbling `input` event.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );
    let on_point_click = props.on_point_click;

    let on_sink_input = move |evt: Event<FormData>| {
        match serde_json::from_str::<ClickedPoint>(&evt.value()) {
            Ok(point) => on_point_click.call(point),
            Err(e) => log::warn!("unparseable chart click payload: {}", e),
        }
    };

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
            input {
                r#type: "text",
                id: "{props.sink_id}",
                style: "display: none;",
                oninput: on_sink_input,
            }
        }
    }
}
