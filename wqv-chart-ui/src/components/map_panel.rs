//! Map image panel: the right-hand side of the viewer.

use crate::components::{MessageBox, MessageKind};
use dioxus::prelude::*;

/// What the map panel should show for the current click + selection.
#[derive(Debug, Clone, PartialEq)]
pub enum MapView {
    /// No point clicked yet: neutral placeholder, not an error.
    NoSelection,
    /// A resolved image, addressed relative to the deployed maps folder.
    Image { src: String, gid: u32 },
    /// A user-visible condition (map not found / not available / no data).
    Warning(String),
}

#[derive(Props, Clone, PartialEq)]
pub struct MapPanelProps {
    pub view: MapView,
}

/// Renders the resolved map image, a placeholder, or a warning.
#[component]
pub fn MapPanel(props: MapPanelProps) -> Element {
    match props.view {
        MapView::NoSelection => rsx! {
            div {
                style: "text-align: center; margin-top: 40px; color: #666;",
                "Click a point on the chart to see its map here."
            }
        },
        MapView::Image { src, gid } => rsx! {
            div {
                style: "text-align: center;",
                img {
                    src: "{src}",
                    style: "max-width: 100%; height: auto; border: 1px solid #ddd;",
                }
                div {
                    style: "font-size: 0.8em; color: gray; margin-top: 4px;",
                    "Site {gid}"
                }
            }
        },
        MapView::Warning(message) => rsx! {
            MessageBox {
                kind: MessageKind::Warning,
                message,
            }
        },
    }
}
