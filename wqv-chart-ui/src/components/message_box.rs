//! Inline message boxes for errors and user-visible conditions.

use dioxus::prelude::*;

/// Visual severity of a message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageKind {
    /// Loading/configuration fault (red)
    Error,
    /// Recoverable user-visible condition, e.g. no data or map not found (amber)
    Warning,
}

#[derive(Props, Clone, PartialEq)]
pub struct MessageBoxProps {
    pub kind: MessageKind,
    pub message: String,
}

/// Displays a condition or error message in a styled box.
#[component]
pub fn MessageBox(props: MessageBoxProps) -> Element {
    let style = match props.kind {
        MessageKind::Error => {
            "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;"
        }
        MessageKind::Warning => {
            "padding: 12px 16px; margin: 8px 0; background: #FFF8E1; color: #8D6E00; border-radius: 4px; border: 1px solid #FFE082;"
        }
    };

    rsx! {
        div {
            style: "{style}",
            "{props.message}"
        }
    }
}
