//! Startup failure banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[props(default = "Check that the launch dataset is present and well-formed.".to_string())]
    pub hint: String,
}

/// Shown instead of the controls and charts when the dataset cannot be loaded.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "The dashboard could not start." }
            pre {
                style: "white-space: pre-wrap; margin: 8px 0;",
                "{props.message}"
            }
            p { style: "margin: 0; font-size: 12px;", "{props.hint}" }
        }
    }
}
