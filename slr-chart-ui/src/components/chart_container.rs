//! Target element for one D3.js chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the chart handler renders into
    pub id: String,
    /// Short description for screen readers
    pub caption: String,
    #[props(default = 400)]
    pub min_height: u32,
}

/// A bordered card holding a single chart. D3 replaces its contents on
/// every render; the placeholder text only shows before the first one.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; width: 100%; border: 1px solid #e0e0e0; border-radius: 4px; box-sizing: border-box;",
        props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            role: "img",
            aria_label: "{props.caption}",
            style: "{style}",
            p {
                style: "color: #999; text-align: center; padding-top: 40px; margin: 0;",
                "Rendering {props.caption}..."
            }
        }
    }
}
