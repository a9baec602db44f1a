//! Page title.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    pub title: String,
}

#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    rsx! {
        h1 {
            style: "text-align: center; color: #503D36; font-size: 40px; margin: 8px 0 16px 0;",
            "{props.title}"
        }
    }
}
