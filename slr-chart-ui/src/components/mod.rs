//! Reusable Dioxus RSX components for the launch records dashboard.

mod chart_container;
mod dashboard_header;
mod error_display;
mod loading_spinner;
mod payload_slider;
mod site_dropdown;

pub use chart_container::ChartContainer;
pub use dashboard_header::DashboardHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use payload_slider::PayloadSlider;
pub use site_dropdown::SiteDropdown;
