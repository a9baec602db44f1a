//! Static description of the dashboard page.
//!
//! The layout is built once from the [`LaunchContext`] and never changes
//! shape afterwards. UI components render it; handlers target its chart
//! container ids.

use crate::context::LaunchContext;
use serde::Serialize;
use slr_launch::{PayloadRange, ALL_SITES, LAUNCH_SITES};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10000.0;
pub const SLIDER_STEP: f64 = 100.0;
const SLIDER_MARK_EVERY: u32 = 1000;

const ALL_SITES_LABEL: &str = "All Sites";
const DROPDOWN_PLACEHOLDER: &str = "Select a Launch Site here";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// The launch site dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownSpec {
    pub id: &'static str,
    pub options: Vec<SiteOption>,
    /// Default value
    pub value: String,
    pub placeholder: &'static str,
    pub searchable: bool,
}

impl DropdownSpec {
    /// Options whose label or value contains `query`, ignoring case.
    /// A blank query keeps every option.
    pub fn filter_options(&self, query: &str) -> Vec<&SiteOption> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.options.iter().collect();
        }
        self.options
            .iter()
            .filter(|o| {
                o.label.to_lowercase().contains(&needle) || o.value.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Whether the option for `value` survives `query`. When it does not,
    /// the select must show the current choice as an unselectable entry so
    /// every visible option can still fire a change.
    pub fn shows_selection(&self, query: &str, value: &str) -> bool {
        self.filter_options(query).iter().any(|o| o.value == value)
    }

    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: u32,
    pub label: String,
}

/// The payload range slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSliderSpec {
    pub id: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Default value: the dataset's payload bounds
    pub value: PayloadRange,
}

impl RangeSliderSpec {
    /// Round `raw` to the nearest step and clamp it to the slider bounds.
    pub fn snap(&self, raw: f64) -> f64 {
        let stepped = (raw / self.step).round() * self.step;
        stepped.clamp(self.min, self.max)
    }
}

/// The whole page: title, controls and the two chart containers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: &'static str,
    pub site_dropdown: DropdownSpec,
    pub payload_slider: RangeSliderSpec,
    pub pie_chart_id: &'static str,
    pub scatter_chart_id: &'static str,
}

impl DashboardLayout {
    pub fn build(ctx: &LaunchContext) -> Self {
        let mut options = vec![SiteOption {
            label: ALL_SITES_LABEL.to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(LAUNCH_SITES.iter().map(|site| SiteOption {
            label: site.to_string(),
            value: site.to_string(),
        }));

        let marks = (SLIDER_MIN as u32..=SLIDER_MAX as u32)
            .step_by(SLIDER_MARK_EVERY as usize)
            .map(|value| SliderMark {
                value,
                label: value.to_string(),
            })
            .collect();

        Self {
            title: DASHBOARD_TITLE,
            site_dropdown: DropdownSpec {
                id: SITE_DROPDOWN_ID,
                options,
                value: ALL_SITES.to_string(),
                placeholder: DROPDOWN_PLACEHOLDER,
                searchable: true,
            },
            payload_slider: RangeSliderSpec {
                id: PAYLOAD_SLIDER_ID,
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                marks,
                value: ctx.payload_bounds(),
            },
            pie_chart_id: PIE_CHART_ID,
            scatter_chart_id: SCATTER_CHART_ID,
        }
    }
}
