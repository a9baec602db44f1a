//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be handed to D3.js as JSON.

use serde::Serialize;

/// Sum of the outcome class for one launch site (its success count).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteTotal {
    pub launch_site: String,
    pub successes: i64,
}

/// Number of launches with a given outcome class at one site.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutcomeCount {
    /// 1 = success, 0 = failure
    pub class: i64,
    pub count: i64,
}

/// One launch as a payload/outcome point for the scatter chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PayloadOutcome {
    pub flight_number: Option<i64>,
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub class: i64,
    pub booster_version: String,
    pub booster_version_category: String,
}

/// Launch and success counts per site, for summaries.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteSummary {
    pub launch_site: String,
    pub launches: i64,
    pub successes: i64,
}
