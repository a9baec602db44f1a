//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Writing `selected_site` or `payload_range` re-runs every effect that read them.

use dioxus::prelude::*;
use slr_dash::{DashboardLayout, LaunchContext};
use slr_launch::{PayloadRange, SiteSelection};

#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until loaded)
    pub ctx: Signal<Option<LaunchContext>>,
    /// Static page description built from the dataset
    pub layout: Signal<Option<DashboardLayout>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if the dataset failed to load
    pub error_msg: Signal<Option<String>>,
    /// Site dropdown value
    pub selected_site: Signal<SiteSelection>,
    /// Payload slider value (None until the dataset bounds are known)
    pub payload_range: Signal<Option<PayloadRange>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            ctx: Signal::new(None),
            layout: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_site: Signal::new(SiteSelection::All),
            payload_range: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
