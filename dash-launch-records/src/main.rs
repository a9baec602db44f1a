//! SpaceX Launch Records Dashboard
//!
//! A site dropdown and a payload range slider drive two D3.js charts: a
//! success pie chart and a payload/outcome scatter chart. Serve locally
//! with `dx serve -p dash-launch-records`.
//!
//! Data flow:
//! 1. `slr_launch::LAUNCH_CSV` embeds the launch CSV into the WASM binary.
//! 2. On mount: load it into an in-memory SQLite database once, build the
//!    static layout and seed the slider with the payload bounds.
//! 3. On dropdown change: re-render both charts.
//! 4. On slider change: re-render the scatter chart.

use dioxus::prelude::*;
use slr_chart_ui::components::{
    ChartContainer, DashboardHeader, ErrorDisplay, LoadingSpinner, PayloadSlider, SiteDropdown,
};
use slr_chart_ui::js_bridge;
use slr_chart_ui::state::AppState;
use slr_dash::callbacks::{success_pie_chart, success_payload_scatter_chart};
use slr_dash::layout::{DASHBOARD_TITLE, PIE_CHART_ID, SCATTER_CHART_ID};
use slr_dash::{DashboardLayout, LaunchContext};
use slr_launch::{SiteSelection, LAUNCH_CSV};

const D3_SRC: &str = "https://cdn.jsdelivr.net/npm/d3@7";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load the dataset once on mount ───
    use_effect(move || {
        match LaunchContext::from_csv(LAUNCH_CSV) {
            Ok(ctx) => {
                let layout = DashboardLayout::build(&ctx);
                state
                    .selected_site
                    .set(SiteSelection::from_value(&layout.site_dropdown.value));
                state.payload_range.set(Some(layout.payload_slider.value));
                state.layout.set(Some(layout));
                state.ctx.set(Some(ctx));
                state.loading.set(false);

                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("Failed to load launch records: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load launch records: {:#}", e)));
                state.loading.set(false);
            }
        }
    });

    // ─── Effect 2: Pie chart, re-runs when the site changes ───
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let site = (state.selected_site)();
        let Some(ctx) = state.ctx.read().clone() else {
            return;
        };

        match success_pie_chart(&ctx, &site) {
            Ok(figure) => js_bridge::render_pie_chart(PIE_CHART_ID, &figure),
            Err(e) => {
                log::error!("[SLR] pie chart failed: {:#}", e);
                js_bridge::destroy_chart(PIE_CHART_ID);
            }
        }
    });

    // ─── Effect 3: Scatter chart, re-runs when the site or payload range changes ───
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let site = (state.selected_site)();
        let Some(range) = (state.payload_range)() else {
            return;
        };
        let Some(ctx) = state.ctx.read().clone() else {
            return;
        };

        match success_payload_scatter_chart(&ctx, &site, &range) {
            Ok(figure) => js_bridge::render_scatter_chart(SCATTER_CHART_ID, &figure),
            Err(e) => {
                log::error!("[SLR] scatter chart failed: {:#}", e);
                js_bridge::destroy_chart(SCATTER_CHART_ID);
            }
        }
    });

    // ─── Render ───
    rsx! {
        document::Script { src: D3_SRC }
        div {
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            DashboardHeader { title: DASHBOARD_TITLE.to_string() }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else if let Some(layout) = (state.layout)() {
                SiteDropdown { spec: layout.site_dropdown.clone() }
                br {}

                ChartContainer {
                    id: layout.pie_chart_id.to_string(),
                    caption: "success pie chart".to_string(),
                    min_height: 400,
                }
                br {}

                PayloadSlider { spec: layout.payload_slider.clone() }

                ChartContainer {
                    id: layout.scatter_chart_id.to_string(),
                    caption: "payload and success scatter chart".to_string(),
                    min_height: 420,
                }
            }
        }
    }
}
