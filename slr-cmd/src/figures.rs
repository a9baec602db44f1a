//! JSON output of the layout and chart definitions.
//!
//! Commands drive a [`Dashboard`] the same way the UI does: start from the
//! default controls, then apply the requested site and payload range.

use slr_dash::layout::{PIE_CHART_ID, SCATTER_CHART_ID};
use slr_dash::{Dashboard, LaunchContext};
use slr_launch::{PayloadRange, SiteSelection};

pub fn render_layout(ctx: LaunchContext) -> anyhow::Result<String> {
    let dashboard = Dashboard::new(ctx)?;
    Ok(serde_json::to_string_pretty(dashboard.layout())?)
}

pub fn render_pie(ctx: LaunchContext, site: &str) -> anyhow::Result<String> {
    let mut dashboard = Dashboard::new(ctx)?;
    dashboard.set_site(SiteSelection::from_value(site))?;
    figure_json(&dashboard, PIE_CHART_ID)
}

/// Missing bounds fall back to the slider's default (the dataset bounds).
pub fn render_scatter(
    ctx: LaunchContext,
    site: &str,
    low: Option<f64>,
    high: Option<f64>,
) -> anyhow::Result<String> {
    let mut dashboard = Dashboard::new(ctx)?;
    let default = dashboard.controls().payload;
    let range = PayloadRange::new(
        low.unwrap_or(default.low()),
        high.unwrap_or(default.high()),
    )?;
    dashboard.set_site(SiteSelection::from_value(site))?;
    dashboard.set_payload_range(range)?;
    figure_json(&dashboard, SCATTER_CHART_ID)
}

fn figure_json(dashboard: &Dashboard, output: &str) -> anyhow::Result<String> {
    let figure = dashboard
        .figure(output)
        .ok_or_else(|| anyhow::anyhow!("no figure rendered for {}", output))?;
    Ok(serde_json::to_string_pretty(figure)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> LaunchContext {
        LaunchContext::embedded().unwrap()
    }

    #[test]
    fn pie_json_for_site() {
        let json: serde_json::Value =
            serde_json::from_str(&render_pie(ctx(), "VAFB SLC-4E").unwrap()).unwrap();
        assert_eq!(json["type"], "pie");
        assert_eq!(json["title"], "Total success launches for site VAFB SLC-4E");
        let total: f64 = json["slices"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["value"].as_f64().unwrap())
            .sum();
        assert_eq!(total, 10.0);
    }

    #[test]
    fn scatter_json_uses_default_bounds() {
        let json: serde_json::Value =
            serde_json::from_str(&render_scatter(ctx(), "ALL", None, None).unwrap()).unwrap();
        assert_eq!(json["type"], "scatter");
        assert_eq!(json["points"].as_array().unwrap().len(), 56);
    }

    #[test]
    fn scatter_json_with_bounds() {
        let json: serde_json::Value = serde_json::from_str(
            &render_scatter(ctx(), "CCAFS SLC-40", Some(2000.0), Some(4000.0)).unwrap(),
        )
        .unwrap();
        let points = json["points"].as_array().unwrap();
        // 2205, 2760, 3600 and 2227.7
        assert_eq!(points.len(), 4);
        assert!(points.iter().all(|p| p["launch_site"] == "CCAFS SLC-40"));
    }

    #[test]
    fn scatter_rejects_inverted_bounds() {
        assert!(render_scatter(ctx(), "ALL", Some(5000.0), Some(1000.0)).is_err());
    }

    #[test]
    fn layout_json_lists_controls() {
        let json: serde_json::Value =
            serde_json::from_str(&render_layout(ctx()).unwrap()).unwrap();
        assert_eq!(json["site_dropdown"]["id"], "site-dropdown");
        assert_eq!(json["site_dropdown"]["options"].as_array().unwrap().len(), 5);
        assert_eq!(json["payload_slider"]["step"], 100.0);
        assert_eq!(json["payload_slider"]["value"]["high"], 9600.0);
    }
}
