//! The two chart handlers.
//!
//! Each handler is a function of the current control values and the full
//! launch table. Neither keeps state between calls; an empty selection
//! produces an empty figure rather than an error.

use crate::context::LaunchContext;
use crate::figure::{PieFigure, PieSlice, ScatterFigure, ScatterPoint};
use slr_launch::{PayloadRange, SiteSelection};

const LAUNCH_SITE_COLUMN: &str = "Launch Site";
const CLASS_COLUMN: &str = "class";
const COUNT_COLUMN: &str = "count";
const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

/// Pie chart for the site dropdown.
///
/// - all sites: one slice per site, sized by its summed outcome class
/// - one site: one slice per outcome class, sized by its launch count
pub fn success_pie_chart(ctx: &LaunchContext, site: &SiteSelection) -> anyhow::Result<PieFigure> {
    let figure = match site.site() {
        None => {
            let slices = ctx
                .db()
                .query_success_by_site()?
                .into_iter()
                .map(|t| PieSlice {
                    label: t.launch_site,
                    value: t.successes as f64,
                })
                .collect();
            PieFigure {
                title: "Total success launches by site".to_string(),
                names: LAUNCH_SITE_COLUMN.to_string(),
                values: CLASS_COLUMN.to_string(),
                slices,
            }
        }
        Some(launch_site) => {
            let slices = ctx
                .db()
                .query_outcome_counts(launch_site)?
                .into_iter()
                .map(|c| PieSlice {
                    label: c.class.to_string(),
                    value: c.count as f64,
                })
                .collect();
            PieFigure {
                title: format!("Total success launches for site {}", launch_site),
                names: CLASS_COLUMN.to_string(),
                values: COUNT_COLUMN.to_string(),
                slices,
            }
        }
    };
    log::debug!(
        "[SLR] pie chart for {}: {} slices",
        site,
        figure.slices.len()
    );
    Ok(figure)
}

/// Scatter chart of payload mass against outcome, colored by booster
/// category, for launches inside `payload` (inclusive) and the selected site.
pub fn success_payload_scatter_chart(
    ctx: &LaunchContext,
    site: &SiteSelection,
    payload: &PayloadRange,
) -> anyhow::Result<ScatterFigure> {
    let rows = ctx
        .db()
        .query_payload_outcomes(site.site(), payload.low(), payload.high())?;
    let points: Vec<ScatterPoint> = rows
        .into_iter()
        .map(|r| ScatterPoint {
            x: r.payload_mass_kg,
            y: r.class as f64,
            color: r.booster_version_category,
            launch_site: r.launch_site,
            flight_number: r.flight_number,
            booster_version: r.booster_version,
        })
        .collect();
    let title = match site.site() {
        None => "Correlation between Payload and Success for all Sites".to_string(),
        Some(launch_site) => format!(
            "Correlation between Payload and Success for Site {}",
            launch_site
        ),
    };
    log::debug!(
        "[SLR] scatter chart for {} in [{}, {}]: {} points",
        site,
        payload.low(),
        payload.high(),
        points.len()
    );
    Ok(ScatterFigure {
        title,
        x_label: PAYLOAD_COLUMN.to_string(),
        y_label: CLASS_COLUMN.to_string(),
        color_label: BOOSTER_CATEGORY_COLUMN.to_string(),
        color_categories: first_seen_colors(&points),
        points,
    })
}

fn first_seen_colors(points: &[ScatterPoint]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for point in points {
        if !seen.contains(&point.color) {
            seen.push(point.color.clone());
        }
    }
    seen
}
