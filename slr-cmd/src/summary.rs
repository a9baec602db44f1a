//! Plain-text dataset summary.

use slr_dash::LaunchContext;
use slr_launch::LAUNCH_SITES;
use std::fmt::Write;

/// Record count, payload bounds and a per-site table of launches and
/// successes. Warns when the hardcoded dropdown sites and the sites in the
/// data disagree.
pub fn render_summary(ctx: &LaunchContext) -> anyhow::Result<String> {
    let summaries = ctx.site_summaries()?;
    let mut out = String::new();

    writeln!(out, "Launch records: {}", ctx.record_count())?;
    writeln!(
        out,
        "Payload mass (kg): {} to {}",
        ctx.payload_min(),
        ctx.payload_max()
    )?;
    writeln!(out)?;
    writeln!(out, "{:<16} {:>8} {:>9} {:>8}", "Launch Site", "Launches", "Successes", "Rate")?;
    for s in &summaries {
        let rate = if s.launches > 0 {
            100.0 * s.successes as f64 / s.launches as f64
        } else {
            0.0
        };
        writeln!(
            out,
            "{:<16} {:>8} {:>9} {:>7.1}%",
            s.launch_site, s.launches, s.successes, rate
        )?;
    }

    for site in LAUNCH_SITES {
        if !summaries.iter().any(|s| s.launch_site == site) {
            log::warn!("Dropdown site {} has no launches in the dataset", site);
        }
    }
    for s in &summaries {
        if !LAUNCH_SITES.contains(&s.launch_site.as_str()) {
            log::warn!("Site {} is in the dataset but not in the dropdown", s.launch_site);
        }
    }

    Ok(out)
}
