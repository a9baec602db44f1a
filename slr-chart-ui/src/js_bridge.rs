//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js renderers live in `assets/js/*.js`, are embedded at compile
//! time and evaluated as globals (no ES modules) once D3 has loaded.

use serde::Serialize;
use slr_dash::{PieFigure, ScatterFigure};

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SLR JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop. Call once at startup.
///
/// The scripts are evaluated at global scope via indirect eval, then each
/// renderer is promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, PIE_CHART_JS, SCATTER_CHART_JS].join("\n");

    let store_js = match serde_json::to_string(&all_js) {
        Ok(scripts) => format!("window.__slrChartScripts = {};", scripts),
        Err(e) => {
            log::error!("[SLR] failed to serialize chart scripts: {}", e);
            return;
        }
    };
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__slrChartScripts);
                    delete window.__slrChartScripts;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__slrChartsReady = true;
                    console.log('SLR charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Escape a JSON document for embedding in a single-quoted JS string literal.
fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Give up waiting for a container after this many 100 ms polls.
const MAX_POLLS: u32 = 100;

/// Serialize `figure` and call `window.<render_fn>` once D3, the chart
/// scripts and the container element all exist. A newer call for the same
/// container cancels the older poll and replaces its chart.
fn render_when_ready<T: Serialize>(render_fn: &str, container_id: &str, figure: &T) {
    let figure_json = match serde_json::to_string(figure) {
        Ok(json) => json,
        Err(e) => {
            log::error!("[SLR] failed to serialize figure for {}: {}", container_id, e);
            return;
        }
    };
    call_js(&render_script(render_fn, container_id, &escape_for_js(&figure_json)));
}

/// JS that clears any pending poll for `container_id` before starting a new
/// one. The handle lives in `window.__slrPolls` keyed by container id.
fn render_script(render_fn: &str, container_id: &str, escaped: &str) -> String {
    format!(
        r#"
        (function() {{
            window.__slrPolls = window.__slrPolls || {{}};
            clearInterval(window.__slrPolls['{container_id}']);
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts += 1;
                if (window.__slrChartsReady &&
                    typeof window.{render_fn} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    delete window.__slrPolls['{container_id}'];
                    try {{
                        window.{render_fn}('{container_id}', '{escaped}');
                    }} catch(e) {{ console.error('[SLR] {render_fn} error:', e); }}
                }} else if (attempts >= {MAX_POLLS}) {{
                    clearInterval(poll);
                    delete window.__slrPolls['{container_id}'];
                    console.warn('[SLR] gave up waiting for #{container_id}');
                }}
            }}, 100);
            window.__slrPolls['{container_id}'] = poll;
        }})();
        "#,
    )
}

/// JS that cancels a pending render for `container_id` and empties it.
fn destroy_script(container_id: &str) -> String {
    format!(
        "if (window.__slrPolls) {{ clearInterval(window.__slrPolls['{id}']); delete window.__slrPolls['{id}']; }} \
         var el = document.getElementById('{id}'); if (el) el.innerHTML = '';",
        id = container_id
    )
}

/// Render the success pie chart into `container_id`.
pub fn render_pie_chart(container_id: &str, figure: &PieFigure) {
    render_when_ready("renderPieChart", container_id, figure);
}

/// Render the payload/outcome scatter chart into `container_id`.
pub fn render_scatter_chart(container_id: &str, figure: &ScatterFigure) {
    render_when_ready("renderScatterChart", container_id, figure);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_script(container_id));
}
