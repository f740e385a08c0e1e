//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart functions live in `assets/js/*.js`, are embedded at compile
//! time and evaluated as globals once D3 has loaded. Figures cross the bridge
//! as JSON strings.

use spacex_figures::Figure;

// Embed the D3 chart scripts at compile time
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SpaceX JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts once D3 is available.
///
/// The scripts are stashed on `window` and evaluated at global scope from the
/// polling callback, then their entry points are promoted to `window.*`.
pub fn init_charts() {
    let all_js = [PIE_CHART_JS, SCATTER_CHART_JS].join("\n");

    let store_js = format!(
        "window.__spacexChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__spacexChartsReady) { return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined' && window.__spacexChartScripts) {
                    clearInterval(waitForD3);
                    (0, eval)(window.__spacexChartScripts);
                    delete window.__spacexChartScripts;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    window.__spacexChartsReady = true;
                    console.log('SpaceX charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Name of the global render function for a figure.
fn renderer_for(figure: &Figure) -> &'static str {
    match figure {
        Figure::Pie(_) => "renderPieChart",
        Figure::Scatter(_) => "renderScatterChart",
    }
}

/// Replace the contents of `container_id` with `figure`.
///
/// Polls until the chart scripts are initialized and the container exists,
/// since the first callbacks fire before either is guaranteed.
pub fn render_figure(container_id: &str, figure: &Figure) -> anyhow::Result<()> {
    let renderer = renderer_for(figure);
    // Double-encode so the figure arrives as a JS string literal.
    let figure_literal = serde_json::to_string(&figure.to_json()?)?;
    let id_literal = serde_json::to_string(container_id)?;
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__spacexChartsReady &&
                    typeof window.{renderer} !== 'undefined' &&
                    document.getElementById({id_literal})) {{
                    clearInterval(poll);
                    try {{
                        window.{renderer}({id_literal}, {figure_literal});
                    }} catch(e) {{ console.error('[SpaceX] {renderer} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
    Ok(())
}

/// Empty the chart container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        serde_json::to_string(container_id).unwrap_or_default()
    ));
}
