//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js scatter chart lives in `assets/js/scatter-chart.js`, embedded
//! at compile time and evaluated as a global (no ES modules). Chart clicks
//! travel back into Dioxus through a hidden input: the JS writes the clicked
//! point as JSON into the sink element and dispatches a bubbling `input`
//! event, which Dioxus picks up through its delegated listener.

use serde::Serialize;
use wqv_series::rolling::RollingPoint;
use wqv_series::series::SeriesPoint;

// Embedded D3 chart code
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Everything the scatter renderer needs, serialized as one JSON payload.
#[derive(Debug, Serialize)]
pub struct ScatterPayload<'a> {
    pub points: &'a [SeriesPoint],
    pub rolling: Option<&'a [RollingPoint]>,
    /// Y-axis unit label (µg/L or NTU).
    pub unit: &'a str,
    /// Marker fill color.
    pub color: &'a str,
    /// Series label for the tooltip.
    pub label: &'a str,
    /// DOM id of the hidden input receiving click events.
    pub sink_id: &'a str,
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WQV JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// The scatter chart is declared with `function`; to make it globally
/// accessible it is evaluated at global scope via indirect eval once D3 is
/// ready and then explicitly promoted to `window.*`.
pub fn init_charts() {
    let store_js = format!(
        "window.__wqvChartScripts = {};",
        serde_json::to_string(SCATTER_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__wqvChartScripts);
                    delete window.__wqvChartScripts;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    window.__wqvChartsReady = true;
                    console.log('WQV chart initialized');
                }
            }, 50);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render (or re-render) the scatter chart into the given container.
pub fn render_scatter(container_id: &str, payload: &ScatterPayload<'_>) {
    let payload_json = match serde_json::to_string(payload) {
        Ok(json) => json,
        Err(e) => {
            log::error!("failed to serialize chart payload: {}", e);
            return;
        }
    };
    // Double-encode: the renderer takes the payload as a JSON string.
    let code = format!(
        "window.renderScatterChart && window.renderScatterChart({}, {});",
        serde_json::to_string(container_id).unwrap_or_default(),
        serde_json::to_string(&payload_json).unwrap_or_default(),
    );
    call_js(&code);
}

/// Clear a rendered chart (e.g. when the selection has no data).
pub fn clear_chart(container_id: &str) {
    let code = format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        serde_json::to_string(container_id).unwrap_or_default(),
    );
    call_js(&code);
}
