//! plotly.js markup renderer.

use serde::Serialize;
use tracing::debug;

use crate::domain::charts::{Chart, ChartRenderer, RenderError, TrustedMarkup, check_chart};

/// Client-side plotly.js options attached to every figure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
    pub responsive: bool,
    pub displaylogo: bool,
    pub mode_bar_buttons_to_remove: Vec<&'static str>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            responsive: true,
            displaylogo: false,
            mode_bar_buttons_to_remove: vec!["lasso2d", "select2d"],
        }
    }
}

#[derive(Serialize)]
struct Figure<'a> {
    #[serde(flatten)]
    chart: &'a Chart,
    config: &'a PlotConfig,
}

/// Renders charts as a `<div>` plus an inline `Plotly.newPlot` script.
///
/// The page must load plotly.js itself; fragments only reference the global
/// `Plotly` object. Element ids are `<prefix>-<chart key>`, so they are unique
/// within a page as long as chart keys are.
///
/// # Output
///
/// ```html
/// <div id="chart-line_chart" class="plotly-graph-div" style="height:400px; width:100%;"></div>
/// <script type="text/javascript">...Plotly.newPlot("chart-line_chart", ...)...</script>
/// ```
#[derive(Debug, Clone)]
pub struct PlotlyRenderer {
    prefix: String,
    config: PlotConfig,
}

impl PlotlyRenderer {
    pub const DEFAULT_PREFIX: &'static str = "chart";

    pub fn new() -> Self {
        Self {
            prefix: Self::DEFAULT_PREFIX.to_string(),
            config: PlotConfig::default(),
        }
    }

    /// Uses a custom element id prefix.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidPrefix`] unless the prefix starts with an
    /// ASCII letter and contains only ASCII alphanumerics, `-` and `_`.
    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self, RenderError> {
        let prefix = prefix.into();

        let starts_with_letter = prefix
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());
        let valid_chars = prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !starts_with_letter || !valid_chars {
            return Err(RenderError::InvalidPrefix(prefix));
        }

        Ok(Self {
            prefix,
            config: PlotConfig::default(),
        })
    }

    /// The plotly.js figure (`{data, layout, config}`) as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the chart has no series, mismatched series,
    /// or fails to serialize.
    pub fn figure(&self, chart: &Chart) -> Result<serde_json::Value, RenderError> {
        check_chart(chart)?;

        Ok(serde_json::to_value(Figure {
            chart,
            config: &self.config,
        })?)
    }
}

impl Default for PlotlyRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer for PlotlyRenderer {
    fn render(&self, chart: &Chart) -> Result<TrustedMarkup, RenderError> {
        check_chart(chart)?;

        let figure = Figure {
            chart,
            config: &self.config,
        };
        let json = escape_for_script(&serde_json::to_string(&figure)?);
        let id = self.element_id(chart);

        debug!(chart = %chart.id, bytes = json.len(), "Rendered chart figure");

        Ok(TrustedMarkup::from_renderer(format!(
            concat!(
                r#"<div id="{id}" class="plotly-graph-div" style="height:{height}px; width:100%;"></div>"#,
                "\n",
                r#"<script type="text/javascript">"#,
                "window.PLOTLYENV = window.PLOTLYENV || {{}};",
                r#"if (document.getElementById("{id}")) {{"#,
                "const figure = {json};",
                r#"Plotly.newPlot("{id}", figure.data, figure.layout, figure.config);"#,
                "}}</script>"
            ),
            id = id,
            height = chart.layout.height,
            json = json,
        )))
    }

    fn element_id(&self, chart: &Chart) -> String {
        format!("{}-{}", self.prefix, chart.id)
    }
}

/// Escapes characters that could end the surrounding `<script>` element.
///
/// In serialized JSON these only occur inside string literals, where the
/// `\uXXXX` form is equivalent for both JSON and JavaScript.
fn escape_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}
