//! Series descriptors.
//!
//! Each trace type serializes to the plotly.js trace schema, tagged by
//! `"type"`. Optional attributes are omitted from the output when unset so the
//! client-side defaults apply.

use serde::Serialize;

/// Axis values: numbers or text labels.
///
/// Dates are carried as ISO `YYYY-MM-DD` labels, which plotly.js detects as
/// a date axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Values {
    Numbers(Vec<f64>),
    Labels(Vec<String>),
}

impl Values {
    pub fn labels<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Labels(items.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Numbers(v) => v.len(),
            Self::Labels(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for Values {
    fn from(v: Vec<f64>) -> Self {
        Self::Numbers(v)
    }
}

impl From<Vec<String>> for Values {
    fn from(v: Vec<String>) -> Self {
        Self::Labels(v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "markers")]
    Markers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[serde(rename = "v")]
    Vertical,
    #[serde(rename = "h")]
    Horizontal,
}

/// Waterfall step kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    Relative,
    Total,
}

/// One color for the whole trace or one per point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Color {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<&'static str>,
}

impl Line {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: Some(color.into()),
            width: Some(width),
            shape: None,
        }
    }

    pub fn smooth(mut self) -> Self {
        self.shape = Some("spline");
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Per-slice colors (pie and treemap use `colors`, not `color`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizemode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizeref: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Marker {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(Color::Single(color.into())),
            ..Self::default()
        }
    }

    pub fn per_point(colors: Vec<String>) -> Self {
        Self {
            color: Some(Color::PerPoint(colors)),
            ..Self::default()
        }
    }

    pub fn slices(colors: Vec<String>) -> Self {
        Self {
            colors: Some(colors),
            ..Self::default()
        }
    }

    /// Bubble sizing by area, scaled so `scale_max` maps to `max_px`.
    ///
    /// Traces sharing one bubble scale must pass the same `scale_max`,
    /// usually the largest size across all of them.
    pub fn bubbles(mut self, sizes: Vec<f64>, scale_max: f64, max_px: f64) -> Self {
        if scale_max > 0.0 && scale_max.is_finite() {
            self.sizeref = Some(2.0 * scale_max / (max_px * max_px));
        }
        self.size = Some(sizes);
        self.sizemode = Some("area");
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// Line, marker or stacked-area series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Values,
    pub y: Values,
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stackgroup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

impl ScatterTrace {
    pub fn new(x: impl Into<Values>, y: impl Into<Values>, mode: Mode) -> Self {
        Self {
            name: None,
            x: x.into(),
            y: y.into(),
            mode,
            line: None,
            marker: None,
            stackgroup: None,
            yaxis: None,
            text: None,
            hovertemplate: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn line(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Stacks this series on top of others sharing the same group.
    pub fn stack(mut self, group: impl Into<String>) -> Self {
        self.stackgroup = Some(group.into());
        self
    }

    /// Plots against the layout's `yaxis2`.
    pub fn on_secondary_axis(mut self) -> Self {
        self.yaxis = Some("y2");
        self
    }

    pub fn text(mut self, text: Vec<String>) -> Self {
        self.text = Some(text);
        self
    }

    pub fn hover(mut self, template: impl Into<String>) -> Self {
        self.hovertemplate = Some(template.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Values,
    pub y: Values,
    pub orientation: Orientation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

impl BarTrace {
    pub fn vertical(categories: Values, values: Vec<f64>) -> Self {
        Self {
            name: None,
            x: categories,
            y: Values::Numbers(values),
            orientation: Orientation::Vertical,
            marker: None,
            text: None,
            hovertemplate: None,
        }
    }

    /// Bars growing along x, one per category on the y axis.
    pub fn horizontal(categories: Values, values: Vec<f64>) -> Self {
        Self {
            name: None,
            x: Values::Numbers(values),
            y: categories,
            orientation: Orientation::Horizontal,
            marker: None,
            text: None,
            hovertemplate: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Labels drawn on the bars.
    pub fn text(mut self, text: Vec<String>) -> Self {
        self.text = Some(text);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn hover(mut self, template: impl Into<String>) -> Self {
        self.hovertemplate = Some(template.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

impl PieTrace {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            labels,
            values,
            hole: None,
            marker: None,
            hovertemplate: None,
        }
    }

    /// Turns the pie into a donut; `fraction` is the hole radius.
    pub fn donut(mut self, fraction: f64) -> Self {
        self.hole = Some(fraction);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn hover(mut self, template: impl Into<String>) -> Self {
        self.hovertemplate = Some(template.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapTrace {
    /// Row-major matrix: `z[row][column]`, rows along y.
    pub z: Vec<Vec<f64>>,
    pub x: Values,
    pub y: Values,
    pub colorscale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

impl HeatmapTrace {
    pub fn new(z: Vec<Vec<f64>>, x: Values, y: Values) -> Self {
        Self {
            z,
            x,
            y,
            colorscale: "Viridis".to_string(),
            hovertemplate: None,
        }
    }

    pub fn hover(mut self, template: impl Into<String>) -> Self {
        self.hovertemplate = Some(template.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreemapTrace {
    pub labels: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textinfo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

impl TreemapTrace {
    /// Single-level treemap: every label hangs off the root.
    pub fn flat(labels: Vec<String>, values: Vec<f64>) -> Self {
        let parents = vec![String::new(); labels.len()];
        Self {
            labels,
            parents,
            values,
            textinfo: None,
            marker: None,
            hovertemplate: None,
        }
    }

    pub fn textinfo(mut self, info: impl Into<String>) -> Self {
        self.textinfo = Some(info.into());
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn hover(mut self, template: impl Into<String>) -> Self {
        self.hovertemplate = Some(template.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelTrace {
    /// Stage labels, top to bottom.
    pub y: Vec<String>,
    pub x: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textinfo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

impl FunnelTrace {
    pub fn new(stages: Vec<String>, counts: Vec<f64>) -> Self {
        Self {
            y: stages,
            x: counts,
            textinfo: None,
            marker: None,
            hovertemplate: None,
        }
    }

    pub fn textinfo(mut self, info: impl Into<String>) -> Self {
        self.textinfo = Some(info.into());
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn hover(mut self, template: impl Into<String>) -> Self {
        self.hovertemplate = Some(template.into());
        self
    }
}

/// Marker override for one class of waterfall steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepStyle {
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub measure: Vec<Measure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increasing: Option<StepStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decreasing: Option<StepStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<StepStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

impl WaterfallTrace {
    pub fn new(steps: Vec<String>, deltas: Vec<f64>, measure: Vec<Measure>) -> Self {
        Self {
            x: steps,
            y: deltas,
            measure,
            increasing: None,
            decreasing: None,
            totals: None,
            hovertemplate: None,
        }
    }

    pub fn colors(mut self, increasing: &str, decreasing: &str, total: &str) -> Self {
        self.increasing = Some(StepStyle {
            marker: Marker::color(increasing),
        });
        self.decreasing = Some(StepStyle {
            marker: Marker::color(decreasing),
        });
        self.totals = Some(StepStyle {
            marker: Marker::color(total),
        });
        self
    }

    pub fn hover(mut self, template: impl Into<String>) -> Self {
        self.hovertemplate = Some(template.into());
        self
    }
}

/// Any series the dashboard knows how to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Bar(BarTrace),
    Pie(PieTrace),
    Heatmap(HeatmapTrace),
    Treemap(TreemapTrace),
    Funnel(FunnelTrace),
    Waterfall(WaterfallTrace),
}

impl Trace {
    /// Number of data points (cells for heatmaps).
    pub fn point_count(&self) -> usize {
        match self {
            Self::Scatter(t) => t.y.len(),
            Self::Bar(t) => t.x.len().min(t.y.len()),
            Self::Pie(t) => t.values.len(),
            Self::Heatmap(t) => t.z.iter().map(Vec::len).sum(),
            Self::Treemap(t) => t.values.len(),
            Self::Funnel(t) => t.x.len(),
            Self::Waterfall(t) => t.y.len(),
        }
    }

    /// Checks that parallel arrays line up.
    ///
    /// Returns a description of the first mismatch found.
    pub fn shape_mismatch(&self) -> Option<String> {
        let pair = |what: &str, a: usize, b: usize| {
            (a != b).then(|| format!("{what}: {a} vs {b}"))
        };

        match self {
            Self::Scatter(t) => pair("x/y", t.x.len(), t.y.len()),
            Self::Bar(t) => pair("x/y", t.x.len(), t.y.len()),
            Self::Pie(t) => pair("labels/values", t.labels.len(), t.values.len()),
            Self::Heatmap(t) => pair("rows/y", t.z.len(), t.y.len()).or_else(|| {
                t.z.iter()
                    .find_map(|row| pair("columns/x", row.len(), t.x.len()))
            }),
            Self::Treemap(t) => pair("labels/values", t.labels.len(), t.values.len())
                .or_else(|| pair("labels/parents", t.labels.len(), t.parents.len())),
            Self::Funnel(t) => pair("stages/counts", t.y.len(), t.x.len()),
            Self::Waterfall(t) => pair("steps/deltas", t.x.len(), t.y.len())
                .or_else(|| pair("steps/measure", t.x.len(), t.measure.len())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scatter(_) => "scatter",
            Self::Bar(_) => "bar",
            Self::Pie(_) => "pie",
            Self::Heatmap(_) => "heatmap",
            Self::Treemap(_) => "treemap",
            Self::Funnel(_) => "funnel",
            Self::Waterfall(_) => "waterfall",
        }
    }
}

impl From<ScatterTrace> for Trace {
    fn from(t: ScatterTrace) -> Self {
        Self::Scatter(t)
    }
}

impl From<BarTrace> for Trace {
    fn from(t: BarTrace) -> Self {
        Self::Bar(t)
    }
}

impl From<PieTrace> for Trace {
    fn from(t: PieTrace) -> Self {
        Self::Pie(t)
    }
}

impl From<HeatmapTrace> for Trace {
    fn from(t: HeatmapTrace) -> Self {
        Self::Heatmap(t)
    }
}

impl From<TreemapTrace> for Trace {
    fn from(t: TreemapTrace) -> Self {
        Self::Treemap(t)
    }
}

impl From<FunnelTrace> for Trace {
    fn from(t: FunnelTrace) -> Self {
        Self::Funnel(t)
    }
}

impl From<WaterfallTrace> for Trace {
    fn from(t: WaterfallTrace) -> Self {
        Self::Waterfall(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trace_serializes_with_type_tag() {
        let trace: Trace = PieTrace::new(vec!["a".into(), "b".into()], vec![1.0, 2.0])
            .donut(0.4)
            .into();

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["type"], "pie");
        assert_eq!(value["hole"], 0.4);
        assert!(value.get("marker").is_none());
    }

    #[test]
    fn test_scatter_mode_and_stack() {
        let trace: Trace = ScatterTrace::new(vec![1.0, 2.0], vec![3.0, 4.0], Mode::Lines)
            .stack("one")
            .into();

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["mode"], "lines");
        assert_eq!(value["stackgroup"], "one");
        assert_eq!(value["x"], json!([1.0, 2.0]));
    }

    #[test]
    fn test_horizontal_bar_swaps_axes() {
        let bar = BarTrace::horizontal(Values::labels(["p1", "p2"]), vec![10.0, 20.0]);

        assert_eq!(bar.y, Values::labels(["p1", "p2"]));
        assert_eq!(bar.x, Values::Numbers(vec![10.0, 20.0]));

        let value = serde_json::to_value(Trace::from(bar)).unwrap();
        assert_eq!(value["orientation"], "h");
    }

    #[test]
    fn test_shape_mismatch_detected() {
        let ok: Trace = ScatterTrace::new(vec![1.0], vec![2.0], Mode::Lines).into();
        assert!(ok.shape_mismatch().is_none());

        let bad: Trace = ScatterTrace::new(vec![1.0, 2.0], vec![2.0], Mode::Lines).into();
        assert_eq!(bad.shape_mismatch().as_deref(), Some("x/y: 2 vs 1"));

        let heatmap: Trace = HeatmapTrace::new(
            vec![vec![1.0, 2.0], vec![3.0]],
            Values::Numbers(vec![0.0, 1.0]),
            Values::labels(["a", "b"]),
        )
        .into();
        assert_eq!(heatmap.shape_mismatch().as_deref(), Some("columns/x: 1 vs 2"));
    }

    #[test]
    fn test_flat_treemap_has_root_parents() {
        let t = TreemapTrace::flat(vec!["a".into(), "b".into()], vec![1.0, 2.0]);
        assert_eq!(t.parents, vec![String::new(), String::new()]);
    }

    #[test]
    fn test_bubble_sizeref() {
        let marker = Marker::default().bubbles(vec![100.0, 500.0], 500.0, 40.0);
        assert_eq!(marker.sizemode, Some("area"));
        let sizeref = marker.sizeref.unwrap();
        assert!((sizeref - 2.0 * 500.0 / 1600.0).abs() < 1e-9);
    }

    #[test]
    fn test_bubble_scale_ignores_own_maximum() {
        let small = Marker::default().bubbles(vec![10.0, 20.0], 500.0, 40.0);
        let large = Marker::default().bubbles(vec![300.0, 500.0], 500.0, 40.0);
        assert_eq!(small.sizeref, large.sizeref);

        let empty = Marker::default().bubbles(vec![], 0.0, 40.0);
        assert_eq!(empty.sizeref, None);
    }

    #[test]
    fn test_point_count() {
        let heatmap: Trace = HeatmapTrace::new(
            vec![vec![0.0; 24]; 7],
            Values::Numbers(vec![0.0; 24]),
            Values::labels(["a"; 7]),
        )
        .into();
        assert_eq!(heatmap.point_count(), 168);
    }
}
