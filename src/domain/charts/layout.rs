//! Chart layout attributes and the shared site theme.

use serde::Serialize;

use super::palette;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub x: f64,
    pub xanchor: &'static str,
}

impl Title {
    pub fn centered(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x: 0.5,
            xanchor: "center",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    pub gridcolor: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automargin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorange: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            title: None,
            gridcolor: palette::GRID,
            tickformat: None,
            automargin: None,
            autorange: None,
            overlaying: None,
            side: None,
            showgrid: None,
        }
    }
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Some(AxisTitle { text: text.into() }),
            ..Self::default()
        }
    }

    /// Right-hand y axis drawn over the primary one, without its own grid.
    pub fn secondary(text: impl Into<String>) -> Self {
        Self {
            overlaying: Some("y"),
            side: Some("right"),
            showgrid: Some(false),
            ..Self::titled(text)
        }
    }

    pub fn tickformat(mut self, format: impl Into<String>) -> Self {
        self.tickformat = Some(format.into());
        self
    }

    /// Lists categories top to bottom in data order.
    pub fn reversed(mut self) -> Self {
        self.autorange = Some("reversed");
        self.automargin = Some(true);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub family: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

/// Figure-level layout. Everything not set here falls back to plotly.js defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<Axis>,
    pub font: Font,
    pub plot_bgcolor: &'static str,
    pub paper_bgcolor: &'static str,
    pub height: u32,
    pub colorway: Vec<String>,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<&'static str>,
}

impl Layout {
    /// Site theme: centered title, transparent background, light grid lines.
    pub fn themed(title: impl Into<String>, height: u32) -> Self {
        Self {
            title: Title::centered(title),
            xaxis: None,
            yaxis: None,
            yaxis2: None,
            font: Font {
                family: palette::FONT_FAMILY,
            },
            plot_bgcolor: palette::TRANSPARENT,
            paper_bgcolor: palette::TRANSPARENT,
            height,
            colorway: palette::series_colors(palette::SERIES.len()),
            margin: Margin {
                l: 60,
                r: 30,
                t: 60,
                b: 50,
            },
            showlegend: None,
            hovermode: None,
        }
    }

    pub fn x_axis(mut self, axis: Axis) -> Self {
        self.xaxis = Some(axis);
        self
    }

    pub fn y_axis(mut self, axis: Axis) -> Self {
        self.yaxis = Some(axis);
        self
    }

    pub fn y2_axis(mut self, axis: Axis) -> Self {
        self.yaxis2 = Some(axis);
        self
    }

    pub fn legend(mut self, show: bool) -> Self {
        self.showlegend = Some(show);
        self
    }

    /// Shows one tooltip for all series at the hovered x position.
    pub fn unified_hover(mut self) -> Self {
        self.hovermode = Some("x unified");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themed_layout() {
        let layout = Layout::themed("Revenue", 400).y_axis(Axis::titled("USD"));
        let value = serde_json::to_value(&layout).unwrap();

        assert_eq!(value["title"]["text"], "Revenue");
        assert_eq!(value["title"]["x"], 0.5);
        assert_eq!(value["paper_bgcolor"], palette::TRANSPARENT);
        assert_eq!(value["plot_bgcolor"], palette::TRANSPARENT);
        assert_eq!(value["yaxis"]["gridcolor"], palette::GRID);
        assert_eq!(value["yaxis"]["title"]["text"], "USD");
        assert_eq!(value["height"], 400);
        assert!(value.get("xaxis").is_none());
        assert_eq!(value["colorway"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_secondary_axis() {
        let layout = Layout::themed("Orders", 400).y2_axis(Axis::secondary("Orders"));
        let value = serde_json::to_value(&layout).unwrap();

        assert_eq!(value["yaxis2"]["overlaying"], "y");
        assert_eq!(value["yaxis2"]["side"], "right");
        assert_eq!(value["yaxis2"]["showgrid"], false);
    }
}
