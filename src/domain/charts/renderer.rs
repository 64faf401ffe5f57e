//! Renderer trait turning chart descriptors into embeddable markup.

use super::{Chart, TrustedMarkup};

/// Errors that can occur while rendering a chart.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Chart {0} has no series")]
    NoSeries(String),

    #[error("Chart {chart} has mismatched series ({detail})")]
    ShapeMismatch { chart: String, detail: String },

    #[error("Invalid element id prefix: {0:?}")]
    InvalidPrefix(String),

    #[error("Failed to serialize figure: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Converts a chart descriptor into an HTML fragment.
///
/// Implementations must produce markup that is safe to embed unescaped and
/// give each chart an element id unique within one page.
///
/// # Implementations
///
/// - [`crate::infrastructure::plotly::PlotlyRenderer`] - `<div>` plus inline plotly.js script
#[cfg_attr(test, mockall::automock)]
pub trait ChartRenderer: Send + Sync {
    /// Renders one chart.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the descriptor is malformed or cannot be
    /// serialized.
    fn render(&self, chart: &Chart) -> Result<TrustedMarkup, RenderError>;

    /// HTML element id the chart will be mounted on.
    fn element_id(&self, chart: &Chart) -> String;
}

/// Rejects descriptors the client-side library would silently mis-draw.
pub fn check_chart(chart: &Chart) -> Result<(), RenderError> {
    if chart.traces.is_empty() || chart.traces.iter().all(|t| t.point_count() == 0) {
        return Err(RenderError::NoSeries(chart.id.to_string()));
    }

    for trace in &chart.traces {
        if let Some(detail) = trace.shape_mismatch() {
            return Err(RenderError::ShapeMismatch {
                chart: chart.id.to_string(),
                detail,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::charts::{ChartId, Layout, Mode, ScatterTrace};

    #[test]
    fn test_check_chart_rejects_empty() {
        let chart = Chart::new(ChartId::Revenue, Layout::themed("Empty", 400));
        assert!(matches!(check_chart(&chart), Err(RenderError::NoSeries(_))));

        let chart = chart.trace(ScatterTrace::new(Vec::<f64>::new(), Vec::<f64>::new(), Mode::Lines));
        assert!(matches!(check_chart(&chart), Err(RenderError::NoSeries(_))));
    }

    #[test]
    fn test_check_chart_rejects_mismatch() {
        let chart = Chart::new(ChartId::Revenue, Layout::themed("Bad", 400))
            .trace(ScatterTrace::new(vec![1.0, 2.0, 3.0], vec![1.0], Mode::Lines));

        let err = check_chart(&chart).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Chart line_chart has mismatched series (x/y: 3 vs 1)"
        );
    }

    #[test]
    fn test_check_chart_accepts_valid() {
        let chart = Chart::new(ChartId::Revenue, Layout::themed("Ok", 400))
            .trace(ScatterTrace::new(vec![1.0, 2.0], vec![3.0, 4.0], Mode::Lines));

        assert!(check_chart(&chart).is_ok());
    }
}
