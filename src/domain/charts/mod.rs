//! Chart descriptors: series, layout, identifiers and the renderer seam.
//!
//! Descriptors are plain data built per request. A [`ChartRenderer`] turns a
//! [`Chart`] into [`TrustedMarkup`], the only HTML type templates emit
//! unescaped.

mod chart;
mod layout;
mod markup;
pub mod palette;
mod renderer;
mod trace;

pub use chart::{Chart, ChartId, ParseChartIdError};
pub use layout::{Axis, AxisTitle, Font, Layout, Margin, Title};
pub use markup::TrustedMarkup;
pub use renderer::{ChartRenderer, RenderError, check_chart};
pub use trace::{
    BarTrace, Color, FunnelTrace, HeatmapTrace, Line, Marker, Measure, Mode, Orientation,
    PieTrace, ScatterTrace, StepStyle, Trace, TreemapTrace, Values, WaterfallTrace,
};

#[cfg(test)]
pub use renderer::MockChartRenderer;
