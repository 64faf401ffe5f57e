//! plotly.js rendering backend.
//!
//! Provides [`PlotlyRenderer`], the [`crate::domain::charts::ChartRenderer`]
//! used by the dashboards page.

mod renderer;

pub use renderer::{PlotConfig, PlotlyRenderer};
