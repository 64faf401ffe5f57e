//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`plotly`] - [`crate::domain::charts::ChartRenderer`] emitting plotly.js markup

pub mod plotly;
