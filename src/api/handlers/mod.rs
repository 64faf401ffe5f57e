//! HTTP request handlers for API endpoints.

pub mod charts;
pub mod health;

pub use charts::{chart_handler, chart_list_handler};
pub use health::health_handler;
