//! Services for the application layer.

pub mod dashboard_service;

pub use dashboard_service::{ChartPanel, ChartSettings, DashboardContext, DashboardService};
