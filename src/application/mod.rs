//! Application layer building the dashboards page.
//!
//! # Modules
//!
//! - [`charts`] - One builder per dashboard chart, wiring datasets into descriptors
//! - [`services::dashboard_service::DashboardService`] - Builds and renders the full chart set

pub mod charts;
pub mod services;
