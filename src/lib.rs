//! # Dashboard Site
//!
//! Server-rendered marketing site for a dashboard product, built with Axum
//! and Askama. The dashboards page showcases demo charts generated from
//! synthetic data and rendered with plotly.js.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Chart descriptors, synthetic datasets, site content
//! - **Application Layer** ([`application`]) - Chart builders and the dashboard service
//! - **Infrastructure Layer** ([`infrastructure`]) - plotly.js markup renderer
//! - **API Layer** ([`api`]) - Health check and chart JSON endpoints
//! - **Web Layer** ([`web`]) - Home, dashboards and about pages
//!
//! ## Quick Start
//!
//! ```bash
//! export CHART_SEED=42   # Optional, makes charts deterministic
//! cargo run
//!
//! # Render the pages to ./public instead of serving them
//! cargo run --bin export -- --out-dir public
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ChartSettings, DashboardContext, DashboardService};
    pub use crate::domain::charts::{Chart, ChartId, ChartRenderer, TrustedMarkup};
    pub use crate::domain::entities::Feature;
    pub use crate::error::AppError;
    pub use crate::infrastructure::plotly::PlotlyRenderer;
    pub use crate::state::{AppState, SiteSettings};
}
