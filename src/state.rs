//! Shared application state injected into every handler.

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{ChartSettings, DashboardService};
use crate::config::{Config, DEFAULT_PLOTLY_JS_URL};
use crate::infrastructure::plotly::PlotlyRenderer;

/// Site-wide values every page template needs.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub site_name: String,
    pub plotly_js_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Dashly".to_string(),
            plotly_js_url: DEFAULT_PLOTLY_JS_URL.to_string(),
        }
    }
}

impl From<&Config> for SiteSettings {
    fn from(config: &Config) -> Self {
        Self {
            site_name: config.site_name.clone(),
            plotly_js_url: config.plotly_js_url.clone(),
        }
    }
}

/// Immutable state shared across requests. Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: Arc<DashboardService<PlotlyRenderer>>,
    pub renderer: Arc<PlotlyRenderer>,
    pub site: Arc<SiteSettings>,
}

impl AppState {
    /// State with the default `chart-` element id prefix.
    pub fn new(site: SiteSettings, chart_settings: ChartSettings) -> Self {
        Self::with_renderer(site, chart_settings, PlotlyRenderer::new())
    }

    pub fn with_renderer(
        site: SiteSettings,
        chart_settings: ChartSettings,
        renderer: PlotlyRenderer,
    ) -> Self {
        let renderer = Arc::new(renderer);
        let dashboard_service = Arc::new(DashboardService::new(renderer.clone(), chart_settings));

        Self {
            dashboard_service,
            renderer,
            site: Arc::new(site),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the configured chart id prefix is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_renderer(
            SiteSettings::from(config),
            config.chart_settings(),
            config.renderer()?,
        ))
    }
}
