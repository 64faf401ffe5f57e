//! Dashboards page assembly: build every chart, render it, key it by id.

use std::sync::Arc;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::application::charts;
use crate::domain::charts::{Chart, ChartId, ChartRenderer, TrustedMarkup};
use crate::error::AppError;

/// Chart sizing and randomness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSettings {
    /// Chart height in pixels.
    pub height: u32,
    /// Fixed RNG seed; `None` draws fresh data on every request.
    pub seed: Option<u64>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            height: 400,
            seed: None,
        }
    }
}

/// One rendered chart on the dashboards page.
#[derive(Debug, Clone)]
pub struct ChartPanel {
    pub id: ChartId,
    pub title: String,
    pub element_id: String,
    pub markup: TrustedMarkup,
}

/// Template context of the dashboards page: rendered charts keyed by chart id,
/// in dashboard order.
#[derive(Debug, Clone, Default)]
pub struct DashboardContext {
    panels: Vec<ChartPanel>,
}

impl DashboardContext {
    pub fn panels(&self) -> &[ChartPanel] {
        &self.panels
    }

    pub fn into_panels(self) -> Vec<ChartPanel> {
        self.panels
    }

    /// Markup for a chart key such as `"line_chart"`.
    pub fn get(&self, key: &str) -> Option<&TrustedMarkup> {
        self.panels
            .iter()
            .find(|p| p.id.as_str() == key)
            .map(|p| &p.markup)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.panels.iter().map(|p| p.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

/// Service building the demo charts of the dashboards page.
///
/// Stateless between calls: every call generates its own data. With a seed,
/// each chart draws from its own generator seeded from `seed` and the chart
/// position, so a chart looks the same whether built alone or with the rest.
pub struct DashboardService<R: ChartRenderer> {
    renderer: Arc<R>,
    settings: ChartSettings,
}

impl<R: ChartRenderer> DashboardService<R> {
    /// Creates a new dashboard service.
    pub fn new(renderer: Arc<R>, settings: ChartSettings) -> Self {
        Self { renderer, settings }
    }

    fn rng_for(&self, id: ChartId) -> StdRng {
        match self.settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(id as u64)),
            None => StdRng::from_os_rng(),
        }
    }

    /// Builds the descriptor of a single chart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if its data cannot be generated.
    pub fn chart(&self, id: ChartId) -> Result<Chart, AppError> {
        let mut rng = self.rng_for(id);
        Ok(charts::build_chart(id, &mut rng, self.settings.height)?)
    }

    /// Builds every chart descriptor in dashboard order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on the first chart that fails.
    pub fn charts(&self) -> Result<Vec<Chart>, AppError> {
        ChartId::ALL.into_iter().map(|id| self.chart(id)).collect()
    }

    /// Builds and renders every chart into the dashboards page context.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if data generation or rendering fails.
    /// Nothing is retried and no partial page is produced.
    pub fn render_dashboard(&self) -> Result<DashboardContext, AppError> {
        let started = Instant::now();
        let mut panels = Vec::with_capacity(ChartId::ALL.len());

        for chart in self.charts()? {
            let markup = self.renderer.render(&chart)?;
            metrics::counter!("dashboard_charts_rendered_total", "chart" => chart.id.as_str())
                .increment(1);

            panels.push(ChartPanel {
                id: chart.id,
                title: chart.title().to_string(),
                element_id: self.renderer.element_id(&chart),
                markup,
            });
        }

        let elapsed = started.elapsed();
        metrics::histogram!("dashboard_render_seconds").record(elapsed.as_secs_f64());
        debug!(
            charts = panels.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Dashboard rendered"
        );

        Ok(DashboardContext { panels })
    }
}
