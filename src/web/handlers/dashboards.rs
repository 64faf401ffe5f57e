//! Dashboards page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::application::services::{ChartPanel, DashboardContext};
use crate::error::AppError;
use crate::state::{AppState, SiteSettings};

/// Template for the dashboards page.
///
/// Renders `templates/dashboards.html`, one card per chart. Chart markup is
/// [`crate::domain::charts::TrustedMarkup`] and is the only value the template
/// emits unescaped.
#[derive(Template, WebTemplate)]
#[template(path = "dashboards.html")]
pub struct DashboardsTemplate {
    pub site_name: String,
    pub page_title: &'static str,
    pub plotly_js_url: String,
    pub panels: Vec<ChartPanel>,
}

impl DashboardsTemplate {
    pub fn new(site: &SiteSettings, context: DashboardContext) -> Self {
        Self {
            site_name: site.site_name.clone(),
            page_title: "Dashboards",
            plotly_js_url: site.plotly_js_url.clone(),
            panels: context.into_panels(),
        }
    }
}

/// Renders the dashboards page with freshly generated demo charts.
///
/// # Endpoint
///
/// `GET /dashboards`
///
/// # Errors
///
/// Returns `500 Internal Server Error` if chart data generation or rendering
/// fails.
pub async fn dashboards_handler(
    State(state): State<AppState>,
) -> Result<DashboardsTemplate, AppError> {
    let context = state.dashboard_service.render_dashboard()?;
    Ok(DashboardsTemplate::new(&state.site, context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{ChartSettings, DashboardService};
    use crate::domain::charts::ChartId;
    use crate::infrastructure::plotly::PlotlyRenderer;
    use std::sync::Arc;

    fn render(seed: u64) -> String {
        let service = DashboardService::new(
            Arc::new(PlotlyRenderer::new()),
            ChartSettings {
                height: 400,
                seed: Some(seed),
            },
        );
        let context = service.render_dashboard().unwrap();
        DashboardsTemplate::new(&SiteSettings::default(), context)
            .render()
            .unwrap()
    }

    #[test]
    fn test_chart_markup_is_not_escaped() {
        let html = render(1);

        for id in ChartId::ALL {
            assert!(html.contains(&format!(r#"<div id="chart-{id}""#)), "{id}");
        }
        assert!(!html.contains("&lt;div id="));
        assert!(!html.contains("&#60;div id="));
    }

    #[test]
    fn test_loads_plotly_once() {
        let html = render(2);
        assert_eq!(html.matches("plotly-2.35.2.min.js").count(), 1);
    }

    #[test]
    fn test_titles_rendered() {
        let html = render(3);
        for id in ChartId::ALL {
            assert!(html.contains(id.title()), "{}", id.title());
        }
    }
}
