//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::application::services::DashboardService;
use crate::domain::charts::ChartRenderer;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: Charts cannot be built or rendered
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "charts": {
///       "status": "ok",
///       "message": "10 charts available"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    health_response(check_charts(&state.dashboard_service))
}

fn health_response(
    charts: CheckStatus,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let all_healthy = charts.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { charts },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Builds and renders the full dashboard once.
fn check_charts<R: ChartRenderer>(service: &DashboardService<R>) -> CheckStatus {
    match service.render_dashboard() {
        Ok(context) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} charts available", context.len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Chart generation failed: {}", e)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::ChartSettings;
    use crate::domain::charts::{ChartId, MockChartRenderer, RenderError};
    use crate::infrastructure::plotly::PlotlyRenderer;
    use std::sync::Arc;

    #[test]
    fn test_healthy_when_every_chart_renders() {
        let service = DashboardService::new(
            Arc::new(PlotlyRenderer::new()),
            ChartSettings::default(),
        );

        let check = check_charts(&service);
        assert_eq!(check.status, "ok");
        assert_eq!(
            check.message.as_deref(),
            Some(format!("{} charts available", ChartId::ALL.len()).as_str())
        );

        let Json(response) = health_response(check).unwrap();
        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_degraded_when_rendering_fails() {
        let mut renderer = MockChartRenderer::new();
        renderer
            .expect_render()
            .returning(|chart| Err(RenderError::NoSeries(chart.id.to_string())));
        let service = DashboardService::new(Arc::new(renderer), ChartSettings::default());

        let check = check_charts(&service);
        assert_eq!(check.status, "error");
        assert!(
            check
                .message
                .as_deref()
                .is_some_and(|m| m.starts_with("Chart generation failed"))
        );

        let (status, Json(response)) = health_response(check).unwrap_err();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.status, "degraded");
        assert_eq!(response.checks.charts.status, "error");
    }
}
