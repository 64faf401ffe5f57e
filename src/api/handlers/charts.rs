//! Handlers for chart descriptor endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::api::dto::charts::{ChartListResponse, ChartSummary};
use crate::domain::charts::ChartId;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the dashboard charts in display order.
///
/// # Endpoint
///
/// `GET /api/charts`
///
/// # Response
///
/// ```json
/// {
///   "charts": [
///     { "id": "line_chart", "title": "Revenue over time" },
///     { "id": "bar_chart", "title": "Sales by product category" }
///   ]
/// }
/// ```
pub async fn chart_list_handler() -> Json<ChartListResponse> {
    Json(ChartListResponse {
        charts: ChartId::ALL.into_iter().map(ChartSummary::from).collect(),
    })
}

/// Returns one chart as a plotly.js figure.
///
/// # Endpoint
///
/// `GET /api/charts/{id}`
///
/// # Response
///
/// `{"data": [...], "layout": {...}, "config": {...}}`, ready for
/// `Plotly.newPlot(el, figure.data, figure.layout, figure.config)`.
///
/// # Errors
///
/// - `404 Not Found` - Unknown chart id
/// - `500 Internal Server Error` - Data generation or serialization failed
pub async fn chart_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let chart_id: ChartId = id.parse().map_err(|e| {
        AppError::not_found(
            format!("{e}"),
            json!({ "id": id, "available": ChartId::ALL }),
        )
    })?;

    let chart = state.dashboard_service.chart(chart_id)?;
    let figure = state.renderer.figure(&chart)?;

    Ok(Json(figure))
}
