//! API route configuration.

use crate::api::handlers::{chart_handler, chart_list_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /charts`      - Chart ids and titles in dashboard order
/// - `GET /charts/{id}` - plotly.js figure for one chart
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/charts", get(chart_list_handler))
        .route("/charts/{id}", get(chart_handler))
}
