//! Site page route configuration.

use crate::state::AppState;
use crate::web::handlers::{about_handler, dashboards_handler, home_handler};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Landing page with product features
/// - `GET /dashboards` - Demo charts
/// - `GET /about` - About page
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/dashboards", get(dashboards_handler))
        .route("/about", get(about_handler))
}
