#![allow(dead_code)]

use axum::Router;
use dashboard_site::application::services::ChartSettings;
use dashboard_site::routes;
use dashboard_site::state::{AppState, SiteSettings};

pub const TEST_SEED: u64 = 42;

pub fn create_test_state() -> AppState {
    AppState::new(
        SiteSettings {
            site_name: "TestDash".to_string(),
            plotly_js_url: "/static/js/plotly.min.js".to_string(),
        },
        ChartSettings {
            height: 400,
            seed: Some(TEST_SEED),
        },
    )
}

pub fn create_unseeded_state() -> AppState {
    AppState::new(SiteSettings::default(), ChartSettings::default())
}

pub fn test_router() -> Router {
    routes::router(create_test_state(), concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}
