//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::entities::Feature;
use crate::state::{AppState, SiteSettings};

/// Template for the landing page.
///
/// Renders `templates/index.html` with the four product feature cards.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub site_name: String,
    pub page_title: &'static str,
    pub features: Vec<Feature>,
}

impl HomeTemplate {
    pub fn new(site: &SiteSettings) -> Self {
        Self {
            site_name: site.site_name.clone(),
            page_title: "Home",
            features: Feature::catalog().to_vec(),
        }
    }
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate::new(&state.site)
}
