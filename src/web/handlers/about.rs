//! About page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::state::{AppState, SiteSettings};

/// Template for the static about page.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub site_name: String,
    pub page_title: &'static str,
}

impl AboutTemplate {
    pub fn new(site: &SiteSettings) -> Self {
        Self {
            site_name: site.site_name.clone(),
            page_title: "About",
        }
    }
}

/// Renders the about page.
///
/// # Endpoint
///
/// `GET /about`
pub async fn about_handler(State(state): State<AppState>) -> impl IntoResponse {
    AboutTemplate::new(&state.site)
}
