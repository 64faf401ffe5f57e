//! HTML template rendering handlers for the site pages.

mod about;
mod dashboards;
mod home;

pub use about::{AboutTemplate, about_handler};
pub use dashboards::{DashboardsTemplate, dashboards_handler};
pub use home::{HomeTemplate, home_handler};
