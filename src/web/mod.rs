//! Web layer for the browser-facing pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template structs and their page handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
