//! Data Transfer Objects for API responses.

pub mod charts;
pub mod health;
