//! DTOs for chart endpoints.

use serde::Serialize;

use crate::domain::charts::ChartId;

/// Catalog entry for one dashboard chart.
#[derive(Debug, Serialize)]
pub struct ChartSummary {
    pub id: ChartId,
    pub title: &'static str,
}

impl From<ChartId> for ChartSummary {
    fn from(id: ChartId) -> Self {
        Self {
            id,
            title: id.title(),
        }
    }
}

/// Response body of `GET /api/charts`.
#[derive(Debug, Serialize)]
pub struct ChartListResponse {
    pub charts: Vec<ChartSummary>,
}
