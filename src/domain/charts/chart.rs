//! Chart descriptors and the catalog of dashboard chart identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::{Layout, Trace};

/// Identifier of a chart on the dashboards page.
///
/// The string key doubles as the template context key and as the suffix of
/// the HTML element id, so keys must stay unique and `[a-z_]` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartId {
    Revenue,
    CategorySales,
    RegionShare,
    Campaigns,
    Traffic,
    SalesStructure,
    ConversionFunnel,
    ProfitBridge,
    ChannelMix,
    TopProducts,
}

impl ChartId {
    /// Every chart, in dashboard order.
    pub const ALL: [ChartId; 10] = [
        ChartId::Revenue,
        ChartId::CategorySales,
        ChartId::RegionShare,
        ChartId::Campaigns,
        ChartId::Traffic,
        ChartId::SalesStructure,
        ChartId::ConversionFunnel,
        ChartId::ProfitBridge,
        ChartId::ChannelMix,
        ChartId::TopProducts,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartId::Revenue => "line_chart",
            ChartId::CategorySales => "bar_chart",
            ChartId::RegionShare => "pie_chart",
            ChartId::Campaigns => "scatter_chart",
            ChartId::Traffic => "heatmap_chart",
            ChartId::SalesStructure => "treemap_chart",
            ChartId::ConversionFunnel => "funnel_chart",
            ChartId::ProfitBridge => "waterfall_chart",
            ChartId::ChannelMix => "area_chart",
            ChartId::TopProducts => "hbar_chart",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartId::Revenue => "Revenue over time",
            ChartId::CategorySales => "Sales by product category",
            ChartId::RegionShare => "Market share by region",
            ChartId::Campaigns => "Advertising campaign performance",
            ChartId::Traffic => "Site traffic by hour and weekday",
            ChartId::SalesStructure => "Sales structure by category",
            ChartId::ConversionFunnel => "Checkout conversion funnel",
            ChartId::ProfitBridge => "Monthly profit bridge",
            ChartId::ChannelMix => "Monthly traffic by channel",
            ChartId::TopProducts => "Top products by units sold",
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ChartId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown chart id: {0}")]
pub struct ParseChartIdError(pub String);

impl FromStr for ChartId {
    type Err = ParseChartIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseChartIdError(s.to_string()))
    }
}

/// One visualization: its identifier, series and layout.
///
/// Built per request and consumed once by a renderer. Serializes as a
/// plotly.js figure (`{"data": [...], "layout": {...}}`); the id is not part
/// of the figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    #[serde(skip)]
    pub id: ChartId,
    #[serde(rename = "data")]
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

impl Chart {
    pub fn new(id: ChartId, layout: Layout) -> Self {
        Self {
            id,
            traces: Vec::new(),
            layout,
        }
    }

    pub fn trace(mut self, trace: impl Into<Trace>) -> Self {
        self.traces.push(trace.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_chart_keys_are_unique() {
        let keys: HashSet<_> = ChartId::ALL.iter().map(|id| id.as_str()).collect();
        assert_eq!(keys.len(), ChartId::ALL.len());
    }

    #[test]
    fn test_chart_keys_are_id_safe() {
        for id in ChartId::ALL {
            assert!(
                id.as_str()
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '_'),
                "{id}"
            );
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for id in ChartId::ALL {
            assert_eq!(id.as_str().parse::<ChartId>().unwrap(), id);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "radar_chart".parse::<ChartId>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown chart id: radar_chart");
    }

    #[test]
    fn test_serializes_as_key() {
        let value = serde_json::to_value(ChartId::ProfitBridge).unwrap();
        assert_eq!(value, "waterfall_chart");
    }
}
