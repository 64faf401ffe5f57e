//! Chart builders: one function per dashboard chart.
//!
//! Builders turn datasets from [`crate::domain::datasets`] into descriptors
//! styled with the shared palette and layout theme.

use chrono::NaiveDate;
use rand::Rng;

use crate::domain::charts::{
    Axis, BarTrace, Chart, ChartId, FunnelTrace, HeatmapTrace, Layout, Line, Marker, Measure,
    Mode, PieTrace, ScatterTrace, TreemapTrace, Values, WaterfallTrace, palette,
};
use crate::domain::datasets::{
    self, CATEGORIES, CHANNELS, ChannelTraffic, DailySales, DatasetError, FUNNEL_STAGES,
    PROFIT_BRIDGE, REGIONS, TOP_PRODUCTS, TrafficMatrix,
};

/// Number of campaigns plotted on the scatter chart.
pub const CAMPAIGN_COUNT: usize = 20;

/// First day of the revenue series.
pub const REVENUE_START: NaiveDate = ymd(2023, 1, 1);

/// Last day of the revenue series, inclusive.
pub const REVENUE_END: NaiveDate = ymd(2024, 12, 31);

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

/// Builds one chart, drawing any random data it needs from `rng`.
///
/// # Errors
///
/// Returns [`DatasetError`] if its synthetic data cannot be generated.
pub fn build_chart<R: Rng + ?Sized>(
    id: ChartId,
    rng: &mut R,
    height: u32,
) -> Result<Chart, DatasetError> {
    let chart = match id {
        ChartId::Revenue => revenue(
            &datasets::daily_sales(rng, REVENUE_START, REVENUE_END)?,
            height,
        ),
        ChartId::CategorySales => category_sales(height),
        ChartId::RegionShare => region_share(height),
        ChartId::Campaigns => campaigns(&datasets::campaigns(rng, CAMPAIGN_COUNT), height),
        ChartId::Traffic => traffic(&datasets::traffic_matrix(rng)?, height),
        ChartId::SalesStructure => sales_structure(height),
        ChartId::ConversionFunnel => conversion_funnel(height),
        ChartId::ProfitBridge => profit_bridge(height),
        ChartId::ChannelMix => channel_mix(&datasets::channel_traffic(rng)?, height),
        ChartId::TopProducts => top_products(height),
    };

    Ok(chart)
}

fn layout(id: ChartId, height: u32) -> Layout {
    Layout::themed(id.title(), height)
}

pub fn revenue(sales: &DailySales, height: u32) -> Chart {
    let dates = Values::Labels(sales.date_labels());

    Chart::new(
        ChartId::Revenue,
        layout(ChartId::Revenue, height)
            .x_axis(Axis::titled("Date"))
            .y_axis(Axis::titled("Revenue ($)").tickformat(",.0f"))
            .y2_axis(Axis::secondary("Orders")),
    )
    .trace(
        ScatterTrace::new(dates.clone(), sales.revenue.clone(), Mode::Lines)
            .name("Revenue")
            .line(Line::new(palette::PRIMARY, 3.0))
            .hover("<b>Date:</b> %{x}<br><b>Revenue:</b> %{y:,.0f} $<extra></extra>"),
    )
    .trace(
        ScatterTrace::new(dates, sales.orders.clone(), Mode::Lines)
            .name("Orders")
            .line(Line::new(palette::ACCENT1, 1.0))
            .on_secondary_axis()
            .hover("<b>Date:</b> %{x}<br><b>Orders:</b> %{y:.0f}<extra></extra>"),
    )
}

pub fn category_sales(height: u32) -> Chart {
    let names = Values::labels(CATEGORIES.iter().map(|c| c.name));
    let sales = CATEGORIES.iter().map(|c| c.sales).collect();
    let margins = CATEGORIES
        .iter()
        .map(|c| format!("{:.1}% margin", c.profit_margin))
        .collect();

    Chart::new(
        ChartId::CategorySales,
        layout(ChartId::CategorySales, height)
            .x_axis(Axis::titled("Category"))
            .y_axis(Axis::titled("Sales ($)")),
    )
    .trace(
        BarTrace::vertical(names, sales)
            .name("Sales")
            .marker(Marker::per_point(palette::series_colors(CATEGORIES.len())))
            .text(margins)
            .hover("<b>Category:</b> %{x}<br><b>Sales:</b> %{y:,.0f} $<extra></extra>"),
    )
}

pub fn region_share(height: u32) -> Chart {
    let labels = REGIONS.iter().map(|(name, _)| name.to_string()).collect();
    let shares = REGIONS.iter().map(|(_, share)| *share).collect();

    Chart::new(ChartId::RegionShare, layout(ChartId::RegionShare, height)).trace(
        PieTrace::new(labels, shares)
            .donut(0.4)
            .marker(Marker::slices(palette::series_colors(REGIONS.len())))
            .hover("<b>Region:</b> %{label}<br><b>Share:</b> %{value}%<extra></extra>"),
    )
}

/// One marker trace per channel, bubble area proportional to conversions.
pub fn campaigns(list: &[datasets::Campaign], height: u32) -> Chart {
    let mut chart = Chart::new(
        ChartId::Campaigns,
        layout(ChartId::Campaigns, height)
            .x_axis(Axis::titled("Budget ($)"))
            .y_axis(Axis::titled("Conversions")),
    );

    // One bubble scale across channels so sizes are comparable between traces.
    let scale_max = list.iter().map(|c| c.conversions).fold(0.0_f64, f64::max);

    for (index, channel) in CHANNELS.iter().enumerate() {
        let members: Vec<_> = list.iter().filter(|c| c.channel == *channel).collect();
        if members.is_empty() {
            continue;
        }

        let budgets = members.iter().map(|c| c.budget).collect::<Vec<_>>();
        let conversions = members.iter().map(|c| c.conversions).collect::<Vec<_>>();
        let names = members.iter().map(|c| c.name.clone()).collect();

        chart = chart.trace(
            ScatterTrace::new(budgets, conversions.clone(), Mode::Markers)
                .name(*channel)
                .marker(
                    Marker::color(palette::series_color(index))
                        .bubbles(conversions, scale_max, 40.0)
                        .opacity(0.8),
                )
                .text(names)
                .hover(
                    "<b>%{text}</b><br>Budget: %{x:,.0f} $<br>\
                     Conversions: %{y:.0f}<extra>%{fullData.name}</extra>",
                ),
        );
    }

    chart
}

pub fn traffic(matrix: &TrafficMatrix, height: u32) -> Chart {
    let hours = matrix.hours.iter().map(|&h| f64::from(h)).collect();

    Chart::new(
        ChartId::Traffic,
        layout(ChartId::Traffic, height)
            .x_axis(Axis::titled("Hour of day"))
            .y_axis(Axis::titled("Weekday")),
    )
    .trace(
        HeatmapTrace::new(
            matrix.visitors.clone(),
            Values::Numbers(hours),
            Values::labels(matrix.days.iter().copied()),
        )
        .hover(
            "<b>Day:</b> %{y}<br><b>Hour:</b> %{x}:00<br>\
             <b>Visitors:</b> %{z:.0f}<extra></extra>",
        ),
    )
}

pub fn sales_structure(height: u32) -> Chart {
    let labels = CATEGORIES.iter().map(|c| c.name.to_string()).collect();
    let sales = CATEGORIES.iter().map(|c| c.sales).collect();

    Chart::new(ChartId::SalesStructure, layout(ChartId::SalesStructure, height)).trace(
        TreemapTrace::flat(labels, sales)
            .textinfo("label+value+percent parent")
            .marker(Marker::slices(palette::series_colors(CATEGORIES.len())))
            .hover("<b>Category:</b> %{label}<br><b>Sales:</b> %{value:,.0f} $<extra></extra>"),
    )
}

pub fn conversion_funnel(height: u32) -> Chart {
    let stages = FUNNEL_STAGES.iter().map(|(s, _)| s.to_string()).collect();
    let counts = FUNNEL_STAGES.iter().map(|(_, n)| *n).collect();

    Chart::new(
        ChartId::ConversionFunnel,
        layout(ChartId::ConversionFunnel, height),
    )
    .trace(
        FunnelTrace::new(stages, counts)
            .textinfo("value+percent initial")
            .marker(Marker::per_point(palette::series_colors(FUNNEL_STAGES.len())))
            .hover("<b>%{y}</b><br>Visitors: %{x:,}<extra></extra>"),
    )
}

pub fn profit_bridge(height: u32) -> Chart {
    let steps = PROFIT_BRIDGE.iter().map(|s| s.label.to_string()).collect();
    let deltas = PROFIT_BRIDGE.iter().map(|s| s.delta).collect();
    let measure = PROFIT_BRIDGE
        .iter()
        .map(|s| {
            if s.is_total {
                Measure::Total
            } else {
                Measure::Relative
            }
        })
        .collect();

    Chart::new(
        ChartId::ProfitBridge,
        layout(ChartId::ProfitBridge, height).y_axis(Axis::titled("Amount ($)")),
    )
    .trace(
        WaterfallTrace::new(steps, deltas, measure)
            .colors(palette::SUCCESS, palette::ACCENT2, palette::PRIMARY)
            .hover("<b>%{x}</b><br>%{y:,.0f} $<extra></extra>"),
    )
}

/// Stacked areas, one per channel, in [`CHANNELS`] order.
pub fn channel_mix(mix: &ChannelTraffic, height: u32) -> Chart {
    let mut chart = Chart::new(
        ChartId::ChannelMix,
        layout(ChartId::ChannelMix, height)
            .x_axis(Axis::titled("Month"))
            .y_axis(Axis::titled("Visitors"))
            .unified_hover(),
    );

    for (index, (channel, values)) in mix.series.iter().enumerate() {
        chart = chart.trace(
            ScatterTrace::new(
                Values::labels(mix.months.iter().copied()),
                values.clone(),
                Mode::Lines,
            )
            .name(*channel)
            .line(Line::new(palette::series_color(index), 0.5).smooth())
            .stack("channels")
            .hover("%{y:,.0f}"),
        );
    }

    chart
}

pub fn top_products(height: u32) -> Chart {
    let names = Values::labels(TOP_PRODUCTS.iter().map(|(name, _)| *name));
    let units = TOP_PRODUCTS.iter().map(|(_, n)| *n).collect();

    Chart::new(
        ChartId::TopProducts,
        layout(ChartId::TopProducts, height)
            .x_axis(Axis::titled("Units sold"))
            .y_axis(Axis::default().reversed())
            .legend(false),
    )
    .trace(
        BarTrace::horizontal(names, units)
            .marker(Marker::color(palette::ACCENT3))
            .hover("<b>%{y}</b><br>Units: %{x:,}<extra></extra>"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::charts::{Trace, check_chart};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn all_charts(seed: u64) -> Vec<Chart> {
        let mut rng = StdRng::seed_from_u64(seed);
        ChartId::ALL
            .into_iter()
            .map(|id| build_chart(id, &mut rng, 400).unwrap())
            .collect()
    }

    #[test]
    fn test_every_chart_is_well_formed() {
        for chart in all_charts(11) {
            assert!(check_chart(&chart).is_ok(), "{}", chart.id);
            assert_eq!(chart.title(), chart.id.title());
            assert_eq!(chart.layout.height, 400);
        }
    }

    #[test]
    fn test_build_chart_keeps_requested_id() {
        let mut rng = StdRng::seed_from_u64(0);
        for id in ChartId::ALL {
            assert_eq!(build_chart(id, &mut rng, 300).unwrap().id, id);
        }
    }

    #[test]
    fn test_revenue_covers_two_years() {
        let mut rng = StdRng::seed_from_u64(2);
        let chart = build_chart(ChartId::Revenue, &mut rng, 400).unwrap();

        assert_eq!(chart.traces.len(), 2);
        for trace in &chart.traces {
            assert_eq!(trace.point_count(), 731);
        }
    }

    #[test]
    fn test_campaign_traces_cover_all_campaigns() {
        let mut rng = StdRng::seed_from_u64(9);
        let list = datasets::campaigns(&mut rng, CAMPAIGN_COUNT);
        let chart = campaigns(&list, 400);

        let total: usize = chart.traces.iter().map(Trace::point_count).sum();
        assert_eq!(total, CAMPAIGN_COUNT);
        assert!(chart.traces.len() <= CHANNELS.len());
    }

    #[test]
    fn test_campaign_traces_share_bubble_scale() {
        let mut rng = StdRng::seed_from_u64(9);
        let list = datasets::campaigns(&mut rng, CAMPAIGN_COUNT);
        let value = serde_json::to_value(campaigns(&list, 400)).unwrap();

        let sizerefs: Vec<f64> = value["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|trace| trace["marker"]["sizeref"].as_f64().unwrap())
            .collect();
        assert!(sizerefs.len() > 1);
        assert!(sizerefs.iter().all(|&s| s == sizerefs[0]));

        let max = list.iter().map(|c| c.conversions).fold(0.0_f64, f64::max);
        assert!((sizerefs[0] - 2.0 * max / (40.0 * 40.0)).abs() < 1e-9);
    }

    #[test]
    fn test_trace_kinds() {
        let kinds: Vec<_> = all_charts(4)
            .iter()
            .map(|c| c.traces[0].kind())
            .collect();

        assert_eq!(
            kinds,
            [
                "scatter", "bar", "pie", "scatter", "heatmap", "treemap", "funnel", "waterfall",
                "scatter", "bar"
            ]
        );
    }

    #[test]
    fn test_donut_and_horizontal_bar() {
        let pie = serde_json::to_value(region_share(400)).unwrap();
        assert_eq!(pie["data"][0]["hole"], 0.4);

        let bars = serde_json::to_value(top_products(400)).unwrap();
        assert_eq!(bars["data"][0]["orientation"], "h");
        assert_eq!(bars["layout"]["yaxis"]["autorange"], "reversed");
    }

    #[test]
    fn test_channel_mix_is_stacked() {
        let mut rng = StdRng::seed_from_u64(8);
        let chart = build_chart(ChartId::ChannelMix, &mut rng, 400).unwrap();

        assert_eq!(chart.traces.len(), CHANNELS.len());
        let value = serde_json::to_value(&chart).unwrap();
        for trace in value["data"].as_array().unwrap() {
            assert_eq!(trace["stackgroup"], "channels");
        }
    }

    #[test]
    fn test_seeded_charts_are_identical() {
        assert_eq!(all_charts(21), all_charts(21));
    }
}
