//! Synthetic and hardcoded demo datasets behind the dashboard charts.
//!
//! Random series take the RNG as a parameter so callers decide between a
//! fresh per-request generator and a fixed seed.

use std::f64::consts::PI;

use chrono::NaiveDate;
use rand::Rng;
use rand_distr::{Distribution, Normal, Poisson};

/// Errors that can occur while generating a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Invalid distribution parameters: {0}")]
    Distribution(String),

    #[error("Empty date range: {start} to {end}")]
    EmptyRange { start: NaiveDate, end: NaiveDate },
}

/// Sales of one product category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySales {
    pub name: &'static str,
    pub sales: f64,
    pub profit_margin: f64,
}

pub const CATEGORIES: [CategorySales; 6] = [
    CategorySales {
        name: "Electronics",
        sales: 45_000.0,
        profit_margin: 15.2,
    },
    CategorySales {
        name: "Clothing",
        sales: 32_000.0,
        profit_margin: 35.8,
    },
    CategorySales {
        name: "Books",
        sales: 18_000.0,
        profit_margin: 45.1,
    },
    CategorySales {
        name: "Sports",
        sales: 25_000.0,
        profit_margin: 28.3,
    },
    CategorySales {
        name: "Home & Garden",
        sales: 28_000.0,
        profit_margin: 31.7,
    },
    CategorySales {
        name: "Beauty",
        sales: 22_000.0,
        profit_margin: 42.5,
    },
];

/// Market share in percent, per region.
pub const REGIONS: [(&str, f64); 5] = [
    ("Moscow", 35.0),
    ("St. Petersburg", 20.0),
    ("Novosibirsk", 15.0),
    ("Yekaterinburg", 18.0),
    ("Kazan", 12.0),
];

pub const CHANNELS: [&str; 4] = ["Social", "Google Ads", "Email", "SEO"];

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Relative traffic level per weekday, Monday first.
const WEEKDAY_WEIGHTS: [f64; 7] = [8.0, 9.0, 10.0, 11.0, 12.0, 6.0, 5.0];

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Visitors reaching each checkout stage.
pub const FUNNEL_STAGES: [(&str, f64); 5] = [
    ("Site visits", 12_000.0),
    ("Product views", 7_400.0),
    ("Added to cart", 3_100.0),
    ("Checkout started", 1_800.0),
    ("Purchases", 1_250.0),
];

/// One step of the monthly profit bridge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BridgeStep {
    pub label: &'static str,
    pub delta: f64,
    /// Total steps show the running sum instead of a delta.
    pub is_total: bool,
}

pub const PROFIT_BRIDGE: [BridgeStep; 6] = [
    BridgeStep {
        label: "Revenue",
        delta: 120_000.0,
        is_total: false,
    },
    BridgeStep {
        label: "Cost of goods",
        delta: -48_000.0,
        is_total: false,
    },
    BridgeStep {
        label: "Marketing",
        delta: -15_000.0,
        is_total: false,
    },
    BridgeStep {
        label: "Salaries",
        delta: -32_000.0,
        is_total: false,
    },
    BridgeStep {
        label: "Other",
        delta: -6_000.0,
        is_total: false,
    },
    BridgeStep {
        label: "Net profit",
        delta: 0.0,
        is_total: true,
    },
];

/// Units sold per product, best sellers first.
pub const TOP_PRODUCTS: [(&str, f64); 7] = [
    ("Smartphone X", 1_840.0),
    ("Wireless earbuds", 1_520.0),
    ("Running shoes", 1_310.0),
    ("Coffee maker", 980.0),
    ("Yoga mat", 860.0),
    ("Desk lamp", 720.0),
    ("Backpack", 640.0),
];

/// Daily revenue and order counts.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySales {
    pub dates: Vec<NaiveDate>,
    pub revenue: Vec<f64>,
    pub orders: Vec<f64>,
}

impl DailySales {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Dates as ISO `YYYY-MM-DD` strings.
    pub fn date_labels(&self) -> Vec<String> {
        self.dates
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect()
    }
}

/// An advertising campaign's spend and result.
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub name: String,
    pub budget: f64,
    pub conversions: f64,
    pub channel: &'static str,
}

/// Visitors per weekday (rows) and hour (columns).
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficMatrix {
    pub days: Vec<&'static str>,
    pub hours: Vec<u32>,
    pub visitors: Vec<Vec<f64>>,
}

/// Monthly visitors per acquisition channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelTraffic {
    pub months: Vec<&'static str>,
    pub series: Vec<(&'static str, Vec<f64>)>,
}

/// Every day from `start` to `end`, both inclusive.
///
/// # Errors
///
/// Returns [`DatasetError::EmptyRange`] if `end` is before `start`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, DatasetError> {
    if end < start {
        return Err(DatasetError::EmptyRange { start, end });
    }

    Ok(start.iter_days().take_while(|d| *d <= end).collect())
}

/// Random-walk revenue and seasonal order counts for each day in the range.
///
/// Revenue is the running sum of Normal(1000, 300) draws on top of 50 000.
/// Orders are Poisson(25) plus a yearly sine wave of amplitude 10 around 30.
///
/// # Errors
///
/// Returns [`DatasetError`] for an empty range.
pub fn daily_sales<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<DailySales, DatasetError> {
    let dates = date_range(start, end)?;

    let daily: Normal<f64> = normal(1000.0, 300.0)?;
    let mut running = 0.0;
    let revenue = dates
        .iter()
        .map(|_| {
            running += daily.sample(rng);
            running + 50_000.0
        })
        .collect();

    let base: Poisson<f64> = poisson(25.0)?;
    let orders = (0..dates.len())
        .map(|i| {
            let count: f64 = base.sample(rng);
            count + (i as f64 * 2.0 * PI / 365.0).sin() * 10.0 + 30.0
        })
        .collect();

    Ok(DailySales {
        dates,
        revenue,
        orders,
    })
}

/// `count` campaigns with uniform budget and conversions on a random channel.
pub fn campaigns<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Campaign> {
    (1..=count)
        .map(|i| Campaign {
            name: format!("Campaign {i}"),
            budget: rng.random_range(5_000.0..50_000.0),
            conversions: rng.random_range(50.0..500.0),
            channel: CHANNELS[rng.random_range(0..CHANNELS.len())],
        })
        .collect()
}

/// Weekly traffic: Poisson(10) noise plus a weekday-weighted daily sine cycle.
///
/// # Errors
///
/// Returns [`DatasetError::Distribution`] if the noise distribution cannot be built.
pub fn traffic_matrix<R: Rng + ?Sized>(rng: &mut R) -> Result<TrafficMatrix, DatasetError> {
    let noise: Poisson<f64> = poisson(10.0)?;
    let hours: Vec<u32> = (0..24).collect();

    // linspace(0, 2π, 24): first and last hour both land on a zero crossing
    let cycle: Vec<f64> = hours
        .iter()
        .map(|&h| (2.0 * PI * f64::from(h) / 23.0).sin() * 5.0 + 10.0)
        .collect();

    let visitors = WEEKDAY_WEIGHTS
        .iter()
        .map(|weight| {
            cycle
                .iter()
                .map(|level| {
                    let n: f64 = noise.sample(rng);
                    n + weight * level
                })
                .collect()
        })
        .collect();

    Ok(TrafficMatrix {
        days: WEEKDAYS.to_vec(),
        hours,
        visitors,
    })
}

/// Twelve months of traffic per channel: a linear ramp with 8% Normal noise.
///
/// # Errors
///
/// Returns [`DatasetError::Distribution`] if a noise distribution cannot be built.
pub fn channel_traffic<R: Rng + ?Sized>(rng: &mut R) -> Result<ChannelTraffic, DatasetError> {
    // (start, monthly growth) per channel, same order as CHANNELS
    const RAMPS: [(f64, f64); 4] = [
        (1_200.0, 80.0),
        (900.0, 60.0),
        (500.0, 25.0),
        (1_500.0, 110.0),
    ];

    let mut series = Vec::with_capacity(CHANNELS.len());
    for (channel, (start, growth)) in CHANNELS.iter().zip(RAMPS) {
        let values = (0..MONTHS.len())
            .map(|m| -> Result<f64, DatasetError> {
                let trend = start + growth * m as f64;
                let jitter = normal(0.0, trend * 0.08)?;
                Ok((trend + jitter.sample(rng)).max(0.0))
            })
            .collect::<Result<Vec<_>, _>>()?;
        series.push((*channel, values));
    }

    Ok(ChannelTraffic {
        months: MONTHS.to_vec(),
        series,
    })
}

/// `Normal::new` accepts a negative standard deviation (it mirrors the
/// distribution), so the sign is checked here.
fn normal(mean: f64, std_dev: f64) -> Result<Normal<f64>, DatasetError> {
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(DatasetError::Distribution(format!(
            "standard deviation must be finite and non-negative, got {std_dev}"
        )));
    }
    Normal::new(mean, std_dev).map_err(|e| DatasetError::Distribution(e.to_string()))
}

fn poisson(lambda: f64) -> Result<Poisson<f64>, DatasetError> {
    Poisson::new(lambda).map_err(|e| DatasetError::Distribution(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_inclusive() {
        let days = date_range(ymd(2023, 1, 1), ymd(2024, 12, 31)).unwrap();

        assert_eq!(days.len(), 731);
        assert_eq!(days.first(), Some(&ymd(2023, 1, 1)));
        assert_eq!(days.last(), Some(&ymd(2024, 12, 31)));
    }

    #[test]
    fn test_date_range_single_day() {
        let days = date_range(ymd(2024, 2, 29), ymd(2024, 2, 29)).unwrap();
        assert_eq!(days, vec![ymd(2024, 2, 29)]);
    }

    #[test]
    fn test_date_range_reversed() {
        let result = date_range(ymd(2024, 1, 2), ymd(2024, 1, 1));
        assert!(matches!(result, Err(DatasetError::EmptyRange { .. })));
    }

    #[test]
    fn test_daily_sales_lengths() {
        let mut rng = StdRng::seed_from_u64(7);
        let sales = daily_sales(&mut rng, ymd(2023, 1, 1), ymd(2024, 12, 31)).unwrap();

        assert_eq!(sales.len(), 731);
        assert_eq!(sales.revenue.len(), 731);
        assert_eq!(sales.orders.len(), 731);
        assert_eq!(sales.date_labels()[0], "2023-01-01");
        assert!(sales.orders.iter().all(|o| *o >= 20.0));
    }

    #[test]
    fn test_daily_sales_seeded_is_deterministic() {
        let start = ymd(2024, 1, 1);
        let end = ymd(2024, 3, 31);

        let a = daily_sales(&mut StdRng::seed_from_u64(42), start, end).unwrap();
        let b = daily_sales(&mut StdRng::seed_from_u64(42), start, end).unwrap();
        let c = daily_sales(&mut StdRng::seed_from_u64(43), start, end).unwrap();

        assert_eq!(a, b);
        assert_ne!(a.revenue, c.revenue);
    }

    #[test]
    fn test_campaigns_within_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let list = campaigns(&mut rng, 20);

        assert_eq!(list.len(), 20);
        assert_eq!(list[0].name, "Campaign 1");
        assert_eq!(list[19].name, "Campaign 20");
        for c in &list {
            assert!((5_000.0..50_000.0).contains(&c.budget));
            assert!((50.0..500.0).contains(&c.conversions));
            assert!(CHANNELS.contains(&c.channel));
        }
    }

    #[test]
    fn test_traffic_matrix_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let traffic = traffic_matrix(&mut rng).unwrap();

        assert_eq!(traffic.days.len(), 7);
        assert_eq!(traffic.hours.len(), 24);
        assert_eq!(traffic.visitors.len(), 7);
        assert!(traffic.visitors.iter().all(|row| row.len() == 24));
        assert!(traffic.visitors.iter().flatten().all(|v| *v > 0.0));
    }

    #[test]
    fn test_channel_traffic_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        let mix = channel_traffic(&mut rng).unwrap();

        assert_eq!(mix.months.len(), 12);
        assert_eq!(mix.series.len(), CHANNELS.len());
        for (channel, values) in &mix.series {
            assert!(CHANNELS.contains(channel));
            assert_eq!(values.len(), 12);
            assert!(values.iter().all(|v| *v >= 0.0));
        }
    }

    #[test]
    fn test_profit_bridge_ends_with_total() {
        let last = PROFIT_BRIDGE.last().unwrap();
        assert!(last.is_total);
        assert_eq!(PROFIT_BRIDGE.iter().filter(|s| s.is_total).count(), 1);

        let net: f64 = PROFIT_BRIDGE.iter().map(|s| s.delta).sum();
        assert!(net > 0.0);
    }

    #[test]
    fn test_invalid_distribution() {
        let err = normal(0.0, -1.0).unwrap_err();
        assert!(matches!(err, DatasetError::Distribution(_)));
        assert!(err.to_string().contains("-1"));
        assert!(normal(0.0, f64::NAN).is_err());
        assert!(normal(0.0, f64::INFINITY).is_err());
        assert!(poisson(-3.0).is_err());
    }

    #[test]
    fn test_zero_spread_is_allowed() {
        let mut rng = StdRng::seed_from_u64(1);
        let dist = normal(5.0, 0.0).unwrap();
        assert_eq!(dist.sample(&mut rng), 5.0);
    }
}
