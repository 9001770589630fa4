//! Derived dashboard metrics
//!
//! Pure aggregation over the summary series the backend returns. Nothing
//! here mutates its input: totals treat missing amounts as zero, trends
//! come off the last data point, and top-N ordering works on a copy.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One dated sample in a summary series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricPoint {
    pub date: NaiveDate,
    /// Missing on the wire for days the backend has no figure; counts as zero
    #[serde(default)]
    pub total_amount: Option<Decimal>,
}

impl MetricPoint {
    pub fn new(date: NaiveDate, total_amount: Option<Decimal>) -> Self {
        Self { date, total_amount }
    }

    /// The numeric value of this point, missing treated as zero
    pub fn value(&self) -> Decimal {
        self.total_amount.unwrap_or(Decimal::ZERO)
    }
}

/// Direction of the most recent data point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Aggregated figures for one dashboard card
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    pub total: Decimal,
    pub last_point: Option<MetricPoint>,
    /// Absent when the series is empty
    pub trend: Option<Trend>,
}

/// Sum of a series, missing amounts as zero; `total([]) = 0`
pub fn total(points: &[MetricPoint]) -> Decimal {
    points.iter().map(MetricPoint::value).sum()
}

/// The most recent point of a series, if any
pub fn last_point(points: &[MetricPoint]) -> Option<&MetricPoint> {
    points.last()
}

/// Trend off the sign of the last point's value; None for an empty series
pub fn trend(points: &[MetricPoint]) -> Option<Trend> {
    last_point(points).map(|p| {
        let value = p.value();
        if value > Decimal::ZERO {
            Trend::Up
        } else if value < Decimal::ZERO {
            Trend::Down
        } else {
            Trend::Flat
        }
    })
}

/// Full card aggregation for one series
pub fn card_summary(points: &[MetricPoint]) -> CardSummary {
    CardSummary {
        total: total(points),
        last_point: last_point(points).cloned(),
        trend: trend(points),
    }
}

/// Percentage of `part` in `whole`, zero when the denominator is zero
pub fn percent_share(part: Decimal, whole: Decimal) -> Decimal {
    if whole == Decimal::ZERO {
        return Decimal::ZERO;
    }
    (part / whole * Decimal::ONE_HUNDRED).round_dp(2)
}

/// A product ranked by units sold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularProduct {
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
}

/// Top `n` products by quantity, descending.
///
/// Sorts a copy; the caller's slice keeps its order.
pub fn top_by_quantity(products: &[PopularProduct], n: usize) -> Vec<PopularProduct> {
    let mut ranked = products.to_vec();
    ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(day: u32, amount: Option<i64>) -> MetricPoint {
        MetricPoint::new(
            NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            amount.map(|a| Decimal::new(a, 2)),
        )
    }

    #[test]
    fn test_total_treats_missing_as_zero() {
        let points = vec![point(1, Some(10000)), point(2, None), point(3, Some(-5000))];
        assert_eq!(total(&points), Decimal::new(5000, 2));
    }

    #[test]
    fn test_total_of_empty_is_zero() {
        assert_eq!(total(&[]), Decimal::ZERO);
        assert!(last_point(&[]).is_none());
        assert!(trend(&[]).is_none());
    }

    #[test]
    fn test_trend_follows_last_point_sign() {
        // 100 then -50: total 50, last point negative, trend down
        let points = vec![point(1, Some(10000)), point(2, Some(-5000))];
        assert_eq!(total(&points), Decimal::new(5000, 2));
        assert_eq!(trend(&points), Some(Trend::Down));

        let points = vec![point(1, Some(-5000)), point(2, Some(10000))];
        assert_eq!(trend(&points), Some(Trend::Up));

        let points = vec![point(1, Some(10000)), point(2, None)];
        assert_eq!(trend(&points), Some(Trend::Flat));
    }

    #[test]
    fn test_card_summary() {
        let points = vec![point(1, Some(10000)), point(2, Some(-5000))];
        let card = card_summary(&points);
        assert_eq!(card.total, Decimal::new(5000, 2));
        assert_eq!(card.last_point.unwrap().value(), Decimal::new(-5000, 2));
        assert_eq!(card.trend, Some(Trend::Down));

        let empty = card_summary(&[]);
        assert_eq!(empty.total, Decimal::ZERO);
        assert!(empty.last_point.is_none());
        assert!(empty.trend.is_none());
    }

    #[test]
    fn test_percent_share_guards_zero_denominator() {
        assert_eq!(percent_share(Decimal::new(50, 0), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(
            percent_share(Decimal::new(25, 0), Decimal::new(200, 0)),
            Decimal::new(1250, 2)
        );
    }

    #[test]
    fn test_top_by_quantity_does_not_mutate_input() {
        let products = vec![
            PopularProduct { name: "charger".to_string(), quantity: 5 },
            PopularProduct { name: "pixel 8".to_string(), quantity: 20 },
            PopularProduct { name: "case".to_string(), quantity: 1 },
        ];

        let top = top_by_quantity(&products, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "pixel 8");
        assert_eq!(top[1].name, "charger");

        // Caller's ordering is untouched
        assert_eq!(products[0].name, "charger");
        assert_eq!(products[1].name, "pixel 8");
        assert_eq!(products[2].name, "case");
    }

    #[test]
    fn test_top_by_quantity_short_input() {
        let products = vec![PopularProduct { name: "case".to_string(), quantity: 1 }];
        assert_eq!(top_by_quantity(&products, 5).len(), 1);
        assert!(top_by_quantity(&[], 5).is_empty());
    }
}
