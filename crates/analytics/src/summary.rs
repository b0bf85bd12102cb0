//! Analytics summary computation.

use chrono::{DateTime, Duration, Utc};
use domain::{Money, Order};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Snapshot of order metrics.
///
/// Money-derived values and the daily average are rounded to 2 decimals and
/// fulfillment time to whole hours, both half-to-even.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub average_order_value: f64,
    /// Mean hours from creation to fulfillment, over fulfilled orders only.
    pub average_fulfillment_time_hours: f64,
    pub average_daily_orders: f64,
    /// Orders created on the UTC date of `now` or the six dates before it.
    pub total_orders_last_seven_days: u64,
    /// Calendar dates from the earliest to the latest order, inclusive.
    pub report_days_covered: i64,
    pub average_discount: f64,
}

/// Computes the analytics summary for `orders` as of `now`.
///
/// An empty order set gives an all-zero summary.
pub fn summarize(orders: &[Order], now: DateTime<Utc>) -> AnalyticsSummary {
    let Some(first) = orders.first() else {
        return AnalyticsSummary::default();
    };

    let count = orders.len();
    let average_order_value = mean(orders.iter().map(Order::total_amount), count);
    let average_discount = mean(orders.iter().map(Order::discount_amount), count);

    let fulfillment_hours: Vec<f64> = orders
        .iter()
        .filter_map(|o| {
            let fulfilled_at = o.fulfilled_at()?;
            Some((fulfilled_at - o.created_at()).num_milliseconds() as f64 / MILLIS_PER_HOUR)
        })
        .collect();
    let average_fulfillment_time_hours = if fulfillment_hours.is_empty() {
        0.0
    } else {
        let total: f64 = fulfillment_hours.iter().sum();
        (total / fulfillment_hours.len() as f64).round_ties_even()
    };

    let first_date = first.created_at().date_naive();
    let (min_date, max_date) = orders.iter().map(|o| o.created_at().date_naive()).fold(
        (first_date, first_date),
        |(min, max), date| (min.min(date), max.max(date)),
    );
    let report_days_covered = (max_date - min_date).num_days() + 1;

    let average_daily_orders = if report_days_covered > 0 {
        to_f64((Decimal::from(count) / Decimal::from(report_days_covered)).round_dp(2))
    } else {
        count as f64
    };

    let window_start = now.date_naive() - Duration::days(6);
    let total_orders_last_seven_days = orders
        .iter()
        .filter(|o| o.created_at().date_naive() >= window_start)
        .count() as u64;

    AnalyticsSummary {
        average_order_value,
        average_fulfillment_time_hours,
        average_daily_orders,
        total_orders_last_seven_days,
        report_days_covered,
        average_discount,
    }
}

fn mean(values: impl Iterator<Item = Money>, count: usize) -> f64 {
    let total: Money = values.sum();
    to_f64((total.amount() / Decimal::from(count)).round_dp(2))
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
