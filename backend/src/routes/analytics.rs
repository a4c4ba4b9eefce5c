use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::RestaurantId;
use crate::models::DateRange;

// =========================================================
// Restaurant analytics types
// =========================================================

/// Order totals over a set of orders.
///
/// `average_order_value` is rounded to cents and is 0 for an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderSummary {
    pub total_orders: usize,
    pub total_revenue: f64,
    pub average_order_value: f64,
}

/// Per-day aggregate for a single calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStat {
    pub date: NaiveDate,
    pub orders_count: usize,
    pub revenue: f64,
    pub average_order_value: f64,
}

/// Order count for one hour-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyBucket {
    pub hour: u32,
    pub orders_count: usize,
}

/// All 24 hour buckets plus the busiest hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyDistribution {
    pub hourly_breakdown: Vec<HourlyBucket>,
    pub peak_hour: u32,
    pub peak_hour_orders: usize,
}

/// Complete analytics payload for one restaurant over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantAnalytics {
    pub restaurant_id: RestaurantId,
    pub date_range: DateRange,
    pub daily_stats: Vec<DailyStat>,
    pub hourly_distribution: HourlyDistribution,
    pub summary: OrderSummary,
}
