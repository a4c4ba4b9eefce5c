//! Order aggregation: per-restaurant analytics and the revenue ranking.
//!
//! The `compute_*` functions are pure and operate on slices of the dataset;
//! the async entry points fetch a snapshot from a repository first.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use log::debug;

use crate::api::{
    DailyStat, HourlyBucket, HourlyDistribution, OrderSummary, RankedRestaurant,
    RestaurantAnalytics, RestaurantId, TopRestaurantsData,
};
use crate::db::repository::RestaurantRepository;
use crate::models::{DateRange, Order, Restaurant};
use crate::routes::top_restaurants::MAX_TOP_LIMIT;

use super::error::{ServiceError, ServiceResult};

const HOURS_PER_DAY: usize = 24;

/// Round a currency amount to cents.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Running count and revenue.
#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    count: usize,
    revenue: f64,
}

impl Totals {
    fn add(&mut self, order: &Order) {
        self.count += 1;
        self.revenue += order.order_amount;
    }

    fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            round_currency(self.revenue / self.count as f64)
        }
    }

    fn summary(&self) -> OrderSummary {
        OrderSummary {
            total_orders: self.count,
            total_revenue: self.revenue,
            average_order_value: self.average(),
        }
    }
}

/// Totals over a set of orders. An empty set yields all zeros.
pub fn summarize<'a, I>(orders: I) -> OrderSummary
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut totals = Totals::default();
    for order in orders {
        totals.add(order);
    }
    totals.summary()
}

/// One entry per calendar date that has orders, ascending by date.
pub fn compute_daily_stats(orders: &[&Order]) -> Vec<DailyStat> {
    let mut by_date: BTreeMap<NaiveDate, Totals> = BTreeMap::new();
    for order in orders {
        by_date.entry(order.order_date()).or_default().add(order);
    }

    by_date
        .into_iter()
        .map(|(date, totals)| DailyStat {
            date,
            orders_count: totals.count,
            revenue: totals.revenue,
            average_order_value: totals.average(),
        })
        .collect()
}

/// Order counts for all 24 hours of the day.
///
/// The peak is the lowest hour with the highest count; with no orders it is
/// hour 0 with 0 orders.
pub fn compute_hourly_distribution(orders: &[&Order]) -> HourlyDistribution {
    let mut counts = [0usize; HOURS_PER_DAY];
    for order in orders {
        counts[order.order_hour() as usize] += 1;
    }

    let mut peak_hour = 0;
    let mut peak_hour_orders = 0;
    for (hour, &count) in counts.iter().enumerate() {
        if count > peak_hour_orders {
            peak_hour = hour as u32;
            peak_hour_orders = count;
        }
    }

    HourlyDistribution {
        hourly_breakdown: counts
            .iter()
            .enumerate()
            .map(|(hour, &orders_count)| HourlyBucket {
                hour: hour as u32,
                orders_count,
            })
            .collect(),
        peak_hour,
        peak_hour_orders,
    }
}

/// Daily, hourly and overall figures for one restaurant within `range`.
///
/// Does not check that the restaurant exists; an unknown id simply selects
/// no orders.
pub fn compute_restaurant_analytics(
    restaurant_id: RestaurantId,
    range: DateRange,
    orders: &[Order],
) -> RestaurantAnalytics {
    let selected: Vec<&Order> = orders
        .iter()
        .filter(|o| o.restaurant_id == restaurant_id && range.contains(&o.order_time))
        .collect();

    RestaurantAnalytics {
        restaurant_id,
        date_range: range,
        daily_stats: compute_daily_stats(&selected),
        hourly_distribution: compute_hourly_distribution(&selected),
        summary: summarize(selected.iter().copied()),
    }
}

/// Totals per restaurant id in a single pass over `orders`.
///
/// With `range = None` every order counts. Ids with no orders are absent.
pub fn compute_restaurant_stats(
    orders: &[Order],
    range: Option<DateRange>,
) -> HashMap<RestaurantId, OrderSummary> {
    let mut totals: HashMap<RestaurantId, Totals> = HashMap::new();
    for order in orders {
        if range.map_or(true, |r| r.contains(&order.order_time)) {
            totals.entry(order.restaurant_id).or_default().add(order);
        }
    }

    totals
        .into_iter()
        .map(|(id, totals)| (id, totals.summary()))
        .collect()
}

/// Rank every restaurant by revenue within `range` and keep the first `limit`.
///
/// Restaurants without orders take part with zero totals. Equal revenue is
/// ordered by ascending id. `limit` is clamped to `1..=10`.
pub fn rank_top_restaurants(
    restaurants: &[Restaurant],
    orders: &[Order],
    range: DateRange,
    limit: usize,
) -> TopRestaurantsData {
    let limit = limit.clamp(1, MAX_TOP_LIMIT);
    let stats = compute_restaurant_stats(orders, Some(range));

    let mut ranked: Vec<RankedRestaurant> = restaurants
        .iter()
        .map(|restaurant| RankedRestaurant {
            stats: stats.get(&restaurant.id).copied().unwrap_or_default(),
            restaurant: restaurant.clone(),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.stats
            .total_revenue
            .total_cmp(&a.stats.total_revenue)
            .then_with(|| a.restaurant.id.cmp(&b.restaurant.id))
    });
    ranked.truncate(limit);

    TopRestaurantsData {
        date_range: range,
        top_restaurants: ranked,
        total_restaurants_analyzed: restaurants.len(),
    }
}

/// Analytics for one restaurant; fails with `NotFound` for an unknown id.
pub async fn get_restaurant_analytics<R: RestaurantRepository + ?Sized>(
    repo: &R,
    restaurant_id: RestaurantId,
    range: DateRange,
) -> ServiceResult<RestaurantAnalytics> {
    if range.is_inverted() {
        debug!("Inverted range {}..{} selects no orders", range.start, range.end);
    }
    let snapshot = repo.snapshot().await?;
    if snapshot.find_restaurant(restaurant_id).is_none() {
        return Err(ServiceError::not_found("Restaurant not found"));
    }

    let analytics = compute_restaurant_analytics(restaurant_id, range, &snapshot.orders);
    debug!(
        "Analytics for restaurant {} over {}..{}: {} orders",
        restaurant_id, range.start, range.end, analytics.summary.total_orders
    );
    Ok(analytics)
}

/// Top restaurants by revenue within `range`.
pub async fn get_top_restaurants<R: RestaurantRepository + ?Sized>(
    repo: &R,
    range: DateRange,
    limit: usize,
) -> ServiceResult<TopRestaurantsData> {
    let snapshot = repo.snapshot().await?;
    Ok(rank_top_restaurants(
        &snapshot.restaurants,
        &snapshot.orders,
        range,
        limit,
    ))
}
