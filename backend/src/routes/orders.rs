use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::RestaurantId;
use crate::models::{DateRange, HourRange, Order};

/// Largest page size for order filtering.
pub const MAX_ORDERS_PER_PAGE: usize = 100;
/// Page size used when the request does not specify one.
pub const DEFAULT_ORDERS_PER_PAGE: usize = 20;

/// Validated order filter. Serialized as the `filters_applied` echo, so
/// absent criteria are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderFilter {
    #[serde(flatten)]
    pub date_range: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<RestaurantId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,
    #[serde(flatten)]
    pub hours: Option<HourRange>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        self.date_range
            .map_or(true, |range| range.contains(&order.order_time))
            && self
                .restaurant_id
                .map_or(true, |id| order.restaurant_id == id)
            && self.min_amount.map_or(true, |min| order.order_amount >= min)
            && self.max_amount.map_or(true, |max| order.order_amount <= max)
            && self.hours.map_or(true, |hours| hours.contains(&order.order_time))
    }
}

/// Order with derived calendar fields, as returned by order filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredOrder {
    #[serde(flatten)]
    pub order: Order,
    pub order_date: NaiveDate,
    pub order_hour: u32,
}

impl From<Order> for FilteredOrder {
    fn from(order: Order) -> Self {
        Self {
            order_date: order.order_date(),
            order_hour: order.order_hour(),
            order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_order_time;

    fn order(restaurant_id: i64, time: &str, amount: f64) -> Order {
        Order::new(1, restaurant_id, parse_order_time(time).unwrap(), amount)
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = OrderFilter::default();
        assert!(filter.matches(&order(1, "2025-06-23T10:00", 10.0)));
    }

    #[test]
    fn test_amount_bounds_are_independent() {
        let min_only = OrderFilter {
            min_amount: Some(20.0),
            ..Default::default()
        };
        assert!(min_only.matches(&order(1, "2025-06-23T10:00", 20.0)));
        assert!(!min_only.matches(&order(1, "2025-06-23T10:00", 19.99)));

        let max_only = OrderFilter {
            max_amount: Some(20.0),
            ..Default::default()
        };
        assert!(max_only.matches(&order(1, "2025-06-23T10:00", 20.0)));
        assert!(!max_only.matches(&order(1, "2025-06-23T10:00", 20.01)));
    }

    #[test]
    fn test_filters_applied_echo_omits_absent_criteria() {
        let filter = OrderFilter {
            date_range: Some(DateRange::parse("2025-06-22", "2025-06-28").unwrap()),
            restaurant_id: Some(RestaurantId::new(2)),
            ..Default::default()
        };
        let json = serde_json::to_value(&filter).unwrap();

        assert_eq!(json["start_date"], "2025-06-22");
        assert_eq!(json["end_date"], "2025-06-28");
        assert_eq!(json["restaurant_id"], 2);
        assert!(json.get("min_amount").is_none());
        assert!(json.get("start_hour").is_none());
    }

    #[test]
    fn test_filtered_order_carries_derived_fields() {
        let filtered = FilteredOrder::from(order(3, "2025-06-24 21:15:00", 33.0));
        let json = serde_json::to_value(&filtered).unwrap();

        assert_eq!(json["order_date"], "2025-06-24");
        assert_eq!(json["order_hour"], 21);
        assert_eq!(json["order_time"], "2025-06-24T21:15:00");
    }
}
