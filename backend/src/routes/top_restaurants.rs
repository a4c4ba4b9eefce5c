use serde::{Deserialize, Serialize};

use super::analytics::OrderSummary;
use crate::models::{DateRange, Restaurant};

/// Largest `limit` accepted by the ranking endpoint.
pub const MAX_TOP_LIMIT: usize = 10;
/// `limit` used when the request does not specify one.
pub const DEFAULT_TOP_LIMIT: usize = 3;

/// Restaurant record with its order totals for the ranked window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRestaurant {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    #[serde(flatten)]
    pub stats: OrderSummary,
}

/// Top-N revenue ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopRestaurantsData {
    pub date_range: DateRange,
    pub top_restaurants: Vec<RankedRestaurant>,
    pub total_restaurants_analyzed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_restaurant_is_flat() {
        let ranked = RankedRestaurant {
            restaurant: Restaurant::new(3, "Curry House", "Delhi", "Indian"),
            stats: OrderSummary {
                total_orders: 4,
                total_revenue: 200.0,
                average_order_value: 50.0,
            },
        };
        let json = serde_json::to_value(&ranked).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Curry House");
        assert_eq!(json["total_orders"], 4);
        assert_eq!(json["average_order_value"], 50.0);
    }
}
