//! Public API surface for the Rust backend.
//!
//! This file consolidates the identifier types and the DTOs returned by the
//! HTTP API. All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::analytics::DailyStat;
pub use crate::routes::analytics::HourlyBucket;
pub use crate::routes::analytics::HourlyDistribution;
pub use crate::routes::analytics::OrderSummary;
pub use crate::routes::analytics::RestaurantAnalytics;
pub use crate::routes::orders::FilteredOrder;
pub use crate::routes::orders::OrderFilter;
pub use crate::routes::restaurants::RestaurantListItem;
pub use crate::routes::restaurants::RestaurantSort;
pub use crate::routes::restaurants::SortField;
pub use crate::routes::restaurants::SortOrder;
pub use crate::routes::search::RestaurantSearch;
pub use crate::routes::top_restaurants::RankedRestaurant;
pub use crate::routes::top_restaurants::TopRestaurantsData;
pub use crate::services::pagination::{Page, PageRequest, Pagination};

pub use crate::models::{DateRange, HourRange, Order, Restaurant};

crate::define_id_type!(i64, RestaurantId);
crate::define_id_type!(i64, OrderId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_integers() {
        assert_eq!(serde_json::to_string(&RestaurantId::new(4)).unwrap(), "4");
        let id: OrderId = serde_json::from_str("12").unwrap();
        assert_eq!(id.value(), 12);
    }

    #[test]
    fn test_id_from_str() {
        assert_eq!(" 7 ".parse::<RestaurantId>().unwrap(), RestaurantId::new(7));
        assert!("seven".parse::<RestaurantId>().is_err());
    }
}
