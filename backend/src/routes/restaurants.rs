use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::analytics::OrderSummary;
use crate::models::Restaurant;

/// Largest page size for the restaurant listing.
pub const MAX_RESTAURANTS_PER_PAGE: usize = 50;
/// Page size used when only `page` is given.
pub const DEFAULT_RESTAURANTS_PER_PAGE: usize = 10;

/// Restaurant listing entry; stats are present only when requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantListItem {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    #[serde(flatten)]
    pub stats: Option<OrderSummary>,
}

impl From<Restaurant> for RestaurantListItem {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            restaurant,
            stats: None,
        }
    }
}

/// Field the restaurant listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Name,
    Location,
    Cuisine,
    TotalRevenue,
    TotalOrders,
    AverageOrderValue,
}

impl SortField {
    /// Whether ordering by this field needs per-restaurant order totals.
    pub fn needs_stats(&self) -> bool {
        matches!(
            self,
            Self::TotalRevenue | Self::TotalOrders | Self::AverageOrderValue
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Location => "location",
            Self::Cuisine => "cuisine",
            Self::TotalRevenue => "total_revenue",
            Self::TotalOrders => "total_orders",
            Self::AverageOrderValue => "average_order_value",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(Self::Name),
            "location" => Ok(Self::Location),
            "cuisine" => Ok(Self::Cuisine),
            "total_revenue" => Ok(Self::TotalRevenue),
            "total_orders" => Ok(Self::TotalOrders),
            "average_order_value" => Ok(Self::AverageOrderValue),
            other => Err(format!(
                "Unknown sort_by '{}'. Use name, location, cuisine, total_revenue, total_orders or average_order_value",
                other
            )),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("Unknown sort_order '{}'. Use asc or desc", other)),
        }
    }
}

/// Ordering applied to the restaurant listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RestaurantSort {
    pub field: SortField,
    pub order: SortOrder,
}

impl RestaurantSort {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_parsing() {
        assert_eq!("name".parse::<SortField>().unwrap(), SortField::Name);
        assert_eq!(
            "average_order_value".parse::<SortField>().unwrap(),
            SortField::AverageOrderValue
        );
        assert!("rating".parse::<SortField>().is_err());
    }

    #[test]
    fn test_sort_order_is_case_insensitive() {
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert!("up".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_stat_fields_need_stats() {
        assert!(SortField::TotalRevenue.needs_stats());
        assert!(!SortField::Cuisine.needs_stats());
    }

    #[test]
    fn test_list_item_without_stats_omits_fields() {
        let item = RestaurantListItem::from(Restaurant::new(1, "Sushi Place", "Tokyo", "Japanese"));
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["name"], "Sushi Place");
        assert!(json.get("total_revenue").is_none());
    }
}
