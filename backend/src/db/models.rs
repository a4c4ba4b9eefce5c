//! Shared data models re-exported for database layer consumers.

pub use crate::api::{OrderId, RestaurantId};
pub use crate::models::{Order, Restaurant};

/// Immutable view of the two source sequences at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSnapshot {
    pub restaurants: Vec<Restaurant>,
    pub orders: Vec<Order>,
    /// SHA-256 fingerprint of the source documents.
    pub checksum: String,
}

impl DataSnapshot {
    pub fn new(restaurants: Vec<Restaurant>, orders: Vec<Order>, checksum: String) -> Self {
        Self {
            restaurants,
            orders,
            checksum,
        }
    }

    pub fn find_restaurant(&self, id: RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }
}
