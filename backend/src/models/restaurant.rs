use serde::{Deserialize, Serialize};

use crate::api::RestaurantId;

/// Restaurant reference record as stored in `restaurants.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub location: String,
    pub cuisine: String,
}

impl Restaurant {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        location: impl Into<String>,
        cuisine: impl Into<String>,
    ) -> Self {
        Self {
            id: RestaurantId::new(id),
            name: name.into(),
            location: location.into(),
            cuisine: cuisine.into(),
        }
    }
}
