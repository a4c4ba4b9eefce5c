use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::time::order_time_format;
use crate::api::{OrderId, RestaurantId};

/// Order record as stored in `orders.json`.
///
/// `restaurant_id` is not checked against the restaurant list; orders for
/// unknown restaurants never land in any per-restaurant bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub restaurant_id: RestaurantId,
    #[serde(with = "order_time_format")]
    pub order_time: NaiveDateTime,
    pub order_amount: f64,
}

impl Order {
    pub fn new(
        id: i64,
        restaurant_id: i64,
        order_time: NaiveDateTime,
        order_amount: f64,
    ) -> Self {
        Self {
            id: OrderId::new(id),
            restaurant_id: RestaurantId::new(restaurant_id),
            order_time,
            order_amount,
        }
    }

    /// Calendar date of the order (time of day discarded).
    pub fn order_date(&self) -> NaiveDate {
        self.order_time.date()
    }

    /// Hour of day, 0..=23.
    pub fn order_hour(&self) -> u32 {
        self.order_time.hour()
    }
}
