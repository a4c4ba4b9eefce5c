//! Repository trait for abstracting the restaurant/order data source.
//!
//! The analytics and filter engines only ever see an immutable
//! [`DataSnapshot`]; implementations decide where the two sequences come from
//! (in-memory fixtures, JSON files behind a TTL cache, ...) and are swapped via
//! dependency injection.

pub mod error;

use std::sync::Arc;

use async_trait::async_trait;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use super::models::{DataSnapshot, Order, Restaurant, RestaurantId};

/// Read-only access to restaurants and orders.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so one instance can be shared by
/// every request handler.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Short name of the backing store, reported by the health endpoint.
    fn source_name(&self) -> &'static str;

    /// Check if the data source is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the source is healthy
    /// - `Ok(false)` if it is unhealthy but no error occurred
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Current snapshot of both sequences.
    ///
    /// Repeated calls may return the same `Arc` while the data is unchanged.
    async fn snapshot(&self) -> RepositoryResult<Arc<DataSnapshot>>;

    /// All restaurants in source order.
    async fn list_restaurants(&self) -> RepositoryResult<Vec<Restaurant>> {
        Ok(self.snapshot().await?.restaurants.clone())
    }

    /// All orders in source order.
    async fn list_orders(&self) -> RepositoryResult<Vec<Order>> {
        Ok(self.snapshot().await?.orders.clone())
    }

    /// Look up one restaurant.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no restaurant has this id
    async fn find_restaurant(&self, id: RestaurantId) -> RepositoryResult<Restaurant> {
        let snapshot = self.snapshot().await?;
        snapshot.find_restaurant(id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                "Restaurant not found",
                ErrorContext::new("find_restaurant")
                    .with_entity("restaurant")
                    .with_entity_id(id),
            )
        })
    }
}
