//! In-memory local repository implementation.
//!
//! This module provides a local implementation of [`RestaurantRepository`]
//! suitable for unit testing and local development. All data is stored in
//! memory, providing fast, deterministic, and isolated execution.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::db::checksum::calculate_checksum;
use crate::db::models::{DataSnapshot, Order, Restaurant};
use crate::db::repository::{RepositoryError, RepositoryResult, RestaurantRepository};

/// In-memory local repository.
///
/// # Example
/// ```
/// use restaurant_analytics::db::repositories::LocalRepository;
/// use restaurant_analytics::models::Restaurant;
///
/// let repo = LocalRepository::new();
/// repo.add_restaurant(Restaurant::new(1, "Sushi Place", "Tokyo", "Japanese"));
/// assert_eq!(repo.restaurant_count(), 1);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    restaurants: Vec<Restaurant>,
    orders: Vec<Order>,
    // Rebuilt lazily after any mutation.
    snapshot: Option<Arc<DataSnapshot>>,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            restaurants: Vec::new(),
            orders: Vec::new(),
            snapshot: None,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Create a repository pre-populated with both sequences.
    pub fn with_data(restaurants: Vec<Restaurant>, orders: Vec<Order>) -> Self {
        let repo = Self::new();
        {
            let mut data = repo.data.write();
            data.restaurants = restaurants;
            data.orders = orders;
        }
        repo
    }

    pub fn add_restaurant(&self, restaurant: Restaurant) {
        let mut data = self.data.write();
        data.restaurants.push(restaurant);
        data.snapshot = None;
    }

    pub fn add_order(&self, order: Order) {
        let mut data = self.data.write();
        data.orders.push(order);
        data.snapshot = None;
    }

    /// Set the health status for testing source failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    pub fn restaurant_count(&self) -> usize {
        self.data.read().restaurants.len()
    }

    pub fn order_count(&self) -> usize {
        self.data.read().orders.len()
    }

    fn check_health(&self) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection("Data source is not healthy"));
        }
        Ok(())
    }

    fn build_snapshot(restaurants: &[Restaurant], orders: &[Order]) -> RepositoryResult<DataSnapshot> {
        let restaurants_json = serde_json::to_vec(restaurants)
            .map_err(|e| RepositoryError::internal(format!("Failed to encode restaurants: {}", e)))?;
        let orders_json = serde_json::to_vec(orders)
            .map_err(|e| RepositoryError::internal(format!("Failed to encode orders: {}", e)))?;

        Ok(DataSnapshot::new(
            restaurants.to_vec(),
            orders.to_vec(),
            calculate_checksum([restaurants_json, orders_json]),
        ))
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RestaurantRepository for LocalRepository {
    fn source_name(&self) -> &'static str {
        "local"
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn snapshot(&self) -> RepositoryResult<Arc<DataSnapshot>> {
        self.check_health()?;

        if let Some(snapshot) = self.data.read().snapshot.clone() {
            return Ok(snapshot);
        }

        let mut data = self.data.write();
        let snapshot = Arc::new(
            Self::build_snapshot(&data.restaurants, &data.orders)
                .map_err(|e| e.with_operation("build_snapshot"))?,
        );
        data.snapshot = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }
}
