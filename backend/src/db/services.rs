//! High-level data access service layer.
//!
//! Repository-agnostic helpers shared by the HTTP handlers and the analytics
//! services. They work with any [`RestaurantRepository`] implementation.
//!
//! # Usage
//!
//! ```no_run
//! use restaurant_analytics::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let snapshot = services::load_snapshot(&repo).await?;
//!     println!("Found {} restaurants", snapshot.restaurants.len());
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use log::{debug, info};

use super::models::{DataSnapshot, Restaurant, RestaurantId};
use super::repository::{RepositoryResult, RestaurantRepository};

/// Check if the data source is healthy.
pub async fn health_check<R: RestaurantRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Current dataset snapshot.
pub async fn load_snapshot<R: RestaurantRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Arc<DataSnapshot>> {
    let snapshot = repo.snapshot().await?;
    debug!(
        "Service layer: snapshot with {} restaurants, {} orders",
        snapshot.restaurants.len(),
        snapshot.orders.len()
    );
    Ok(snapshot)
}

/// Retrieve one restaurant by id.
///
/// # Returns
/// * `Err(RepositoryError::NotFound)` - If the restaurant doesn't exist
pub async fn get_restaurant<R: RestaurantRepository + ?Sized>(
    repo: &R,
    restaurant_id: RestaurantId,
) -> RepositoryResult<Restaurant> {
    info!("Service layer: loading restaurant by id {}", restaurant_id);
    repo.find_restaurant(restaurant_id).await
}
