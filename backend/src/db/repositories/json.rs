//! JSON file repository.
//!
//! Reads `restaurants.json` and `orders.json` from a data directory and keeps
//! the parsed snapshot in a [`TtlCache`]. Files are re-read at most once per
//! TTL; a failed read is reported to the caller and leaves the cache empty.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{info, warn};
use serde::de::DeserializeOwned;

use crate::db::cache::TtlCache;
use crate::db::checksum::calculate_checksum;
use crate::db::models::{DataSnapshot, Order, Restaurant};
use crate::db::repository::{
    ErrorContext, RepositoryError, RepositoryResult, RestaurantRepository,
};

pub const RESTAURANTS_FILE: &str = "restaurants.json";
pub const ORDERS_FILE: &str = "orders.json";

const SNAPSHOT_KEY: &str = "dataset";

/// Repository backed by two flat JSON files.
pub struct JsonFileRepository {
    data_dir: PathBuf,
    cache: Arc<TtlCache<&'static str, Arc<DataSnapshot>>>,
}

impl JsonFileRepository {
    /// Create a repository with its own cache of the given TTL.
    pub fn new(data_dir: impl Into<PathBuf>, cache_ttl: Duration) -> Self {
        Self::with_cache(data_dir, Arc::new(TtlCache::new(cache_ttl)))
    }

    /// Create a repository using an injected cache.
    pub fn with_cache(
        data_dir: impl Into<PathBuf>,
        cache: Arc<TtlCache<&'static str, Arc<DataSnapshot>>>,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache.ttl()
    }

    /// Force the next access to re-read both files.
    pub fn invalidate(&self) {
        self.cache.invalidate(&SNAPSHOT_KEY);
    }

    /// Read and validate both files, bypassing the cache.
    pub async fn load_snapshot(&self) -> RepositoryResult<DataSnapshot> {
        let restaurants_raw = read_source(&self.data_dir.join(RESTAURANTS_FILE)).await?;
        let orders_raw = read_source(&self.data_dir.join(ORDERS_FILE)).await?;

        let restaurants: Vec<Restaurant> = parse_source(RESTAURANTS_FILE, "restaurant", &restaurants_raw)?;
        let orders: Vec<Order> = parse_source(ORDERS_FILE, "order", &orders_raw)?;

        validate(&restaurants, &orders)?;

        let checksum = calculate_checksum([&restaurants_raw, &orders_raw]);
        info!(
            "Loaded {} restaurants and {} orders from {} (checksum {})",
            restaurants.len(),
            orders.len(),
            self.data_dir.display(),
            &checksum[..12]
        );

        Ok(DataSnapshot::new(restaurants, orders, checksum))
    }
}

async fn read_source(path: &Path) -> RepositoryResult<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|e| {
        RepositoryError::internal_with_context(
            format!("Failed to read {}: {}", path.display(), e),
            ErrorContext::new("load_snapshot").with_details(path.display().to_string()),
        )
    })
}

fn parse_source<T: DeserializeOwned>(
    file: &str,
    entity: &str,
    raw: &[u8],
) -> RepositoryResult<Vec<T>> {
    serde_json::from_slice(raw).map_err(|e| {
        RepositoryError::validation_with_context(
            format!("Malformed {}: {}", file, e),
            ErrorContext::new("load_snapshot").with_entity(entity),
        )
    })
}

fn validate(restaurants: &[Restaurant], orders: &[Order]) -> RepositoryResult<()> {
    let mut seen = HashSet::with_capacity(restaurants.len());
    for restaurant in restaurants {
        if !seen.insert(restaurant.id) {
            return Err(RepositoryError::validation_with_context(
                format!("Duplicate restaurant id {}", restaurant.id),
                ErrorContext::new("load_snapshot")
                    .with_entity("restaurant")
                    .with_entity_id(restaurant.id),
            ));
        }
    }

    for order in orders {
        if !order.order_amount.is_finite() || order.order_amount < 0.0 {
            return Err(RepositoryError::validation_with_context(
                format!("Order {} has invalid amount {}", order.id, order.order_amount),
                ErrorContext::new("load_snapshot")
                    .with_entity("order")
                    .with_entity_id(order.id),
            ));
        }
    }

    let orphans = orders
        .iter()
        .filter(|o| !seen.contains(&o.restaurant_id))
        .count();
    if orphans > 0 {
        warn!("{} orders reference unknown restaurants", orphans);
    }

    Ok(())
}

#[async_trait]
impl RestaurantRepository for JsonFileRepository {
    fn source_name(&self) -> &'static str {
        "json"
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        let restaurants = tokio::fs::try_exists(self.data_dir.join(RESTAURANTS_FILE)).await;
        let orders = tokio::fs::try_exists(self.data_dir.join(ORDERS_FILE)).await;
        Ok(matches!((restaurants, orders), (Ok(true), Ok(true))))
    }

    async fn snapshot(&self) -> RepositoryResult<Arc<DataSnapshot>> {
        self.cache
            .get_or_try_load(SNAPSHOT_KEY, || async {
                self.load_snapshot().await.map(Arc::new)
            })
            .await
    }
}
