//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository instances
//! based on runtime configuration.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use log::info;

use super::repo_config::RepositoryConfig;
use super::repositories::{JsonFileRepository, LocalRepository};
use super::repository::{RepositoryError, RepositoryResult, RestaurantRepository};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// Flat JSON files with a TTL cache
    Json,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("json", "file", "local", "memory").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" | "file" => Ok(Self::Json),
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from the `REPOSITORY_TYPE` environment variable.
    ///
    /// Defaults to `Json`.
    pub fn from_env() -> Self {
        std::env::var("REPOSITORY_TYPE")
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or(Self::Json)
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```no_run
/// use restaurant_analytics::db::{RepositoryConfig, RepositoryFactory};
///
/// let config = RepositoryConfig::default();
/// let repo = RepositoryFactory::from_config(&config).unwrap();
/// assert_eq!(repo.source_name(), "json");
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance from configuration.
    pub fn from_config(config: &RepositoryConfig) -> RepositoryResult<Arc<dyn RestaurantRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        match repo_type {
            RepositoryType::Json => Ok(Self::create_json(
                config.json.data_dir.clone(),
                config.json.cache_ttl(),
            )),
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create a JSON file repository.
    pub fn create_json(data_dir: PathBuf, cache_ttl: Duration) -> Arc<dyn RestaurantRepository> {
        let repo = JsonFileRepository::new(data_dir, cache_ttl);
        info!(
            "Using JSON repository at {} (cache TTL {}s)",
            repo.data_dir().display(),
            repo.cache_ttl().as_secs()
        );
        Arc::new(repo)
    }

    /// Create an empty local (in-memory) repository.
    pub fn create_local() -> Arc<dyn RestaurantRepository> {
        info!("Using in-memory local repository");
        Arc::new(LocalRepository::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_type_from_str() {
        assert_eq!("json".parse::<RepositoryType>().unwrap(), RepositoryType::Json);
        assert_eq!("FILE".parse::<RepositoryType>().unwrap(), RepositoryType::Json);
        assert_eq!("local".parse::<RepositoryType>().unwrap(), RepositoryType::Local);
        assert_eq!("Memory".parse::<RepositoryType>().unwrap(), RepositoryType::Local);
        assert!("postgres".parse::<RepositoryType>().is_err());
    }

    #[test]
    fn test_from_config_local() {
        let mut config = RepositoryConfig::default();
        config.repository.repo_type = "local".to_string();

        let repo = RepositoryFactory::from_config(&config).unwrap();
        assert_eq!(repo.source_name(), "local");
    }

    #[test]
    fn test_from_config_rejects_unknown_type() {
        let mut config = RepositoryConfig::default();
        config.repository.repo_type = "azure".to_string();

        let err = RepositoryFactory::from_config(&config).err().unwrap();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    }
}
