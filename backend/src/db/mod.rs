//! Data provider for restaurants and orders.
//!
//! This module provides abstractions over the static dataset via the Repository
//! pattern, allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API)                            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - shared data access        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                 │
//! ┌───▼──────────────────┐  ┌──────────▼──────────────┐
//! │ JSON File Repository │  │ Local Repository        │
//! │ (TTL cache)          │  │ (in-memory)             │
//! └──────────────────────┘  └─────────────────────────┘
//! ```
//!
//! # Module layout
//! - `services`: High-level data access helpers
//! - `repository`: Trait definition and error types
//! - `repositories::json`: JSON file implementation with a TTL cache
//! - `repositories::local`: In-memory implementation for unit testing and local development
//! - `cache`: The TTL cache injected into the JSON repository
//! - `factory`: Factory for creating repository instances
//! - `repo_config`: `repository.toml` loading and environment overrides

pub mod cache;
pub mod checksum;
pub mod factory;
pub mod models;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

pub use services::{get_restaurant, health_check, load_snapshot};

pub use cache::{TtlCache, DEFAULT_CACHE_TTL};
pub use checksum::calculate_checksum;
pub use factory::{RepositoryFactory, RepositoryType};
pub use models::DataSnapshot;
pub use repo_config::RepositoryConfig;
pub use repositories::{JsonFileRepository, LocalRepository};
pub use repository::{ErrorContext, RepositoryError, RepositoryResult, RestaurantRepository};
