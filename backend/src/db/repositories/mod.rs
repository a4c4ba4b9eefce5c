//! Repository implementations module.
//!
//! This module contains the implementations of the `RestaurantRepository` trait:
//! - `json`: flat JSON files behind a TTL cache (production)
//! - `local`: In-memory implementation for unit testing and local development
pub mod json;
pub mod local;

pub use json::JsonFileRepository;
pub use local::LocalRepository;
