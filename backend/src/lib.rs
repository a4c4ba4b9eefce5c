//! # Restaurant Analytics Backend
//!
//! Order analytics over a static restaurant dataset.
//!
//! This crate loads restaurants and orders from flat JSON files and answers
//! analytical questions about them: per-restaurant daily and hourly
//! breakdowns, revenue rankings, restaurant search, order filtering and
//! paginated listings. A REST API is exposed via Axum.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Restaurants, orders, timestamps and date/hour ranges
//! - [`api`]: Identifier types and the DTOs returned by the API
//! - [`db`]: Repository pattern, JSON and in-memory data sources, TTL cache
//! - [`services`]: Aggregation, search, filtering, listing and pagination
//! - [`routes`]: Route-specific data types
//! - `http`: Axum-based HTTP server and request handlers (feature `http-server`)

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
