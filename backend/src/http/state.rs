//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::RestaurantRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Data source shared by every request
    pub repository: Arc<dyn RestaurantRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn RestaurantRepository>) -> Self {
        Self { repository }
    }
}
