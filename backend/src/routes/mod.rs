pub mod analytics;
pub mod orders;
pub mod restaurants;
pub mod search;
pub mod top_restaurants;
