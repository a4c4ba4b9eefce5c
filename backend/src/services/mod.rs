//! Service layer for business logic.
//!
//! Services sit between the repository and the HTTP handlers. The pure
//! computations take slices of restaurants and orders; the async wrappers
//! fetch the current snapshot from a [`RestaurantRepository`] first.
//!
//! [`RestaurantRepository`]: crate::db::RestaurantRepository

pub mod analytics;
pub mod error;
pub mod filtering;
pub mod listing;
pub mod pagination;


pub use analytics::{get_restaurant_analytics, get_top_restaurants};
pub use error::{ServiceError, ServiceResult};
pub use filtering::{find_orders, find_restaurants};
pub use listing::{get_restaurant_listing, ListingOptions, RestaurantListing};
pub use pagination::{paginate, Page, PageRequest, Pagination};
