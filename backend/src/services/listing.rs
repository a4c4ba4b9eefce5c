//! Restaurant listing with optional stats, sorting and pagination.

use std::cmp::Ordering;

use crate::api::{Pagination, RestaurantListItem, RestaurantSort, SortField, SortOrder};
use crate::db::repository::RestaurantRepository;
use crate::models::{Order, Restaurant};

use super::analytics::compute_restaurant_stats;
use super::error::ServiceResult;
use super::pagination::{paginate, PageRequest};

/// How the listing should be shaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingOptions {
    pub sort: RestaurantSort,
    /// Attach all-time order totals to every item.
    pub include_stats: bool,
    /// `None` returns the whole list.
    pub page: Option<PageRequest>,
}

impl ListingOptions {
    /// Stats are computed when requested or when the sort key needs them.
    pub fn wants_stats(&self) -> bool {
        self.include_stats || self.sort.field.needs_stats()
    }
}

/// Listing result; `pagination` is present only for a paged request.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantListing {
    pub items: Vec<RestaurantListItem>,
    pub pagination: Option<Pagination>,
}

/// Pair every restaurant with its all-time totals.
pub fn attach_stats(restaurants: Vec<Restaurant>, orders: &[Order]) -> Vec<RestaurantListItem> {
    let stats = compute_restaurant_stats(orders, None);
    restaurants
        .into_iter()
        .map(|restaurant| RestaurantListItem {
            stats: Some(stats.get(&restaurant.id).copied().unwrap_or_default()),
            restaurant,
        })
        .collect()
}

fn stat_value(item: &RestaurantListItem, field: SortField) -> f64 {
    let stats = item.stats.unwrap_or_default();
    match field {
        SortField::TotalOrders => stats.total_orders as f64,
        SortField::AverageOrderValue => stats.average_order_value,
        _ => stats.total_revenue,
    }
}

fn compare(a: &RestaurantListItem, b: &RestaurantListItem, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.restaurant.name.cmp(&b.restaurant.name),
        SortField::Location => a.restaurant.location.cmp(&b.restaurant.location),
        SortField::Cuisine => a.restaurant.cuisine.cmp(&b.restaurant.cuisine),
        SortField::TotalRevenue | SortField::TotalOrders | SortField::AverageOrderValue => {
            stat_value(a, field).total_cmp(&stat_value(b, field))
        }
    }
}

/// Stable sort; equal keys keep their relative order in both directions.
///
/// Strings compare byte-wise and case-sensitively. Items without stats sort
/// as zero on numeric fields.
pub fn sort_restaurants(items: &mut [RestaurantListItem], sort: RestaurantSort) {
    items.sort_by(|a, b| {
        let ordering = compare(a, b, sort.field);
        match sort.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Build the listing from the full dataset.
pub fn list_restaurants(
    restaurants: Vec<Restaurant>,
    orders: &[Order],
    options: ListingOptions,
) -> RestaurantListing {
    let mut items: Vec<RestaurantListItem> = if options.wants_stats() {
        attach_stats(restaurants, orders)
    } else {
        restaurants.into_iter().map(RestaurantListItem::from).collect()
    };

    sort_restaurants(&mut items, options.sort);

    match options.page {
        Some(request) => {
            let page = paginate(items, request);
            RestaurantListing {
                items: page.items,
                pagination: Some(page.pagination),
            }
        }
        None => RestaurantListing {
            items,
            pagination: None,
        },
    }
}

pub async fn get_restaurant_listing<R: RestaurantRepository + ?Sized>(
    repo: &R,
    options: ListingOptions,
) -> ServiceResult<RestaurantListing> {
    let snapshot = repo.snapshot().await?;
    Ok(list_restaurants(
        snapshot.restaurants.clone(),
        &snapshot.orders,
        options,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::models::parse_order_time;
    use crate::routes::restaurants::MAX_RESTAURANTS_PER_PAGE;

    fn restaurants() -> Vec<Restaurant> {
        vec![
            Restaurant::new(1, "Sushi Place", "Tokyo", "Japanese"),
            Restaurant::new(2, "Pasta Corner", "Rome", "Italian"),
            Restaurant::new(3, "burger barn", "Austin", "American"),
            Restaurant::new(4, "Curry House", "Delhi", "Indian"),
        ]
    }

    fn orders() -> Vec<Order> {
        let at = |s: &str| parse_order_time(s).unwrap();
        vec![
            Order::new(1, 1, at("2025-06-23T10:00:00"), 100.0),
            Order::new(2, 2, at("2025-06-23T11:00:00"), 30.0),
            Order::new(3, 2, at("2025-06-24T11:00:00"), 30.0),
            Order::new(4, 4, at("2025-06-24T12:00:00"), 60.0),
        ]
    }

    fn names(items: &[RestaurantListItem]) -> Vec<&str> {
        items.iter().map(|i| i.restaurant.name.as_str()).collect()
    }

    #[test]
    fn test_default_sort_by_name_is_case_sensitive() {
        let listing = list_restaurants(restaurants(), &orders(), ListingOptions::default());

        assert_eq!(
            names(&listing.items),
            vec!["Curry House", "Pasta Corner", "Sushi Place", "burger barn"]
        );
        assert!(listing.pagination.is_none());
        assert!(listing.items.iter().all(|i| i.stats.is_none()));
    }

    #[test]
    fn test_sort_by_revenue_desc_attaches_stats() {
        let options = ListingOptions {
            sort: RestaurantSort::new(SortField::TotalRevenue, SortOrder::Desc),
            ..Default::default()
        };
        let listing = list_restaurants(restaurants(), &orders(), options);

        assert_eq!(
            names(&listing.items),
            vec!["Sushi Place", "Pasta Corner", "Curry House", "burger barn"]
        );
        let last = listing.items[3].stats.unwrap();
        assert_eq!(last.total_orders, 0);
        assert_eq!(last.average_order_value, 0.0);
    }

    #[test]
    fn test_equal_keys_keep_source_order() {
        let options = ListingOptions {
            sort: RestaurantSort::new(SortField::TotalOrders, SortOrder::Desc),
            ..Default::default()
        };
        let listing = list_restaurants(restaurants(), &orders(), options);

        // Sushi Place and Curry House both have one order.
        assert_eq!(
            names(&listing.items),
            vec!["Pasta Corner", "Sushi Place", "Curry House", "burger barn"]
        );
    }

    #[test]
    fn test_include_stats_without_stat_sort() {
        let options = ListingOptions {
            sort: RestaurantSort::new(SortField::Location, SortOrder::Asc),
            include_stats: true,
            page: None,
        };
        let listing = list_restaurants(restaurants(), &orders(), options);

        assert_eq!(listing.items[0].restaurant.location, "Austin");
        assert_eq!(listing.items[1].stats.unwrap().total_revenue, 60.0);
    }

    #[test]
    fn test_paged_listing() {
        let options = ListingOptions {
            page: Some(PageRequest::new(2, 3, MAX_RESTAURANTS_PER_PAGE)),
            ..Default::default()
        };
        let listing = list_restaurants(restaurants(), &orders(), options);

        assert_eq!(names(&listing.items), vec!["burger barn"]);
        let pagination = listing.pagination.unwrap();
        assert_eq!(pagination.total, 4);
        assert_eq!(pagination.last_page, 2);
    }

    #[tokio::test]
    async fn test_listing_through_repository() {
        let repo = LocalRepository::with_data(restaurants(), orders());
        let listing = get_restaurant_listing(&repo, ListingOptions::default())
            .await
            .unwrap();
        assert_eq!(listing.items.len(), 4);
    }
}
