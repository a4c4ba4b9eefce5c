//! Restaurant search and order filtering.

use log::debug;

use crate::api::{FilteredOrder, OrderFilter, RestaurantSearch};
use crate::db::repository::RestaurantRepository;
use crate::models::{Order, Restaurant};

use super::error::ServiceResult;
use super::pagination::{paginate, Page, PageRequest};

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether `restaurant` satisfies every criterion in `search`.
///
/// `query` matches name, location or cuisine; `location` and `cuisine` only
/// their own field.
pub fn matches_search(restaurant: &Restaurant, search: &RestaurantSearch) -> bool {
    search.query.as_deref().map_or(true, |q| {
        contains_ignore_case(&restaurant.name, q)
            || contains_ignore_case(&restaurant.location, q)
            || contains_ignore_case(&restaurant.cuisine, q)
    }) && search
        .location
        .as_deref()
        .map_or(true, |l| contains_ignore_case(&restaurant.location, l))
        && search
            .cuisine
            .as_deref()
            .map_or(true, |c| contains_ignore_case(&restaurant.cuisine, c))
}

/// Restaurants matching `search`, in source order.
pub fn search_restaurants(restaurants: &[Restaurant], search: &RestaurantSearch) -> Vec<Restaurant> {
    restaurants
        .iter()
        .filter(|r| matches_search(r, search))
        .cloned()
        .collect()
}

/// Orders matching `filter`, in source order.
pub fn filter_orders(orders: &[Order], filter: &OrderFilter) -> Vec<Order> {
    orders.iter().filter(|o| filter.matches(o)).cloned().collect()
}

/// One page of matching orders, each with its derived date and hour.
pub fn filter_orders_page(
    orders: &[Order],
    filter: &OrderFilter,
    request: PageRequest,
) -> Page<FilteredOrder> {
    let matching: Vec<FilteredOrder> = orders
        .iter()
        .filter(|o| filter.matches(o))
        .cloned()
        .map(FilteredOrder::from)
        .collect();
    paginate(matching, request)
}

pub async fn find_restaurants<R: RestaurantRepository + ?Sized>(
    repo: &R,
    search: &RestaurantSearch,
) -> ServiceResult<Vec<Restaurant>> {
    let snapshot = repo.snapshot().await?;
    if search.is_empty() {
        return Ok(snapshot.restaurants.clone());
    }
    let found = search_restaurants(&snapshot.restaurants, search);
    debug!("Search {:?} matched {} restaurants", search, found.len());
    Ok(found)
}

pub async fn find_orders<R: RestaurantRepository + ?Sized>(
    repo: &R,
    filter: &OrderFilter,
    request: PageRequest,
) -> ServiceResult<Page<FilteredOrder>> {
    let snapshot = repo.snapshot().await?;
    let page = filter_orders_page(&snapshot.orders, filter, request);
    debug!(
        "Order filter matched {} orders, returning page {} of {}",
        page.pagination.total, page.pagination.current_page, page.pagination.last_page
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RestaurantId;
    use crate::db::repositories::LocalRepository;
    use crate::models::{parse_order_time, DateRange, HourRange};
    use crate::routes::orders::MAX_ORDERS_PER_PAGE;

    fn restaurants() -> Vec<Restaurant> {
        vec![
            Restaurant::new(1, "Sushi Place", "Tokyo", "Japanese"),
            Restaurant::new(2, "Pasta Corner", "Rome", "Italian"),
            Restaurant::new(3, "Tokyo Ramen", "Osaka", "Japanese"),
            Restaurant::new(4, "Curry House", "Delhi", "Indian"),
        ]
    }

    fn order(id: i64, restaurant_id: i64, time: &str, amount: f64) -> Order {
        Order::new(id, restaurant_id, parse_order_time(time).unwrap(), amount)
    }

    fn orders() -> Vec<Order> {
        vec![
            order(1, 1, "2025-06-22T08:15:00", 20.0),
            order(2, 1, "2025-06-23T12:00:00", 35.5),
            order(3, 2, "2025-06-23T12:45:00", 60.0),
            order(4, 3, "2025-06-27T19:00:00", 15.0),
            order(5, 2, "2025-06-29T05:00:00", 90.0),
        ]
    }

    fn search(query: Option<&str>, location: Option<&str>, cuisine: Option<&str>) -> RestaurantSearch {
        RestaurantSearch::new(
            query.map(String::from),
            location.map(String::from),
            cuisine.map(String::from),
        )
    }

    fn ids(restaurants: &[Restaurant]) -> Vec<i64> {
        restaurants.iter().map(|r| r.id.value()).collect()
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let found = search_restaurants(&restaurants(), &search(Some("sushi"), None, None));
        assert_eq!(ids(&found), vec![1]);
    }

    #[test]
    fn test_query_matches_any_field() {
        let found = search_restaurants(&restaurants(), &search(Some("TOKYO"), None, None));
        assert_eq!(ids(&found), vec![1, 3]);
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let found = search_restaurants(
            &restaurants(),
            &search(Some("tokyo"), Some("osaka"), Some("japan")),
        );
        assert_eq!(ids(&found), vec![3]);

        let found = search_restaurants(&restaurants(), &search(None, Some("rome"), Some("indian")));
        assert!(found.is_empty());
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let found = search_restaurants(&restaurants(), &RestaurantSearch::default());
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn test_filter_by_date_range_and_restaurant() {
        let filter = OrderFilter {
            date_range: Some(DateRange::parse("2025-06-22", "2025-06-28").unwrap()),
            restaurant_id: Some(RestaurantId::new(2)),
            ..Default::default()
        };
        let found = filter_orders(&orders(), &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.value(), 3);
    }

    #[test]
    fn test_single_hour_range() {
        let filter = OrderFilter {
            hours: Some(HourRange::new(12, 12).unwrap()),
            ..Default::default()
        };
        let found = filter_orders(&orders(), &filter);
        assert_eq!(found.iter().map(|o| o.id.value()).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_page_carries_derived_fields() {
        let page = filter_orders_page(
            &orders(),
            &OrderFilter::default(),
            PageRequest::new(2, 2, MAX_ORDERS_PER_PAGE),
        );

        assert_eq!(page.pagination.total, 5);
        assert_eq!(page.pagination.last_page, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].order.id.value(), 3);
        assert_eq!(page.items[0].order_hour, 12);
        assert_eq!(page.items[0].order_date.to_string(), "2025-06-23");
    }

    #[tokio::test]
    async fn test_find_orders_through_repository() {
        let repo = LocalRepository::with_data(restaurants(), orders());
        let filter = OrderFilter {
            min_amount: Some(30.0),
            ..Default::default()
        };

        let page = find_orders(&repo, &filter, PageRequest::new(1, 20, MAX_ORDERS_PER_PAGE))
            .await
            .unwrap();
        assert_eq!(page.pagination.total, 3);

        let found = find_restaurants(&repo, &search(Some("curry"), None, None))
            .await
            .unwrap();
        assert_eq!(ids(&found), vec![4]);
    }
}
