//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint: it parses the query string
//! into a typed request, delegates to the service layer and wraps the result
//! in the `{success, data, message}` envelope.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{info, warn};

use super::dto::{
    parse_restaurant_id, AnalyticsQuery, ApiResponse, HealthResponse, OrderFilterQuery,
    RestaurantListQuery, SearchQuery, TopRestaurantsQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    FilteredOrder, Restaurant, RestaurantAnalytics, RestaurantListItem, RestaurantSearch,
    TopRestaurantsData,
};
use crate::db::services as db_services;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<ApiResponse<T>>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Reports whether the dataset can be loaded, with its size and checksum.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let repo = state.repository.as_ref();
    let snapshot = match db_services::health_check(repo).await {
        Ok(true) => db_services::load_snapshot(repo).await.ok(),
        Ok(false) => None,
        Err(e) => {
            warn!("Health check failed: {}", e);
            None
        }
    };

    Json(HealthResponse {
        status: if snapshot.is_some() { "ok" } else { "unavailable" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_source: repo.source_name().to_string(),
        restaurants: snapshot.as_ref().map_or(0, |s| s.restaurants.len()),
        orders: snapshot.as_ref().map_or(0, |s| s.orders.len()),
        checksum: snapshot.map(|s| s.checksum.clone()),
    })
}

// =============================================================================
// Restaurants
// =============================================================================

/// GET /api/restaurants
///
/// List restaurants with optional sorting, pagination and order totals.
pub async fn list_restaurants(
    State(state): State<AppState>,
    Query(query): Query<RestaurantListQuery>,
) -> HandlerResult<Vec<RestaurantListItem>> {
    let options = query.into_options()?;
    let listing = services::get_restaurant_listing(state.repository.as_ref(), options).await?;

    Ok(Json(
        ApiResponse::ok(listing.items, "Restaurants retrieved successfully")
            .with_pagination(listing.pagination),
    ))
}

/// GET /api/restaurants/{id}
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Restaurant> {
    let id = parse_restaurant_id(&id)?;
    let restaurant = db_services::get_restaurant(state.repository.as_ref(), id).await?;

    Ok(Json(ApiResponse::ok(restaurant, "Restaurant found")))
}

/// GET /api/restaurants/{id}/analytics
///
/// Daily, hourly and summary figures for one restaurant over a date window.
pub async fn get_restaurant_analytics(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<AnalyticsQuery>,
) -> HandlerResult<RestaurantAnalytics> {
    let id = parse_restaurant_id(&id)?;
    let range = query.date_range()?;
    let analytics =
        services::get_restaurant_analytics(state.repository.as_ref(), id, range).await?;

    Ok(Json(ApiResponse::ok(
        analytics,
        "Restaurant analytics retrieved successfully",
    )))
}

/// GET /api/top-restaurants
pub async fn get_top_restaurants(
    State(state): State<AppState>,
    Query(query): Query<TopRestaurantsQuery>,
) -> HandlerResult<TopRestaurantsData> {
    let range = query.date_range()?;
    let limit = query.limit()?;
    let top = services::get_top_restaurants(state.repository.as_ref(), range, limit).await?;

    info!(
        "Ranked {} restaurants for {}..{}",
        top.total_restaurants_analyzed, range.start, range.end
    );
    Ok(Json(ApiResponse::ok(
        top,
        "Top restaurants retrieved successfully",
    )))
}

/// GET /api/search/restaurants
pub async fn search_restaurants(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> HandlerResult<Vec<Restaurant>> {
    let search = RestaurantSearch::from(query);
    let found = services::find_restaurants(state.repository.as_ref(), &search).await?;
    let count = found.len();

    Ok(Json(
        ApiResponse::ok(found, "Restaurants search completed").with_count(count),
    ))
}

/// GET /api/filter/orders
///
/// Filtered, paginated orders with the effective filters echoed back.
pub async fn filter_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderFilterQuery>,
) -> HandlerResult<Vec<FilteredOrder>> {
    let filter = query.filter()?;
    let request = query.page_request()?;
    let page = services::find_orders(state.repository.as_ref(), &filter, request).await?;
    let count = page.items.len();

    Ok(Json(
        ApiResponse::ok(page.items, "Orders filtered successfully")
            .with_pagination(Some(page.pagination))
            .with_count(count)
            .with_filters(filter),
    ))
}
