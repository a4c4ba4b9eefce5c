//! Data Transfer Objects for the HTTP API.
//!
//! Query parameters arrive as optional strings and are parsed here into the
//! typed requests the service layer expects, so every malformed value is
//! reported as a 400 with the usual error body.

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::api::{
    DateRange, HourRange, OrderFilter, PageRequest, Pagination, RestaurantId, RestaurantSearch,
    RestaurantSort, SortField, SortOrder,
};
use crate::models::parse_date;
use crate::routes::orders::{DEFAULT_ORDERS_PER_PAGE, MAX_ORDERS_PER_PAGE};
use crate::routes::restaurants::{DEFAULT_RESTAURANTS_PER_PAGE, MAX_RESTAURANTS_PER_PAGE};
use crate::routes::top_restaurants::{DEFAULT_TOP_LIMIT, MAX_TOP_LIMIT};
use crate::services::{ListingOptions, ServiceError};

/// Window used by the analytics endpoints when no dates are given.
pub const DEFAULT_START_DATE: &str = "2025-06-22";
pub const DEFAULT_END_DATE: &str = "2025-06-28";

/// Success envelope shared by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters_applied: Option<OrderFilter>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
            pagination: None,
            count: None,
            filters_applied: None,
        }
    }

    pub fn with_pagination(mut self, pagination: Option<Pagination>) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_filters(mut self, filters: OrderFilter) -> Self {
        self.filters_applied = Some(filters);
        self
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when the dataset loads, `unavailable` otherwise
    pub status: String,
    /// Crate version
    pub version: String,
    /// Repository backend name
    pub data_source: String,
    pub restaurants: usize,
    pub orders: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

// =============================================================================
// Parameter parsing
// =============================================================================

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_param<T>(name: &str, value: &Option<String>) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    present(value)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| AppError::BadRequest(format!("Invalid {} '{}': {}", name, raw, e)))
        })
        .transpose()
}

/// Amounts must be finite; `NaN` and `inf` parse as `f64` but match nothing.
fn parse_amount_param(name: &str, value: &Option<String>) -> Result<Option<f64>, AppError> {
    match parse_param::<f64>(name, value)? {
        Some(amount) if !amount.is_finite() => Err(AppError::BadRequest(format!(
            "Invalid {} '{}': must be a finite number",
            name,
            present(value).unwrap_or_default()
        ))),
        amount => Ok(amount),
    }
}

/// Accepts `true`/`false` and the `1`/`0` form-style flags.
fn parse_flag_param(name: &str, value: &Option<String>) -> Result<Option<bool>, AppError> {
    present(value)
        .map(|raw| match raw.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(AppError::BadRequest(format!(
                "Invalid {} '{}': expected true, false, 1 or 0",
                name, raw
            ))),
        })
        .transpose()
}

fn parse_date_param(name: &str, value: &Option<String>) -> Result<Option<NaiveDate>, AppError> {
    present(value)
        .map(|raw| {
            parse_date(raw).map_err(|_| {
                AppError::BadRequest(format!(
                    "Invalid {} '{}', expected YYYY-MM-DD",
                    name, raw
                ))
            })
        })
        .transpose()
}

fn default_date(raw: &str) -> Result<NaiveDate, AppError> {
    parse_date(raw).map_err(|e| AppError::Internal(format!("Bad default date {}: {}", raw, e)))
}

/// Parse a `{id}` path segment.
pub fn parse_restaurant_id(raw: &str) -> Result<RestaurantId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid restaurant id '{}'", raw)))
}

/// Date window for the analytics endpoints; each missing bound falls back to
/// the default week.
fn analytics_window(start: &Option<String>, end: &Option<String>) -> Result<DateRange, AppError> {
    let start = match parse_date_param("start_date", start)? {
        Some(date) => date,
        None => default_date(DEFAULT_START_DATE)?,
    };
    let end = match parse_date_param("end_date", end)? {
        Some(date) => date,
        None => default_date(DEFAULT_END_DATE)?,
    };
    Ok(DateRange::new(start, end))
}

// =============================================================================
// Query parameters
// =============================================================================

/// Query parameters for `GET /restaurants`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantListQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub include_stats: Option<String>,
}

impl RestaurantListQuery {
    /// Pagination applies when `page` or `per_page` is present.
    pub fn into_options(self) -> Result<ListingOptions, AppError> {
        let page: Option<usize> = parse_param("page", &self.page)?;
        let per_page: Option<usize> = parse_param("per_page", &self.per_page)?;
        let field = present(&self.sort_by)
            .map(str::parse::<SortField>)
            .transpose()
            .map_err(AppError::BadRequest)?
            .unwrap_or_default();
        let order = present(&self.sort_order)
            .map(str::parse::<SortOrder>)
            .transpose()
            .map_err(AppError::BadRequest)?
            .unwrap_or_default();
        let include_stats = parse_flag_param("include_stats", &self.include_stats)?.unwrap_or(false);

        let page = match (page, per_page) {
            (None, None) => None,
            (page, per_page) => Some(PageRequest::new(
                page.unwrap_or(1),
                per_page.unwrap_or(DEFAULT_RESTAURANTS_PER_PAGE),
                MAX_RESTAURANTS_PER_PAGE,
            )),
        };

        Ok(ListingOptions {
            sort: RestaurantSort::new(field, order),
            include_stats,
            page,
        })
    }
}

/// Query parameters for `GET /restaurants/{id}/analytics`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl AnalyticsQuery {
    pub fn date_range(&self) -> Result<DateRange, AppError> {
        analytics_window(&self.start_date, &self.end_date)
    }
}

/// Query parameters for `GET /top-restaurants`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopRestaurantsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: Option<String>,
}

impl TopRestaurantsQuery {
    pub fn date_range(&self) -> Result<DateRange, AppError> {
        analytics_window(&self.start_date, &self.end_date)
    }

    /// Requested ranking size; anything outside `1..=10` is rejected.
    pub fn limit(&self) -> Result<usize, AppError> {
        let out_of_range = || {
            AppError::BadRequest(format!("Limit must be between 1 and {}", MAX_TOP_LIMIT))
        };
        match present(&self.limit) {
            None => Ok(DEFAULT_TOP_LIMIT),
            Some(raw) => {
                let limit: i64 = raw.parse().map_err(|_| out_of_range())?;
                if (1..=MAX_TOP_LIMIT as i64).contains(&limit) {
                    Ok(limit as usize)
                } else {
                    Err(out_of_range())
                }
            }
        }
    }
}

/// Query parameters for `GET /search/restaurants`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub location: Option<String>,
    pub cuisine: Option<String>,
}

impl From<SearchQuery> for RestaurantSearch {
    fn from(query: SearchQuery) -> Self {
        RestaurantSearch::new(query.query, query.location, query.cuisine)
    }
}

/// Query parameters for `GET /filter/orders`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderFilterQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub restaurant_id: Option<String>,
    pub min_amount: Option<String>,
    pub max_amount: Option<String>,
    pub start_hour: Option<String>,
    pub end_hour: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl OrderFilterQuery {
    /// The date filter applies only when both dates are given.
    pub fn filter(&self) -> Result<OrderFilter, AppError> {
        let start = parse_date_param("start_date", &self.start_date)?;
        let end = parse_date_param("end_date", &self.end_date)?;
        let start_hour: Option<i64> = parse_param("start_hour", &self.start_hour)?;
        let end_hour: Option<i64> = parse_param("end_hour", &self.end_hour)?;

        Ok(OrderFilter {
            date_range: DateRange::from_bounds(start, end),
            restaurant_id: parse_param("restaurant_id", &self.restaurant_id)?,
            min_amount: parse_amount_param("min_amount", &self.min_amount)?,
            max_amount: parse_amount_param("max_amount", &self.max_amount)?,
            hours: HourRange::from_bounds(start_hour, end_hour).map_err(ServiceError::from)?,
        })
    }

    pub fn page_request(&self) -> Result<PageRequest, AppError> {
        let page: Option<usize> = parse_param("page", &self.page)?;
        let per_page: Option<usize> = parse_param("per_page", &self.per_page)?;
        Ok(PageRequest::new(
            page.unwrap_or(1),
            per_page.unwrap_or(DEFAULT_ORDERS_PER_PAGE),
            MAX_ORDERS_PER_PAGE,
        ))
    }
}
