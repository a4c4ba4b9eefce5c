//! Page slicing for list responses.

use serde::{Deserialize, Serialize};

/// Normalized page request.
///
/// `page` is 1-based and at least 1; `per_page` lies in `1..=max` for the
/// maximum passed to [`PageRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    per_page: usize,
}

impl PageRequest {
    /// Clamp a raw request into range.
    pub fn new(page: usize, per_page: usize, max_per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, max_per_page.max(1)),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

/// Pagination metadata returned next to a page of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: usize,
    pub per_page: usize,
    pub total: usize,
    /// `ceil(total / per_page)`; 0 when there are no items.
    pub last_page: usize,
}

/// One page of items.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Slice `items` to the requested page.
///
/// A page past the end yields no items but still reports the full total.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len();
    let items: Vec<T> = items
        .into_iter()
        .skip(request.offset())
        .take(request.per_page())
        .collect();

    Page {
        items,
        pagination: Pagination {
            current_page: request.page(),
            per_page: request.per_page(),
            total,
            last_page: total.div_ceil(request.per_page()),
        },
    }
}
