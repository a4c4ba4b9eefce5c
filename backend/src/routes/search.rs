use serde::{Deserialize, Serialize};

/// Restaurant search criteria.
///
/// Each field is a case-insensitive substring filter; blank values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantSearch {
    pub query: Option<String>,
    pub location: Option<String>,
    pub cuisine: Option<String>,
}

impl RestaurantSearch {
    pub fn new(query: Option<String>, location: Option<String>, cuisine: Option<String>) -> Self {
        Self {
            query: non_blank(query),
            location: non_blank(location),
            cuisine: non_blank(cuisine),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.location.is_none() && self.cuisine.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
