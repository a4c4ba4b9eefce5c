//! Calendar helpers: order timestamps, inclusive date ranges and hour windows.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Calendar date format used on the wire (`2025-06-23`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical order timestamp format used when serializing orders.
pub const ORDER_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Accepted layouts for order timestamps without an explicit offset.
/// `%.f` also matches when no fractional part is present.
const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an order timestamp.
///
/// Offset-carrying RFC 3339 values keep their wall-clock time in the given
/// offset, so hour-of-day buckets reflect the source timezone.
pub fn parse_order_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
}

/// Serde adapter for order timestamps.
pub mod order_time_format {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{parse_order_time, ORDER_TIME_FORMAT};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(ORDER_TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_order_time(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid order_time '{}'", raw)))
    }
}

/// Inclusive calendar-date range.
///
/// `start > end` is allowed and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "start_date")]
    pub start: NaiveDate,
    #[serde(rename = "end_date")]
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse both bounds from `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, chrono::ParseError> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// Build a range only when both bounds are present.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Some(Self::new(start, end)),
            _ => None,
        }
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Calendar-date comparison; the time of day is discarded.
    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        self.contains_date(timestamp.date())
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// Errors raised while building a range from request input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("{field} must be between 0 and 23, got {value}")]
    HourOutOfBounds { field: &'static str, value: i64 },

    #[error("start_hour ({start}) must not be greater than end_hour ({end})")]
    InvertedHours { start: u32, end: u32 },
}

/// Inclusive hour-of-day window (0..=23).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourRange {
    #[serde(rename = "start_hour")]
    start: u32,
    #[serde(rename = "end_hour")]
    end: u32,
}

impl HourRange {
    pub const FIRST_HOUR: u32 = 0;
    pub const LAST_HOUR: u32 = 23;

    pub fn new(start: u32, end: u32) -> Result<Self, RangeError> {
        let start = check_hour("start_hour", i64::from(start))?;
        let end = check_hour("end_hour", i64::from(end))?;
        if start > end {
            return Err(RangeError::InvertedHours { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a window from optional request bounds.
    ///
    /// A missing bound is open-ended (0 or 23); `None` when neither is given.
    pub fn from_bounds(start: Option<i64>, end: Option<i64>) -> Result<Option<Self>, RangeError> {
        if start.is_none() && end.is_none() {
            return Ok(None);
        }
        let start = match start {
            Some(value) => check_hour("start_hour", value)?,
            None => Self::FIRST_HOUR,
        };
        let end = match end {
            Some(value) => check_hour("end_hour", value)?,
            None => Self::LAST_HOUR,
        };
        Self::new(start, end).map(Some)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains_hour(&self, hour: u32) -> bool {
        self.start <= hour && hour <= self.end
    }

    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        self.contains_hour(timestamp.hour())
    }
}

fn check_hour(field: &'static str, value: i64) -> Result<u32, RangeError> {
    if (i64::from(HourRange::FIRST_HOUR)..=i64::from(HourRange::LAST_HOUR)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(RangeError::HourOutOfBounds { field, value })
    }
}
