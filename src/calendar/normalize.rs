//! Date boundary normalization.
//!
//! Query windows arrive as free-form date strings (the calendar widget sends
//! whatever its current view produces). Before they can be compared against
//! stored values they are rendered in the storage format, in the storage
//! timezone, so that string comparison in the store equals chronological
//! comparison.

use super::CalendarError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Format of every persisted date/time value. Lexicographic order equals
/// chronological order, which the store's string comparisons rely on.
pub const STORAGE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timezone every persisted date/time value is expressed in.
pub const STORAGE_TIMEZONE: Utc = Utc;

/// Accepted shapes for naive (offset-less) inputs.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Normalizes free-form date strings into storage-format timestamps.
///
/// Inputs carrying an explicit offset are converted to the storage timezone,
/// naive inputs are taken as already being in it. Pure transform, no side
/// effects.
#[derive(Clone)]
pub struct DateNormalizer {
    storage_format: &'static str,
    storage_tz: Utc,
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new(STORAGE_DATETIME_FORMAT, STORAGE_TIMEZONE)
    }
}

impl DateNormalizer {
    pub fn new(storage_format: &'static str, storage_tz: Utc) -> Self {
        DateNormalizer {
            storage_format,
            storage_tz,
        }
    }

    /// Parse `raw` as a calendar date or datetime and render it in the
    /// storage format. Bare dates normalize to midnight.
    pub fn normalize(&self, raw: &str) -> Result<String, CalendarError> {
        let parsed = self
            .parse(raw.trim())
            .ok_or_else(|| CalendarError::InvalidDateFormat(raw.to_owned()))?;
        Ok(parsed.format(self.storage_format).to_string())
    }

    fn parse(&self, raw: &str) -> Option<NaiveDateTime> {
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
            return Some(with_offset.with_timezone(&self.storage_tz).naive_local());
        }
        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(naive);
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    }
}
