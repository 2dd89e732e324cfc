//! Projection of stored event records into widget-facing view models.

use super::normalize::STORAGE_DATETIME_FORMAT;
use super::CalendarError;
use crate::event_store::EventRecord;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One calendar event as the front-end widget consumes it.
///
/// `start`/`end` are bare `YYYY-MM-DD` dates; the widget places the event on
/// day cells, not on a timeline.
#[derive(Clone, Debug, Serialize)]
pub struct CalendarEventView {
    pub title: String,
    pub start: String,
    pub end: String,
    #[serde(rename = "extendedProps")]
    pub extended_props: EventExtendedProps,
}

/// Display extras derived from the event's start date.
#[derive(Clone, Debug, Serialize)]
pub struct EventExtendedProps {
    pub location: String,
    /// 3-letter month abbreviation of the start date, e.g. "Jun".
    pub month: String,
    /// Zero-padded day-of-month of the start date, e.g. "10".
    pub day: String,
}

/// Map one stored record to one view model.
///
/// Takes the first date-range value on the record; well-formed event records
/// carry exactly one, and a record without any is an error.
pub fn project_event(record: &EventRecord) -> Result<CalendarEventView, CalendarError> {
    let range = record
        .date_ranges
        .first()
        .ok_or_else(|| CalendarError::MissingEventDate {
            id: record.id.clone(),
        })?;

    let start = parse_stored(&range.starts_at)?;
    let end = parse_stored(&range.ends_at)?;

    Ok(CalendarEventView {
        title: record.title.clone(),
        start: start.format("%Y-%m-%d").to_string(),
        end: end.format("%Y-%m-%d").to_string(),
        extended_props: EventExtendedProps {
            location: record.location_name.clone(),
            month: start.format("%b").to_string(),
            day: start.format("%d").to_string(),
        },
    })
}

fn parse_stored(value: &str) -> Result<NaiveDateTime, CalendarError> {
    NaiveDateTime::parse_from_str(value, STORAGE_DATETIME_FORMAT)
        .map_err(|_| CalendarError::InvalidDateFormat(value.to_owned()))
}
