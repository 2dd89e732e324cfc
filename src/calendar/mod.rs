//! Calendar query pipeline.
//!
//! Turns a raw `(start, end)` window from the HTTP layer into a list of
//! display-ready calendar events: normalize the boundaries, query the event
//! store with a containment filter, project the matched records.

mod normalize;
mod projection;
pub mod query;
mod service;

pub use normalize::{DateNormalizer, STORAGE_DATETIME_FORMAT, STORAGE_TIMEZONE};
pub use projection::{project_event, CalendarEventView, EventExtendedProps};
pub use service::CalendarService;

use thiserror::Error;

/// Errors that can occur in the calendar query pipeline.
///
/// Missing HTTP parameters are not represented here; the HTTP layer rejects
/// those with fixed messages before the pipeline runs. Everything below
/// surfaces as a generic server error.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("Unrecognized date format: {0:?}")]
    InvalidDateFormat(String),

    #[error("Event store error: {0}")]
    Store(#[from] anyhow::Error),

    #[error("Event {id} has no date range value")]
    MissingEventDate { id: String },
}
