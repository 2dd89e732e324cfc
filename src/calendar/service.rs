//! Calendar query orchestration.

use super::normalize::DateNormalizer;
use super::projection::{project_event, CalendarEventView};
use super::query::{DateRangeQuery, EventFilter};
use super::CalendarError;
use crate::event_store::EventStore;
use std::sync::Arc;

/// Runs the query pipeline: normalize boundaries, filter the store, project
/// the matches. Stateless between requests; the store handle is the only
/// collaborator and is passed in explicitly.
pub struct CalendarService {
    store: Arc<dyn EventStore>,
    normalizer: DateNormalizer,
}

impl CalendarService {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        CalendarService {
            store,
            normalizer: DateNormalizer::default(),
        }
    }

    /// Events whose whole span falls inside `[start_raw, end_raw]`, in the
    /// store's order (ascending start). An empty match set is an empty vec,
    /// not an error.
    pub fn get_events(
        &self,
        start_raw: &str,
        end_raw: &str,
    ) -> Result<Vec<CalendarEventView>, CalendarError> {
        let window = DateRangeQuery {
            start: self.normalizer.normalize(start_raw)?,
            end: self.normalizer.normalize(end_raw)?,
        };

        let records = self.store.query_events(&EventFilter::containing(window))?;
        records.iter().map(project_event).collect()
    }
}
