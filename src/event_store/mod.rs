//! Content store access.
//!
//! The calendar pipeline depends on the store only through the [`EventStore`]
//! trait; the shipped implementation reads a SQLite content database.

mod models;
mod schema;
mod sqlite_store;

pub use models::{DateRangeValue, EventRecord};
pub use sqlite_store::SqliteEventStore;

use crate::calendar::query::EventFilter;
use anyhow::Result;

/// Trait for content storage backends serving event queries.
pub trait EventStore: Send + Sync {
    /// Execute `filter` and return all matching records in the filter's
    /// order. No streaming, no pagination.
    fn query_events(&self, filter: &EventFilter) -> Result<Vec<EventRecord>>;
}
