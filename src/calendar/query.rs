//! Filter specification for event queries.
//!
//! A plain value type stands in for the source system's fluent query builder:
//! the core constructs it, the store interprets it. Nothing here touches
//! storage.

/// Content kind that calendar queries select.
pub const EVENT_KIND: &str = "event";

/// A normalized query window. Both boundaries are storage-format timestamps
/// in the storage timezone. Constructed once per request; immutable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRangeQuery {
    pub start: String,
    pub end: String,
}

/// Result ordering of an event query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending by the range's start value.
    StartAscending,
}

/// Filter an event query executes against the content store.
///
/// The window is a containment test: an event matches only when its whole
/// span falls inside `[window.start, window.end]`. An event that merely
/// overlaps the window is excluded. This mirrors the behavior callers
/// already depend on; it is not an interval-overlap test.
#[derive(Clone, Debug)]
pub struct EventFilter {
    pub kind: &'static str,
    pub published_only: bool,
    pub window: DateRangeQuery,
    pub order: SortOrder,
}

impl EventFilter {
    /// Filter for published events contained in `window`, start-ascending.
    pub fn containing(window: DateRangeQuery) -> Self {
        EventFilter {
            kind: EVENT_KIND,
            published_only: true,
            window,
            order: SortOrder::StartAscending,
        }
    }
}
