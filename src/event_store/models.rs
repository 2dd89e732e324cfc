//! Records as the content store hands them out.

/// One value of a content item's multi-valued date-range field, in storage
/// format. No `starts_at <= ends_at` guarantee; stored ordering is trusted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRangeValue {
    pub starts_at: String,
    pub ends_at: String,
}

/// A content record of kind "event", read-only from this system's side.
///
/// `date_ranges` is ordered by field position; well-formed event records
/// carry exactly one value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub published: bool,
    pub location_name: String,
    pub date_ranges: Vec<DateRangeValue>,
}
