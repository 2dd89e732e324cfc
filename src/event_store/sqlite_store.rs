//! SQLite-backed content store.

use super::models::{DateRangeValue, EventRecord};
use super::schema::create_or_check_schema;
use super::EventStore;
use crate::calendar::query::{EventFilter, SortOrder};
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

/// Content store reading from a SQLite database.
///
/// The connection is opened read-write only so a missing schema can be
/// created on first open; the serving path performs reads exclusively.
pub struct SqliteEventStore {
    conn: Mutex<Connection>,
}

impl SqliteEventStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open_with_flags(
            db_path.as_ref(),
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open content database")?;

        create_or_check_schema(&conn)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        let store = SqliteEventStore {
            conn: Mutex::new(conn),
        };
        info!("Opened content db: {} event records", store.count_events()?);
        Ok(store)
    }

    /// Number of event-kind records, published or not.
    pub fn count_events(&self) -> Result<usize> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM content_items WHERE kind = 'event'",
            [],
            |r| r.get(0),
        )?;
        Ok(count as usize)
    }
}

impl EventStore for SqliteEventStore {
    fn query_events(&self, filter: &EventFilter) -> Result<Vec<EventRecord>> {
        let conn = self.conn.lock().unwrap();

        // Containment over the position-0 range value; storage format makes
        // string comparison chronological.
        let mut sql = String::from(
            "SELECT i.id, i.title, i.published, i.location_name \
             FROM content_items i \
             JOIN content_date_ranges r ON r.item_id = i.id AND r.position = 0 \
             WHERE i.kind = ?1 AND r.starts_at >= ?2 AND r.ends_at <= ?3",
        );
        if filter.published_only {
            sql.push_str(" AND i.published = 1");
        }
        match filter.order {
            SortOrder::StartAscending => sql.push_str(" ORDER BY r.starts_at ASC"),
        }

        let mut stmt = conn.prepare(&sql).context("Failed to prepare event query")?;
        let rows = stmt
            .query_map(
                params![filter.kind, filter.window.start, filter.window.end],
                |row| {
                    Ok(EventRecord {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        published: row.get::<_, i64>(2)? != 0,
                        location_name: row.get(3)?,
                        date_ranges: Vec::new(),
                    })
                },
            )
            .context("Failed to query events")?;

        let mut records = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to read event rows")?;

        let mut ranges_stmt = conn.prepare(
            "SELECT starts_at, ends_at FROM content_date_ranges \
             WHERE item_id = ?1 ORDER BY position ASC",
        )?;
        for record in &mut records {
            let ranges = ranges_stmt.query_map(params![record.id], |row| {
                Ok(DateRangeValue {
                    starts_at: row.get(0)?,
                    ends_at: row.get(1)?,
                })
            })?;
            record.date_ranges = ranges
                .collect::<rusqlite::Result<Vec<_>>>()
                .context("Failed to read date range rows")?;
        }

        Ok(records)
    }
}
