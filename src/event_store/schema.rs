//! Content database schema.
//!
//! Two tables model the source system's node/field storage: `content_items`
//! holds one row per record, `content_date_ranges` the values of the
//! multi-valued date-range field, keyed by position. The schema version is
//! stamped into `PRAGMA user_version` so later revisions can migrate.

use anyhow::{bail, Result};
use rusqlite::Connection;

/// Offset added to the schema version in `user_version`, to tell our
/// databases apart from files some other tool stamped.
pub const BASE_DB_VERSION: usize = 7000;

/// Current schema version.
pub const SCHEMA_VERSION: usize = 0;

const CREATE_SCHEMA_SQL: &str = "
CREATE TABLE content_items (
    id TEXT PRIMARY KEY,
    kind TEXT NOT NULL,
    title TEXT NOT NULL,
    published INTEGER NOT NULL DEFAULT 0,
    location_name TEXT NOT NULL DEFAULT ''
);

CREATE TABLE content_date_ranges (
    item_id TEXT NOT NULL REFERENCES content_items(id) ON DELETE CASCADE,
    position INTEGER NOT NULL DEFAULT 0,
    starts_at TEXT NOT NULL,
    ends_at TEXT NOT NULL,
    PRIMARY KEY (item_id, position)
);

CREATE INDEX idx_content_items_kind_published ON content_items(kind, published);
CREATE INDEX idx_content_date_ranges_starts_at ON content_date_ranges(starts_at);
";

/// Create the schema on a fresh database, or verify the version on an
/// existing one. There is a single version so far, so no migrations run.
pub fn create_or_check_schema(conn: &Connection) -> Result<()> {
    let table_count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |r| r.get(0),
    )?;

    if table_count == 0 {
        conn.execute_batch(CREATE_SCHEMA_SQL)?;
        conn.pragma_update(None, "user_version", BASE_DB_VERSION + SCHEMA_VERSION)?;
        return Ok(());
    }

    let db_version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    let expected = (BASE_DB_VERSION + SCHEMA_VERSION) as i64;
    if db_version != expected {
        bail!(
            "Unsupported content db version {} (expected {})",
            db_version,
            expected
        );
    }
    Ok(())
}
