//! Test fixture creation for the content database
//!
//! The serving path is read-only, so fixtures insert rows with direct SQL
//! after letting the store create the schema.

use super::constants::*;
use anyhow::Result;
use calendar_api_server::event_store::SqliteEventStore;
use rusqlite::{params, Connection};
use std::path::PathBuf;
use tempfile::TempDir;

fn insert_item(
    conn: &Connection,
    id: &str,
    kind: &str,
    title: &str,
    published: bool,
    location: &str,
    range: Option<(&str, &str)>,
) -> Result<()> {
    conn.execute(
        "INSERT INTO content_items (id, kind, title, published, location_name) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![id, kind, title, published as i64, location],
    )?;
    if let Some((starts_at, ends_at)) = range {
        conn.execute(
            "INSERT INTO content_date_ranges (item_id, position, starts_at, ends_at) \
             VALUES (?1, 0, ?2, ?3)",
            params![id, starts_at, ends_at],
        )?;
    }
    Ok(())
}

/// Creates a temporary content database seeded with the fixture events.
/// Returns (temp_dir, db_path); keep the temp dir alive for the db to exist.
pub fn create_test_events_db() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let db_path = dir.path().join("content.db");

    // Opening the store once creates the schema.
    let _store = SqliteEventStore::new(&db_path)?;

    let conn = Connection::open(&db_path)?;

    insert_item(
        &conn,
        FAIR_ID,
        "event",
        FAIR_TITLE,
        true,
        FAIR_LOCATION,
        Some((FAIR_STARTS_AT, FAIR_ENDS_AT)),
    )?;

    insert_item(
        &conn,
        KICKOFF_ID,
        "event",
        KICKOFF_TITLE,
        true,
        KICKOFF_LOCATION,
        Some((KICKOFF_STARTS_AT, KICKOFF_ENDS_AT)),
    )?;

    // Unpublished draft: date-matched but must never be served.
    insert_item(
        &conn,
        DRAFT_ID,
        "event",
        DRAFT_TITLE,
        false,
        "Ballroom",
        Some(("2024-06-20 00:00:00", "2024-06-21 00:00:00")),
    )?;

    // Non-event content with a matching date range.
    insert_item(
        &conn,
        PAGE_ID,
        "page",
        PAGE_TITLE,
        true,
        "",
        Some(("2024-06-05 00:00:00", "2024-06-06 00:00:00")),
    )?;

    Ok((dir, db_path))
}
