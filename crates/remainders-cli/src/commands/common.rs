//! Shared helpers for the command modules.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use remainders_core::{Database, ItemKind, ItemStore};

pub fn open() -> Result<(Database, ItemStore), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let store = ItemStore::load(&db);
    Ok((db, store))
}

/// Persistence failures are non-fatal: the in-memory state stays
/// authoritative for the rest of the session, so report and carry on.
pub fn persist_lenient(store: &ItemStore, db: &Database) {
    if let Err(e) = store.persist(db) {
        eprintln!("warning: could not save state: {e}");
    }
}

/// Parse a user-supplied date into epoch milliseconds, local time.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM`, a bare
/// `YYYY-MM-DD` (midnight), or RFC 3339.
pub fn parse_datetime(input: &str) -> Result<i64, Box<dyn std::error::Error>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.timestamp_millis());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return local_ms(naive);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return local_ms(date.and_hms_opt(0, 0, 0).unwrap_or_default());
    }
    Err(format!("unparseable date: '{input}' (expected e.g. 2026-03-14T15:30)").into())
}

/// Parse an item kind name as typed on the command line.
pub fn parse_kind(input: &str) -> Result<ItemKind, Box<dyn std::error::Error>> {
    match input {
        "lifetime" | "ongoing" => Ok(ItemKind::Ongoing),
        "event" | "countdown" | "remainder" => Ok(ItemKind::Countdown),
        other => Err(format!("unknown kind '{other}' (expected lifetime or event)").into()),
    }
}

fn local_ms(naive: NaiveDateTime) -> Result<i64, Box<dyn std::error::Error>> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.timestamp_millis()),
        LocalResult::None => Err(format!("date {naive} does not exist in the local timezone").into()),
    }
}
