//! SQLite-backed key-value persistence.
//!
//! All persisted state lives in a single `kv` table: the item set, the
//! countdown priority order, box settings (each as a JSON string), and the
//! theme identifier (stored raw).

use std::path::Path;

use rusqlite::{params, Connection};

use super::data_dir;

/// kv key holding the serialized item records.
pub const KEY_EVENTS: &str = "events";
/// kv key holding the countdown priority order.
pub const KEY_ORDER: &str = "remainderOrder";
/// kv key holding the card shape/size settings.
pub const KEY_BOX_SETTINGS: &str = "boxSettings";
/// kv key holding the theme identifier.
pub const KEY_THEME: &str = "theme";

/// Key-value store for application state.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/remainders/remainders.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join("remainders.db");
        Ok(Self::open_at(path)?)
    }

    /// Open a database at an explicit path (tests point this at a tempdir).
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        // Writers back off instead of failing when another process holds
        // the file.
        conn.busy_timeout(std::time::Duration::from_secs(5))?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_round_trip() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("missing").unwrap().is_none());
        db.kv_set(KEY_THEME, "dark-theme").unwrap();
        assert_eq!(db.kv_get(KEY_THEME).unwrap().unwrap(), "dark-theme");
    }

    #[test]
    fn kv_set_replaces() {
        let db = Database::open_memory().unwrap();
        db.kv_set("k", "a").unwrap();
        db.kv_set("k", "b").unwrap();
        assert_eq!(db.kv_get("k").unwrap().unwrap(), "b");
    }
}
