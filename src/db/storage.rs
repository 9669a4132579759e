//! Raw key/value access to the `storage` table.
//!
//! Values are stored exactly as the browser's local storage kept them:
//! plain scalars or JSON text.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

pub fn get(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM storage WHERE key = ?1")?;
    let value = stmt.query_row([key], |row| row.get(0)).optional()?;
    Ok(value)
}

pub fn set(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO storage (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
    )?;
    stmt.execute(params![key, value])?;
    Ok(())
}

/// Insert only when the key is absent. Returns whether a row was written.
pub fn set_if_absent(conn: &Connection, key: &str, value: &str) -> AppResult<bool> {
    let mut stmt =
        conn.prepare_cached("INSERT OR IGNORE INTO storage (key, value) VALUES (?1, ?2)")?;
    let n = stmt.execute(params![key, value])?;
    Ok(n > 0)
}

/// All `(key, value)` pairs whose key starts with `prefix`, ordered by key.
pub fn with_prefix(conn: &Connection, prefix: &str) -> AppResult<Vec<(String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT key, value FROM storage
         WHERE substr(key, 1, length(?1)) = ?1
         ORDER BY key ASC",
    )?;

    let rows = stmt.query_map([prefix], |row| Ok((row.get(0)?, row.get(1)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn keys(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare_cached("SELECT key FROM storage ORDER BY key ASC")?;
    let rows = stmt.query_map([], |row| row.get(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Delete every key. Returns the number of removed entries.
pub fn clear(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM storage", [])?;
    Ok(n)
}
