use crate::db::{log, storage};
use crate::errors::AppResult;
use crate::models::settings::StorageKey;
use crate::ui::messages::{info, success};
use rusqlite::{Connection, OptionalExtension, Result};

const STORAGE_TABLE_VERSION: &str = "20260201_0001_create_storage";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `storage` table exists.
fn storage_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='storage'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Create the key/value `storage` table.
fn create_storage_table(conn: &Connection) -> AppResult<()> {
    if storage_table_exists(conn)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS storage (
            key   TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );
        "#,
    )?;

    if !is_applied(conn, STORAGE_TABLE_VERSION)? {
        log::ttlog(
            conn,
            "migration_applied",
            STORAGE_TABLE_VERSION,
            "Created storage table",
        )?;
    }

    success("Created storage table.");
    Ok(())
}

/// Copy values stored under the legacy key names to the current keys.
///
/// A current key is written only when absent; legacy keys are never deleted.
/// Running it any number of times yields the same key set.
pub fn migrate_legacy_keys(conn: &Connection) -> AppResult<Vec<&'static str>> {
    let mut copied = Vec::new();

    for key in StorageKey::ALL {
        let Some(old_value) = storage::get(conn, key.legacy())? else {
            continue;
        };

        if storage::set_if_absent(conn, key.as_str(), &old_value)? {
            copied.push(key.as_str());
        }
    }

    if !copied.is_empty() {
        let msg = format!("Copied legacy keys: {}", copied.join(", "));
        log::ttlog(conn, "migrate_keys", "", &msg)?;
        info(msg);
    }

    Ok(copied)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;
    create_storage_table(conn)?;
    migrate_legacy_keys(conn)?;
    Ok(())
}
