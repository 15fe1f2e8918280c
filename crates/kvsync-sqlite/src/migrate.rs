//! Schema setup for SQLite-backed storage
//!
//! Creates the `kv_entries` schema, recording each applied step in
//! `schema_migrations` so reopening a database is a no-op.

use rusqlite::Connection;
use tracing::debug;

use crate::error::{Result, SqliteError};

/// Bookkeeping table, created before any versioned step runs
const LEDGER: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    version TEXT PRIMARY KEY NOT NULL,
    applied_at DATETIME NOT NULL
);";

/// Versioned schema steps, applied in order
const STEPS: &[(&str, &str)] = &[(
    "001",
    "CREATE TABLE IF NOT EXISTS kv_entries (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    );",
)];

/// Bring the schema up to date.
///
/// Each pending step runs in its own transaction together with its ledger
/// row, so a failed step leaves no trace and is retried on the next open.
pub fn migrate(conn: &Connection) -> Result<()> {
    conn.execute_batch(LEDGER)?;
    let applied = applied_versions(conn)?;

    for (version, sql) in STEPS.iter().filter(|(v, _)| !applied.iter().any(|a| a == v)) {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)
            .map_err(|e| SqliteError::Migration(format!("{}: {}", version, e)))?;
        tx.execute(
            "INSERT INTO schema_migrations (version, applied_at) VALUES (?, CURRENT_TIMESTAMP)",
            [*version],
        )?;
        tx.commit()?;
        debug!("Applied schema step {}", version);
    }
    Ok(())
}

fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT version FROM schema_migrations")?;
    let versions = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(versions)
}
