use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// Append an audit line to the `log` table and return its id.
///
/// `operation` is a short verb (`init`, `import`, `migration_applied`),
/// `target` what it touched (a log file, a match id, a migration version).
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<i64> {
    let now = Local::now().to_rfc3339();

    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![now, operation, target, message])?;

    Ok(conn.last_insert_rowid())
}
