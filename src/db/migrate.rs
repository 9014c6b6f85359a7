use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists. Migrations record themselves there,
/// so it has to come first.
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
    )
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

// "match" is quoted everywhere: MATCH is an SQLite operator keyword.
const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250101_0001_create_match",
        description: "Created match table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS "match" (
            match_id    INTEGER PRIMARY KEY AUTOINCREMENT,
            start_time  TEXT NOT NULL,
            end_time    TEXT NOT NULL,
            game_mode   TEXT NOT NULL,
            map_name    TEXT NOT NULL,
            UNIQUE (start_time, map_name)
        );
        "#,
    },
    Migration {
        version: "20250101_0002_create_match_frag",
        description: "Created match_frag table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS match_frag (
            match_id     INTEGER NOT NULL REFERENCES "match"(match_id) ON DELETE CASCADE,
            frag_time    TEXT NOT NULL,
            killer_name  TEXT NOT NULL,
            victim_name  TEXT,
            weapon_code  TEXT,
            CHECK ((victim_name IS NULL) = (weapon_code IS NULL))
        );

        CREATE INDEX IF NOT EXISTS idx_match_frag_match ON match_frag(match_id);
        "#,
    },
    Migration {
        version: "20250101_0003_index_frag_killer",
        description: "Indexed match_frag by killer",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_match_frag_killer ON match_frag(killer_name);
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM log
             WHERE operation = 'migration_applied' AND target = ?1
             LIMIT 1",
            [version],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Apply one migration and mark it in the same transaction.
fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        params![m.version, m.description],
    )?;
    tx.commit()?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Public entry point: run all pending migrations. Safe to call on every
/// start; already applied versions are skipped.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
            applied += 1;
        }
    }

    Ok(applied)
}
