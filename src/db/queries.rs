use crate::db::models::{StoredFrag, StoredMatch};
use crate::errors::{AppError, AppResult};
use crate::models::{FragEvent, LogSession};
use rusqlite::{Connection, ErrorCode, params};

/// Turn constraint failures into a conflict; everything else stays a DB error.
fn classify(err: rusqlite::Error) -> AppError {
    match &err {
        rusqlite::Error::SqliteFailure(e, msg) if e.code == ErrorCode::ConstraintViolation => {
            AppError::PersistenceConflict(msg.clone().unwrap_or_else(|| e.to_string()))
        }
        _ => AppError::Db(err),
    }
}

/// Store a match and all its frags atomically; returns the new `match_id`.
///
/// The transaction is rolled back when dropped without commit, so any
/// failing insert leaves the database exactly as it was.
pub fn insert_match(
    conn: &mut Connection,
    session: &LogSession,
    frags: &[FragEvent],
) -> AppResult<i64> {
    let tx = conn.transaction()?;

    tx.execute(
        r#"INSERT INTO "match" (start_time, end_time, game_mode, map_name)
           VALUES (?1, ?2, ?3, ?4)"#,
        params![
            session.start_str(),
            session.end_str(),
            session.game_mode(),
            session.map_name()
        ],
    )
    .map_err(classify)?;

    let match_id = tx.last_insert_rowid();

    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO match_frag (match_id, frag_time, killer_name, victim_name, weapon_code)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;

        for frag in frags {
            stmt.execute(params![
                match_id,
                frag.timestamp_str(),
                frag.killer_name(),
                frag.victim_name(),
                frag.weapon_code()
            ])
            .map_err(classify)?;
        }
    }

    tx.commit().map_err(classify)?;
    Ok(match_id)
}

pub fn list_matches(conn: &Connection) -> AppResult<Vec<StoredMatch>> {
    let mut stmt = conn.prepare(
        r#"SELECT m.match_id, m.start_time, m.end_time, m.game_mode, m.map_name,
                  COUNT(f.match_id)
           FROM "match" m
           LEFT JOIN match_frag f ON f.match_id = m.match_id
           GROUP BY m.match_id
           ORDER BY m.start_time ASC, m.match_id ASC"#,
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(StoredMatch {
            match_id: row.get(0)?,
            start_time: row.get(1)?,
            end_time: row.get(2)?,
            game_mode: row.get(3)?,
            map_name: row.get(4)?,
            frag_count: row.get(5)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Frags of one match in insertion (= log) order.
pub fn load_match_frags(conn: &Connection, match_id: i64) -> AppResult<Vec<StoredFrag>> {
    let mut stmt = conn.prepare_cached(
        "SELECT match_id, frag_time, killer_name, victim_name, weapon_code
         FROM match_frag
         WHERE match_id = ?1
         ORDER BY rowid ASC",
    )?;

    let rows = stmt.query_map([match_id], |row| {
        Ok(StoredFrag {
            match_id: row.get(0)?,
            frag_time: row.get(1)?,
            killer_name: row.get(2)?,
            victim_name: row.get(3)?,
            weapon_code: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_matches(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row(r#"SELECT COUNT(*) FROM "match""#, [], |row| row.get(0))?)
}

pub fn count_frags(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM match_frag", [], |row| row.get(0))?)
}
