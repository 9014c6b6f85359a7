use crate::core::input::read_log_file;
use crate::core::show::warn_if_unordered;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_match;
use crate::errors::AppResult;
use crate::models::ParsedLog;
use crate::parser::parse_log;
use crate::ui::messages::{success, warning};
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Parse a log file and store it as one match. Returns the match id.
    pub fn import_file(pool: &mut DbPool, log_path: &Path) -> AppResult<i64> {
        let log_data = read_log_file(log_path)?;
        let parsed = parse_log(&log_data)?;
        warn_if_unordered(&parsed);

        let match_id = Self::import_parsed(pool, &parsed)?;

        // audit trail only, the match itself is already committed
        if let Err(e) = ttlog(
            &pool.conn,
            "import",
            &log_path.display().to_string(),
            &format!(
                "match {} ({} on {}, {} frags)",
                match_id,
                parsed.session.game_mode(),
                parsed.session.map_name(),
                parsed.frags.len()
            ),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        success(format!(
            "Match {} stored: {} on {}, {} frags",
            match_id,
            parsed.session.game_mode(),
            parsed.session.map_name(),
            parsed.frags.len()
        ));
        Ok(match_id)
    }

    /// Store an already parsed log; schema is brought up to date first.
    pub fn import_parsed(pool: &mut DbPool, parsed: &ParsedLog) -> AppResult<i64> {
        init_db(&pool.conn)?;
        insert_match(&mut pool.conn, &parsed.session, &parsed.frags)
    }
}
