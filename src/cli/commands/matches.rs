use crate::config::Config;
use crate::core::matches::MatchesLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    MatchesLogic::print_matches(&mut pool)
}
