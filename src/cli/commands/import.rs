use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { log } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        ImportLogic::import_file(&mut pool, log)?;
    }
    Ok(())
}
