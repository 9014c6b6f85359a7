use crate::cli::parser::Commands;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Csv { log, out, force } = cmd {
        ExportLogic::export_csv(log, out, *force)?;
    }
    Ok(())
}
