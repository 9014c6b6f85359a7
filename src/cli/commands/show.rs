use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::show::ShowLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        log,
        format,
        summary,
    } = cmd
    {
        ShowLogic::show(log, cfg, *format, *summary)?;
    }
    Ok(())
}
