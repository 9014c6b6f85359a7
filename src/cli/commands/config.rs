use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config: true } = cmd {
        let path = Config::config_file();
        let source = if path.exists() {
            path.display().to_string()
        } else {
            "built-in defaults".to_string()
        };

        println!("📄 Current configuration ({source}):\n");
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("{yaml}");
        println!("🔫 Weapon codes known: {}", cfg.icon_table().len());
    }

    Ok(())
}
