use crate::errors::{AppError, AppResult};
use crate::models::{IconCategory, WeaponIconTable};
use crate::render::TranscriptFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub transcript_format: TranscriptFormat,
    /// Extra or re-categorised weapon codes, merged over the built-in table.
    /// New log dialects keep introducing codes (e.g. a bare `MG`).
    #[serde(default)]
    pub weapon_icons: BTreeMap<String, IconCategory>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            transcript_format: TranscriptFormat::default(),
            weapon_icons: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.fraglog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fraglog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fraglog.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("fraglog.sqlite")
    }

    /// Load configuration from the default file, or defaults if there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("invalid {}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// The icon table this configuration asks for.
    pub fn icon_table(&self) -> WeaponIconTable {
        WeaponIconTable::with_overrides(&self.weapon_icons)
    }

    /// Prepare config directory, config file and the database path.
    ///
    /// A relative `custom_db` is placed inside the config directory. In test
    /// mode nothing is written except the database's parent directory.
    /// Returns the database path to initialize.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) if Path::new(name).is_absolute() || is_test => PathBuf::from(name),
            Some(name) => dir.join(name),
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(db_path)
    }
}
