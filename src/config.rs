//! TOML configuration: where the database lives and what to call it.

use crate::error::AppError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "zoo.toml";
const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database: DbConfig,
}

/// Resolved connection parameters handed to [`crate::infra::init_db`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DbConfig {
    pub path: PathBuf,
    #[serde(default = "default_db_name")]
    pub name: String,
}

fn default_db_name() -> String {
    "zoo".to_string()
}

impl DbConfig {
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::from(IN_MEMORY),
            name: default_db_name(),
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.path.as_os_str() == IN_MEMORY
    }
}

/// `./zoo.toml` when present, otherwise `<config dir>/zoo/zoo.toml`.
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return local;
    }
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("zoo").join(CONFIG_FILE_NAME)
}

/// Read and parse the config file; relative database paths resolve against
/// the directory holding the file.
pub fn load_config(path: &Path) -> Result<AppConfig, AppError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    parse_config(&text, base_dir)
}

pub fn parse_config(text: &str, base_dir: &Path) -> Result<AppConfig, AppError> {
    let mut config: AppConfig =
        toml::from_str(text).map_err(|e| AppError::Config(e.to_string()))?;

    let db = &mut config.database;
    if db.path.as_os_str().is_empty() {
        return Err(AppError::Config("database.path must not be empty".into()));
    }
    if db.name.trim().is_empty() {
        db.name = default_db_name();
    }
    if !db.is_in_memory() && db.path.is_relative() {
        db.path = base_dir.join(&db.path);
    }
    log::debug!("Database config resolved: {:?}", db);
    Ok(config)
}
