//! File logger behind the `log` facade.

use crate::error::AppError;
use chrono::Local;
use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// Install a global logger appending `timestamp - LEVEL - message` lines to
/// `log_file`. Fails if the file cannot be opened or a logger is already set.
pub fn init_file_logger(log_file: &Path, level: &str) -> Result<(), AppError> {
    let level = LevelFilter::from_str(level)
        .map_err(|_| AppError::Logging(format!("unknown log level '{}'", level)))?;

    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| AppError::Logging(format!("cannot open {}: {}", log_file.display(), e)))?;

    Builder::new()
        .filter_level(level)
        .write_style(WriteStyle::Never)
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
