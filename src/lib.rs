pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod logging;
pub mod ui;

use anyhow::Context;
use clap::Parser;
use infra::{init_db, DbPool};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use ui::{Console, ZooShell};

/// Manage zoo enclosures, categories, breeds, keepers and animals.
#[derive(Debug, Parser)]
#[command(name = "zoo", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./zoo.toml, then the user config dir).
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// File that error events are appended to.
    #[arg(long, default_value = "error.log")]
    pub log_file: PathBuf,

    /// Minimum level written to the log file.
    #[arg(long, default_value = "error")]
    pub log_level: String,
}

/// Load configuration, open the database and hand the terminal to the menu
/// loop. Startup failures carry a `startup failed` context; a terminal I/O
/// failure inside the loop carries `console I/O failed`.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    logging::init_file_logger(&cli.log_file, &cli.log_level)
        .with_context(|| format!("startup failed: cannot log to {}", cli.log_file.display()))?;

    let config_path = cli.config.unwrap_or_else(config::default_config_path);
    let config = config::load_config(&config_path)
        .map_err(|e| {
            log::error!("Config load failed: {}", e);
            e
        })
        .context("startup failed")?;

    let pool = init_db(&config.database)
        .map_err(|e| {
            log::error!("DB init failed: {}", e);
            e
        })
        .context("startup failed")?;

    let stdin = io::stdin();
    run_shell(&pool, Console::new(stdin.lock(), io::stdout()))
}

/// Drive the menu loop on `console` until the user exits or input ends.
pub fn run_shell<R: BufRead, W: Write>(pool: &DbPool, console: Console<R, W>) -> anyhow::Result<()> {
    ZooShell::new(pool, console)
        .run()
        .map_err(|e| {
            log::error!("Console I/O failed: {}", e);
            e
        })
        .context("console I/O failed")
}
