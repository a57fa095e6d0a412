//! SQLite connection and schema bootstrap.

use crate::config::DbConfig;
use crate::error::AppError;
use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The single connection held for the lifetime of the process.
pub struct DbPool {
    conn: Mutex<Connection>,
    name: String,
    location: String,
}

impl fmt::Display for DbPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Connected to database '{}' at '{}'",
            self.name, self.location
        )
    }
}

/// Open the database described by `config`, enable foreign keys and make sure
/// every table exists.
pub fn init_db(config: &DbConfig) -> Result<DbPool, AppError> {
    let mut conn = if config.is_in_memory() {
        Connection::open_in_memory()?
    } else {
        if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Db(e.to_string()))?;
        }
        Connection::open(&config.path)?
    };
    configure(&conn)?;
    run_migrations(&mut conn)?;
    log::info!("DB ready: {}", config.path.display());
    Ok(DbPool {
        conn: Mutex::new(conn),
        name: config.name.clone(),
        location: config.path.display().to_string(),
    })
}

/// Fresh in-memory database with the full schema, for tests.
pub fn init_test_db() -> DbPool {
    init_db(&DbConfig::in_memory()).expect("in-memory database")
}

fn configure(conn: &Connection) -> Result<(), AppError> {
    // Cascading deletes depend on this; it is off by default in SQLite.
    conn.pragma_update(None, "foreign_keys", true)?;
    // Built-in lower() and LIKE only fold ASCII letters.
    conn.create_scalar_function(
        "fold",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )?;
    Ok(())
}

fn run_migrations(conn: &mut Connection) -> Result<(), AppError> {
    let tx = conn.transaction()?;

    tx.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (version INTEGER PRIMARY KEY, applied_at TEXT NOT NULL DEFAULT (datetime('now')))",
        [],
    )?;

    let applied: Vec<i32> = tx
        .prepare("SELECT version FROM schema_migrations ORDER BY version")?
        .query_map([], |r| r.get(0))?
        .collect::<Result<Vec<_>, _>>()?;

    const MIGRATIONS: &[(i32, &str)] = &[(1, include_str!("../../migrations/0001_init.sql"))];

    for (version, sql) in MIGRATIONS {
        if applied.contains(version) {
            continue;
        }
        tx.execute_batch(sql)?;
        tx.execute(
            "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, datetime('now'))",
            [version],
        )?;
        log::info!("Applied schema migration {}", version);
    }

    tx.commit()?;
    Ok(())
}

/// Lock the shared connection.
pub(crate) fn get_connection(pool: &DbPool) -> MutexGuard<'_, Connection> {
    pool.conn.lock().unwrap_or_else(PoisonError::into_inner)
}
