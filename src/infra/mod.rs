//! Infrastructure: SQLite connection and schema bootstrap.

pub mod db;

pub(crate) use db::get_connection;
pub use db::{init_db, DbPool};
