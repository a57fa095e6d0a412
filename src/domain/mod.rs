//! Zoo record types and the table metadata behind them.

pub mod entities;
pub mod schema;
pub mod value;

pub use entities::{Animal, Breed, Category, Enclosure, Entity, Keeper, Record};
pub use schema::{Column, FieldKind, Table};
pub use value::{FieldValue, Fields, DATE_FORMAT};
