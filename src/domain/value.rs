//! Dynamically typed column values.

use super::schema::{FieldKind, Table};
use crate::error::AppError;
use chrono::NaiveDate;
use rusqlite::types::{ToSql, ToSqlOutput};
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Int(_) => FieldKind::Integer,
            Self::Date(_) => FieldKind::Date,
        }
    }

    /// Read column `idx` of `row` as `kind`.
    pub fn read(row: &rusqlite::Row<'_>, idx: usize, kind: FieldKind) -> rusqlite::Result<Self> {
        Ok(match kind {
            FieldKind::Text => Self::Text(row.get(idx)?),
            FieldKind::Integer => Self::Int(row.get(idx)?),
            FieldKind::Date => Self::Date(row.get(idx)?),
        })
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
        }
    }
}

impl ToSql for FieldValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Self::Text(s) => s.to_sql(),
            Self::Int(n) => n.to_sql(),
            Self::Date(d) => d.to_sql(),
        }
    }
}

/// Sequential, type-checked access to the values of one row.
pub struct Fields {
    table: &'static Table,
    values: std::vec::IntoIter<FieldValue>,
    pos: usize,
}

impl Fields {
    pub fn new(table: &'static Table, values: Vec<FieldValue>) -> Self {
        Self {
            table,
            values: values.into_iter(),
            pos: 0,
        }
    }

    pub fn text(&mut self) -> Result<String, AppError> {
        match self.next(FieldKind::Text)? {
            FieldValue::Text(s) => Ok(s),
            other => Err(self.mismatch(FieldKind::Text, &other)),
        }
    }

    pub fn int(&mut self) -> Result<i64, AppError> {
        match self.next(FieldKind::Integer)? {
            FieldValue::Int(n) => Ok(n),
            other => Err(self.mismatch(FieldKind::Integer, &other)),
        }
    }

    pub fn date(&mut self) -> Result<NaiveDate, AppError> {
        match self.next(FieldKind::Date)? {
            FieldValue::Date(d) => Ok(d),
            other => Err(self.mismatch(FieldKind::Date, &other)),
        }
    }

    fn next(&mut self, expected: FieldKind) -> Result<FieldValue, AppError> {
        let value = self.values.next().ok_or_else(|| {
            AppError::Validation(format!(
                "{}: missing {:?} value at position {}",
                self.table.singular, expected, self.pos
            ))
        })?;
        self.pos += 1;
        Ok(value)
    }

    fn mismatch(&self, expected: FieldKind, got: &FieldValue) -> AppError {
        AppError::Validation(format!(
            "{}: expected {:?} at position {}, got {:?}",
            self.table.singular,
            expected,
            self.pos - 1,
            got.kind()
        ))
    }
}
