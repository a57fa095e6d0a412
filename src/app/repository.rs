//! Generic CRUD over any [`Entity`].
//!
//! Every operation comes in two forms. The `try_*` methods return
//! `Result<_, AppError>`. The plain methods never fail: a store error is
//! logged, the open transaction is rolled back when dropped, and a sentinel
//! (`Vec::new()`, `None`, [`Mutation::Failed`]) is returned instead.

use crate::domain::{Entity, FieldValue, Record};
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use rusqlite::{params_from_iter, Connection, OptionalExtension, Params};
use std::marker::PhantomData;

/// Outcome of an edit or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Applied,
    /// No row with that id; nothing changed.
    Missing,
    /// The store rejected the statement; rolled back.
    Failed,
}

pub struct Repository<'db, E> {
    pool: &'db DbPool,
    _entity: PhantomData<E>,
}

impl<'db, E: Entity> Repository<'db, E> {
    pub fn new(pool: &'db DbPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub fn try_list(&self) -> Result<Vec<Record<E>>, AppError> {
        let conn = get_connection(self.pool);
        query_records(&conn, &E::TABLE.select_all_sql(), [])
    }

    /// Insert and commit; returns the generated id.
    pub fn try_add(&self, entity: &E) -> Result<i64, AppError> {
        let mut conn = get_connection(self.pool);
        let tx = conn.transaction()?;
        tx.execute(&E::TABLE.insert_sql(), params_from_iter(entity.to_fields()))?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        log::debug!("{} {} added", E::TABLE.singular, id);
        Ok(id)
    }

    /// Replace every data column of row `id`. `Ok(false)` when no such row.
    pub fn try_edit(&self, id: i64, entity: &E) -> Result<bool, AppError> {
        let mut values = entity.to_fields();
        values.push(FieldValue::Int(id));
        let mut conn = get_connection(self.pool);
        let tx = conn.transaction()?;
        let changed = tx.execute(&E::TABLE.update_sql(), params_from_iter(values))?;
        tx.commit()?;
        Ok(changed > 0)
    }

    /// Delete row `id`; dependents go with it through `ON DELETE CASCADE`.
    pub fn try_delete(&self, id: i64) -> Result<bool, AppError> {
        let mut conn = get_connection(self.pool);
        let tx = conn.transaction()?;
        let changed = tx.execute(&E::TABLE.delete_sql(), [id])?;
        tx.commit()?;
        Ok(changed > 0)
    }

    pub fn try_get(&self, id: i64) -> Result<Option<E>, AppError> {
        let table = E::TABLE;
        let conn = get_connection(self.pool);
        let fields = conn
            .query_row(&table.select_by_id_sql(), [id], |row| read_fields::<E>(row, 0))
            .optional()?;
        fields.map(E::from_fields).transpose()
    }

    pub fn list(&self) -> Vec<Record<E>> {
        self.try_list()
            .unwrap_or_else(|e| self.recover("listing", e, Vec::new()))
    }

    pub fn add(&self, entity: &E) -> Option<i64> {
        self.try_add(entity)
            .map(Some)
            .unwrap_or_else(|e| self.recover("adding", e, None))
    }

    pub fn edit(&self, id: i64, entity: &E) -> Mutation {
        match self.try_edit(id, entity) {
            Ok(true) => Mutation::Applied,
            Ok(false) => Mutation::Missing,
            Err(e) => self.recover("editing", e, Mutation::Failed),
        }
    }

    pub fn delete(&self, id: i64) -> Mutation {
        match self.try_delete(id) {
            Ok(true) => Mutation::Applied,
            Ok(false) => Mutation::Missing,
            Err(e) => self.recover("deleting", e, Mutation::Failed),
        }
    }

    /// `None` stands for "N/A": no such row, or the lookup failed.
    pub fn get_by_id(&self, id: i64) -> Option<E> {
        self.try_get(id)
            .unwrap_or_else(|e| self.recover("retrieving", e, None))
    }

    fn recover<T>(&self, action: &str, err: AppError, fallback: T) -> T {
        log::error!("Error occurred while {} {}: {}", action, E::TABLE.singular, err);
        fallback
    }
}

/// Run a query whose columns are the id followed by `E`'s data columns.
pub(crate) fn query_records<E: Entity, P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<Record<E>>, AppError> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, |row| Ok((row.get::<_, i64>(0)?, read_fields::<E>(row, 1)?)))?;
    let mut out = Vec::new();
    for r in rows {
        let (id, fields) = r?;
        out.push(Record {
            id,
            data: E::from_fields(fields)?,
        });
    }
    Ok(out)
}

fn read_fields<E: Entity>(row: &rusqlite::Row<'_>, offset: usize) -> rusqlite::Result<Vec<FieldValue>> {
    E::TABLE
        .columns
        .iter()
        .enumerate()
        .map(|(i, c)| FieldValue::read(row, offset + i, c.kind))
        .collect()
}
