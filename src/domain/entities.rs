//! The five zoo record types.

use super::schema::{Table, ANIMAL, BREED, CATEGORY, ENCLOSURE, KEEPER};
use super::value::{FieldValue, Fields};
use crate::error::AppError;
use chrono::NaiveDate;

/// A record type stored in one table, convertible to and from the table's
/// data columns (in [`Table::columns`] order).
pub trait Entity: Sized {
    const TABLE: &'static Table;

    fn to_fields(&self) -> Vec<FieldValue>;

    fn from_fields(fields: Vec<FieldValue>) -> Result<Self, AppError>;
}

/// An entity together with its generated id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<E> {
    pub id: i64,
    pub data: E,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    pub name: String,
    /// Area in m².
    pub size: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breed {
    pub name: String,
    pub category_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keeper {
    pub name: String,
    pub enclosure_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub name: String,
    pub birthday: NaiveDate,
    pub breed_id: i64,
    pub enclosure_id: i64,
}

impl Entity for Enclosure {
    const TABLE: &'static Table = &ENCLOSURE;

    fn to_fields(&self) -> Vec<FieldValue> {
        vec![FieldValue::Text(self.name.clone()), FieldValue::Int(self.size)]
    }

    fn from_fields(fields: Vec<FieldValue>) -> Result<Self, AppError> {
        let mut f = Fields::new(Self::TABLE, fields);
        Ok(Self {
            name: f.text()?,
            size: f.int()?,
        })
    }
}

impl Entity for Category {
    const TABLE: &'static Table = &CATEGORY;

    fn to_fields(&self) -> Vec<FieldValue> {
        vec![FieldValue::Text(self.name.clone())]
    }

    fn from_fields(fields: Vec<FieldValue>) -> Result<Self, AppError> {
        let mut f = Fields::new(Self::TABLE, fields);
        Ok(Self { name: f.text()? })
    }
}

impl Entity for Breed {
    const TABLE: &'static Table = &BREED;

    fn to_fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(self.name.clone()),
            FieldValue::Int(self.category_id),
        ]
    }

    fn from_fields(fields: Vec<FieldValue>) -> Result<Self, AppError> {
        let mut f = Fields::new(Self::TABLE, fields);
        Ok(Self {
            name: f.text()?,
            category_id: f.int()?,
        })
    }
}

impl Entity for Keeper {
    const TABLE: &'static Table = &KEEPER;

    fn to_fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(self.name.clone()),
            FieldValue::Int(self.enclosure_id),
        ]
    }

    fn from_fields(fields: Vec<FieldValue>) -> Result<Self, AppError> {
        let mut f = Fields::new(Self::TABLE, fields);
        Ok(Self {
            name: f.text()?,
            enclosure_id: f.int()?,
        })
    }
}

impl Entity for Animal {
    const TABLE: &'static Table = &ANIMAL;

    fn to_fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(self.name.clone()),
            FieldValue::Date(self.birthday),
            FieldValue::Int(self.breed_id),
            FieldValue::Int(self.enclosure_id),
        ]
    }

    fn from_fields(fields: Vec<FieldValue>) -> Result<Self, AppError> {
        let mut f = Fields::new(Self::TABLE, fields);
        Ok(Self {
            name: f.text()?,
            birthday: f.date()?,
            breed_id: f.int()?,
            enclosure_id: f.int()?,
        })
    }
}
