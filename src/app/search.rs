//! Cross-table queries: animal name search and breed-by-category filter.

use super::repository::query_records;
use crate::domain::{Animal, Entity, Record};
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use rusqlite::params;

/// One row of the breed filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedMatch {
    pub breed_id: i64,
    pub breed: String,
    pub category: String,
}

/// Case-insensitive substring match on animal names. `%` and `_` in `term`
/// match literally.
pub fn try_search_animals_by_name(
    pool: &DbPool,
    term: &str,
) -> Result<Vec<Record<Animal>>, AppError> {
    let pattern = format!("%{}%", escape_like(term));
    let sql = Animal::TABLE.select_where_sql("fold(name) LIKE fold(?1) ESCAPE '\\'");
    let conn = get_connection(pool);
    query_records(&conn, &sql, [&pattern])
}

/// Breeds whose category name equals `category` exactly.
pub fn try_filter_breeds_by_category(
    pool: &DbPool,
    category: &str,
) -> Result<Vec<BreedMatch>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare(
        "SELECT b.breed_id, b.breed, c.category \
         FROM animal_breed b \
         JOIN animal_category c ON b.category_id = c.category_id \
         WHERE c.category = ?1 \
         ORDER BY b.breed_id",
    )?;
    let rows = stmt.query_map(params![category], |r| {
        Ok(BreedMatch {
            breed_id: r.get(0)?,
            breed: r.get(1)?,
            category: r.get(2)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn search_animals_by_name(pool: &DbPool, term: &str) -> Vec<Record<Animal>> {
    try_search_animals_by_name(pool, term).unwrap_or_else(|e| {
        log::error!("Error occurred while searching animals by name: {}", e);
        Vec::new()
    })
}

pub fn filter_breeds_by_category(pool: &DbPool, category: &str) -> Vec<BreedMatch> {
    try_filter_breeds_by_category(pool, category).unwrap_or_else(|e| {
        log::error!("Error occurred while filtering breeds by category: {}", e);
        Vec::new()
    })
}

fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_guards_wildcards() {
        assert_eq!(escape_like("50%_a\\b"), "50\\%\\_a\\\\b");
        assert_eq!(escape_like("leo"), "leo");
    }
}
