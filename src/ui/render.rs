//! Table rendering with `comfy-table`.

use crate::app::BreedMatch;
use crate::domain::{Entity, Record};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, Table};

/// Placeholder shown where a lookup produced nothing.
pub const NOT_AVAILABLE: &str = "N/A";

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Magenta)),
        );
    table
}

pub fn records_table<E: Entity>(records: &[Record<E>]) -> String {
    let mut table = new_table(&E::TABLE.headers());
    for record in records {
        let row = std::iter::once(record.id.to_string())
            .chain(record.data.to_fields().into_iter().map(|v| v.to_string()));
        table.add_row(row);
    }
    table.to_string()
}

pub fn breed_matches_table(matches: &[BreedMatch]) -> String {
    let mut table = new_table(&["ID", "Breed", "Animal Category"]);
    for m in matches {
        table.add_row(vec![m.breed_id.to_string(), m.breed.clone(), m.category.clone()]);
    }
    table.to_string()
}

/// One-line summary of an entity's values, or "N/A".
pub fn summary<E: Entity>(entity: Option<&E>) -> String {
    match entity {
        Some(e) => E::TABLE
            .columns
            .iter()
            .zip(e.to_fields())
            .map(|(c, v)| format!("{}: {}", c.header, v))
            .collect::<Vec<_>>()
            .join(", "),
        None => NOT_AVAILABLE.to_string(),
    }
}
