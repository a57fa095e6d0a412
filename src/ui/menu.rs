//! Menu choices and their text.

use crate::domain::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Enclosures,
    Categories,
    Breeds,
    Keepers,
    Animals,
    Search,
    Filter,
    Exit,
}

impl MainChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::Enclosures),
            2 => Some(Self::Categories),
            3 => Some(Self::Breeds),
            4 => Some(Self::Keepers),
            5 => Some(Self::Animals),
            6 => Some(Self::Search),
            7 => Some(Self::Filter),
            0 => Some(Self::Exit),
            _ => None,
        }
    }
}

pub const MAIN_MENU: &str = "\
What would you like to do:
1. View all enclosures
2. View all categories
3. View all breeds
4. View all keepers
5. View all animals
6. Search for animals by name
7. Filter animal breeds by their categories
0. Exit
Enter your choice:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityChoice {
    Create,
    Edit,
    Delete,
    Back,
}

impl EntityChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::Create),
            2 => Some(Self::Edit),
            3 => Some(Self::Delete),
            0 => Some(Self::Back),
            _ => None,
        }
    }
}

pub fn entity_menu(table: &Table) -> String {
    format!(
        "Menu: {plural}\n\
         1. Create new {one}\n\
         2. Edit {one}\n\
         3. Delete {one}\n\
         0. Back to main menu\n\
         Enter your choice:",
        plural = capitalize(table.plural),
        one = table.singular
    )
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
