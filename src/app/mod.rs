//! Data access use cases.

mod repository;
mod search;

pub use repository::{Mutation, Repository};
pub use search::{
    filter_breeds_by_category, search_animals_by_name, try_filter_breeds_by_category,
    try_search_animals_by_name, BreedMatch,
};
