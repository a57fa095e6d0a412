//! The interactive menu loop.

use super::console::Console;
use super::menu::{capitalize, entity_menu, EntityChoice, MainChoice, MAIN_MENU};
use super::render::{breed_matches_table, records_table, summary};
use crate::app::{try_filter_breeds_by_category, try_search_animals_by_name, Mutation, Repository};
use crate::domain::{Animal, Breed, Category, Enclosure, Entity, Keeper};
use crate::error::AppError;
use crate::infra::DbPool;
use std::io::{BufRead, Write};

const FAREWELL: &str = "🐊 See you later, alligator! 🐊";

pub struct ZooShell<'db, R, W> {
    pool: &'db DbPool,
    console: Console<R, W>,
}

impl<'db, R: BufRead, W: Write> ZooShell<'db, R, W> {
    pub fn new(pool: &'db DbPool, console: Console<R, W>) -> Self {
        Self { pool, console }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.console.say(self.pool)?;
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) | Err(AppError::InputClosed) => break,
                Err(e) => return Err(e),
            }
        }
        self.console.say(FAREWELL)
    }

    /// One pass through the main menu; `false` once the user chose exit.
    fn step(&mut self) -> Result<bool, AppError> {
        self.console.say(MAIN_MENU)?;
        let choice = self.console.read_choice()?;
        match MainChoice::from_number(choice) {
            Some(MainChoice::Enclosures) => self.manage::<Enclosure>()?,
            Some(MainChoice::Categories) => self.manage::<Category>()?,
            Some(MainChoice::Breeds) => self.manage::<Breed>()?,
            Some(MainChoice::Keepers) => self.manage::<Keeper>()?,
            Some(MainChoice::Animals) => self.manage::<Animal>()?,
            Some(MainChoice::Search) => self.search()?,
            Some(MainChoice::Filter) => self.filter()?,
            Some(MainChoice::Exit) => return Ok(false),
            None => self.console.say("Invalid choice. Please try again.")?,
        }
        Ok(true)
    }

    fn manage<E: Entity>(&mut self) -> Result<(), AppError> {
        let table = E::TABLE;
        let repo = Repository::<E>::new(self.pool);

        let listed = repo.try_list();
        match self.checked(&format!("retrieving {}", table.plural), listed)? {
            Some(records) if records.is_empty() => {
                self.console.say(format!("No {} found.", table.plural))?
            }
            Some(records) => self.console.say(records_table(&records))?,
            None => {}
        }

        self.console.say(entity_menu(table))?;
        let choice = self.console.read_choice()?;
        match EntityChoice::from_number(choice) {
            Some(EntityChoice::Create) => {
                let entity = self.prompt_entity::<E>(false)?;
                let msg = match repo.add(&entity) {
                    Some(id) => format!("{} with ID {} added successfully.", capitalize(table.singular), id),
                    None => format!("Error occurred while adding {}.", table.singular),
                };
                self.console.say(msg)?;
            }
            Some(EntityChoice::Edit) => {
                let id = self
                    .console
                    .prompt_int(&format!("Enter the ID of the {} to edit: ", table.singular))?;
                let lookup = repo.try_get(id);
                let Some(found) = self.checked(&format!("retrieving {}", table.singular), lookup)?
                else {
                    return Ok(());
                };
                let Some(current) = found else {
                    self.console
                        .say(format!("No {} with ID {} found.", table.singular, id))?;
                    return Ok(());
                };
                self.console
                    .say(format!("Current values: {}", summary(Some(&current))))?;
                let entity = self.prompt_entity::<E>(true)?;
                let outcome = repo.edit(id, &entity);
                self.report(table.singular, id, "updated", "editing", outcome)?;
            }
            Some(EntityChoice::Delete) => {
                let id = self
                    .console
                    .prompt_int(&format!("Enter the ID of the {} to delete: ", table.singular))?;
                let outcome = repo.delete(id);
                self.report(table.singular, id, "deleted", "deleting", outcome)?;
            }
            Some(EntityChoice::Back) => {}
            None => self.console.say("Invalid choice. Please try again.")?,
        }
        Ok(())
    }

    /// Ask for every data column of `E`, in table order.
    fn prompt_entity<E: Entity>(&mut self, replacing: bool) -> Result<E, AppError> {
        let mut values = Vec::with_capacity(E::TABLE.columns.len());
        for column in E::TABLE.columns {
            let prompt = if replacing {
                format!("Enter the new {}: ", column.label)
            } else {
                format!("Enter the {}: ", column.label)
            };
            values.push(self.console.prompt_field(&prompt, column.kind)?);
        }
        E::from_fields(values)
    }

    /// A failed read is logged and reported, never shown as an empty result.
    fn checked<T>(&mut self, action: &str, read: Result<T, AppError>) -> Result<Option<T>, AppError> {
        match read {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::error!("Error occurred while {}: {}", action, e);
                self.console.say(format!("Error occurred while {}.", action))?;
                Ok(None)
            }
        }
    }

    fn report(
        &mut self,
        noun: &str,
        id: i64,
        done: &str,
        doing: &str,
        outcome: Mutation,
    ) -> Result<(), AppError> {
        let msg = match outcome {
            Mutation::Applied => format!("{} with ID {} {} successfully.", capitalize(noun), id, done),
            Mutation::Missing => format!("No {} with ID {} found.", noun, id),
            Mutation::Failed => format!("Error occurred while {} {}.", doing, noun),
        };
        self.console.say(msg)
    }

    fn search(&mut self) -> Result<(), AppError> {
        self.console.say("Enter part of an animal name to search.")?;
        let keyword = self.console.prompt_text("Keyword: ")?;
        let found = try_search_animals_by_name(self.pool, &keyword);
        let Some(results) = self.checked("searching animals by name", found)? else {
            return Ok(());
        };
        if results.is_empty() {
            return self.console.say("No matching animals found.");
        }
        self.console.say(records_table(&results))
    }

    fn filter(&mut self) -> Result<(), AppError> {
        self.console.say("Enter animal category name to filter by.")?;
        let category = self.console.prompt_text("Category Name: ")?;
        let found = try_filter_breeds_by_category(self.pool, &category);
        let Some(breeds) = self.checked("filtering breeds by category", found)? else {
            return Ok(());
        };
        if breeds.is_empty() {
            return self.console.say("No matching breeds found.");
        }
        self.console.say(breed_matches_table(&breeds))
    }
}
