//! Category and breed integration tests, including foreign-key failures

use zoo_lib::app::{Mutation, Repository};
use zoo_lib::domain::{Breed, Category};
use zoo_lib::infra::db::init_test_db;

fn category(name: &str) -> Category {
    Category {
        name: name.to_string(),
    }
}

fn breed(name: &str, category_id: i64) -> Breed {
    Breed {
        name: name.to_string(),
        category_id,
    }
}

// ══════════════════════════════════════════════════════════
//  category
// ══════════════════════════════════════════════════════════

#[test]
fn category_round_trip_through_store() {
    let pool = init_test_db();
    let repo = Repository::<Category>::new(&pool);
    let id = repo.add(&category("Mammal")).unwrap();
    assert_eq!(repo.get_by_id(id), Some(category("Mammal")));
    assert_eq!(repo.edit(id, &category("Mammals")), Mutation::Applied);
    assert_eq!(repo.get_by_id(id), Some(category("Mammals")));
}

// ══════════════════════════════════════════════════════════
//  breed
// ══════════════════════════════════════════════════════════

#[test]
fn breed_links_to_category() {
    let pool = init_test_db();
    let cat = Repository::<Category>::new(&pool)
        .add(&category("Bird"))
        .unwrap();
    let repo = Repository::<Breed>::new(&pool);
    let id = repo.add(&breed("Flamingo", cat)).unwrap();
    assert_eq!(repo.get_by_id(id), Some(breed("Flamingo", cat)));
}

#[test]
fn breed_with_unknown_category_is_rejected() {
    let pool = init_test_db();
    let repo = Repository::<Breed>::new(&pool);
    assert_eq!(repo.add(&breed("Dodo", 77)), None);
    assert!(repo.try_add(&breed("Dodo", 77)).is_err());
    assert!(repo.list().is_empty());
}

#[test]
fn failed_edit_leaves_row_unchanged() {
    let pool = init_test_db();
    let cat = Repository::<Category>::new(&pool)
        .add(&category("Reptile"))
        .unwrap();
    let repo = Repository::<Breed>::new(&pool);
    let id = repo.add(&breed("Iguana", cat)).unwrap();

    assert_eq!(repo.edit(id, &breed("Iguana", 999)), Mutation::Failed);
    assert_eq!(repo.get_by_id(id), Some(breed("Iguana", cat)));
}

#[test]
fn store_stays_usable_after_failure() {
    let pool = init_test_db();
    let repo = Repository::<Breed>::new(&pool);
    assert_eq!(repo.add(&breed("Orphan", 5)), None);

    let cat = Repository::<Category>::new(&pool)
        .add(&category("Fish"))
        .unwrap();
    assert!(repo.add(&breed("Clownfish", cat)).is_some());
}
