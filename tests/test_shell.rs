//! Scripted console sessions against an in-memory store

use std::io::{self, Cursor, Write};
use zoo_lib::app::Repository;
use zoo_lib::config::DbConfig;
use zoo_lib::domain::{Enclosure, Keeper};
use zoo_lib::infra::db::init_test_db;
use zoo_lib::infra::{init_db, DbPool};
use zoo_lib::run_shell;
use zoo_lib::ui::{Console, ZooShell};

// ──────────────────────── Helper ────────────────────────

fn session(pool: &DbPool, script: impl AsRef<[u8]>) -> String {
    let console = Console::new(Cursor::new(script.as_ref().to_vec()), Vec::new());
    let mut shell = ZooShell::new(pool, console);
    shell.run().unwrap();
    String::from_utf8(shell.into_console().into_output()).unwrap()
}

fn enclosures(pool: &DbPool) -> Vec<Enclosure> {
    Repository::<Enclosure>::new(pool)
        .list()
        .into_iter()
        .map(|r| r.data)
        .collect()
}

/// On-disk store plus a second connection to the same file.
fn shared_file_db(dir: &tempfile::TempDir) -> (DbPool, rusqlite::Connection) {
    let path = dir.path().join("zoo.db");
    let pool = init_db(&DbConfig {
        path: path.clone(),
        name: "zoo".into(),
    })
    .unwrap();
    (pool, rusqlite::Connection::open(&path).unwrap())
}

struct ClosedTerminal;

impl Write for ClosedTerminal {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ══════════════════════════════════════════════════════════
//  main loop
// ══════════════════════════════════════════════════════════

#[test]
fn exit_prints_status_and_farewell() {
    let pool = init_test_db();
    let out = session(&pool, "0\n");
    assert!(out.starts_with("Connected to database 'zoo'"));
    assert!(out.contains("What would you like to do:"));
    assert!(out.contains("See you later, alligator!"));
}

#[test]
fn end_of_input_ends_loop() {
    let pool = init_test_db();
    let out = session(&pool, "");
    assert!(out.contains("See you later, alligator!"));
}

#[test]
fn invalid_main_choices_are_reported() {
    let pool = init_test_db();
    let out = session(&pool, "nine\n9\n0\n");
    assert!(out.contains("Error: Invalid input. Please enter a number."));
    assert!(out.contains("Invalid choice. Please try again."));
}

#[test]
fn non_utf8_input_is_asked_again() {
    let pool = init_test_db();
    let mut script = b"6\n".to_vec();
    script.extend_from_slice(&[0xff, 0xfe, b'\n']);
    script.extend_from_slice(b"leo\n0\n");
    let out = session(&pool, script);
    assert!(out.contains("Error: Invalid input. Please try again."));
    assert!(out.contains("No matching animals found."));
    assert!(out.contains("See you later, alligator!"));
}

#[test]
fn terminal_failure_is_not_a_startup_error() {
    let pool = init_test_db();
    let console = Console::new(Cursor::new(b"0\n".to_vec()), ClosedTerminal);
    let err = run_shell(&pool, console).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.starts_with("console I/O failed"));
    assert!(msg.contains("terminal closed"));
}

// ══════════════════════════════════════════════════════════
//  entity menus
// ══════════════════════════════════════════════════════════

#[test]
fn create_enclosure_through_menu() {
    let pool = init_test_db();
    let out = session(&pool, "1\n1\nSavanna\nbig\n500\n0\n");
    assert!(out.contains("No enclosures found."));
    assert!(out.contains("Enter the name of the enclosure: "));
    assert!(out.contains("Error: Invalid input. Please try again."));
    assert!(out.contains("Enclosure with ID 1 added successfully."));
    assert_eq!(
        enclosures(&pool),
        vec![Enclosure {
            name: "Savanna".into(),
            size: 500
        }]
    );
}

#[test]
fn edit_enclosure_shows_current_values() {
    let pool = init_test_db();
    Repository::<Enclosure>::new(&pool)
        .add(&Enclosure {
            name: "Savanna".into(),
            size: 500,
        })
        .unwrap();
    let out = session(&pool, "1\n2\n1\nGrassland\n650\n0\n");
    assert!(out.contains("Savanna"));
    assert!(out.contains("Current values: Name: Savanna, Size: 500"));
    assert!(out.contains("Enter the new name of the enclosure: "));
    assert!(out.contains("Enclosure with ID 1 updated successfully."));
    assert_eq!(enclosures(&pool)[0].name, "Grassland");
}

#[test]
fn edit_unknown_id_skips_prompts() {
    let pool = init_test_db();
    let out = session(&pool, "1\n2\n5\n0\n");
    assert!(out.contains("No enclosure with ID 5 found."));
    assert!(!out.contains("Enter the new name"));
}

#[test]
fn delete_enclosure_cascades_to_keeper() {
    let pool = init_test_db();
    let id = Repository::<Enclosure>::new(&pool)
        .add(&Enclosure {
            name: "Savanna".into(),
            size: 500,
        })
        .unwrap();
    Repository::<Keeper>::new(&pool)
        .add(&Keeper {
            name: "Mia".into(),
            enclosure_id: id,
        })
        .unwrap();
    let out = session(&pool, "1\n3\n1\n0\n");
    assert!(out.contains("Enclosure with ID 1 deleted successfully."));
    assert!(Repository::<Keeper>::new(&pool).list().is_empty());
}

#[test]
fn delete_unknown_keeper_is_reported() {
    let pool = init_test_db();
    let out = session(&pool, "4\n3\n9\n0\n");
    assert!(out.contains("No keeper with ID 9 found."));
    assert!(!out.contains("deleted successfully"));
}

#[test]
fn failed_reads_are_reported_not_shown_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let (pool, other) = shared_file_db(&dir);
    other
        .execute_batch("DROP TABLE keeper; DROP TABLE animal; DROP TABLE animal_breed;")
        .unwrap();

    let out = session(&pool, "4\n0\n4\n2\n1\n6\nleo\n7\nBird\n0\n");
    assert!(out.contains("Error occurred while retrieving keepers."));
    assert!(out.contains("Error occurred while retrieving keeper."));
    assert!(out.contains("Error occurred while searching animals by name."));
    assert!(out.contains("Error occurred while filtering breeds by category."));
    assert!(!out.contains("No keepers found."));
    assert!(!out.contains("No keeper with ID 1 found."));
    assert!(!out.contains("No matching"));
    assert!(out.contains("See you later, alligator!"));
}

#[test]
fn failed_insert_is_reported_and_loop_continues() {
    let pool = init_test_db();
    let out = session(&pool, "4\n1\nMia\n12\n0\n");
    assert!(out.contains("Error occurred while adding keeper."));
    assert!(out.contains("See you later, alligator!"));
}

#[test]
fn animal_birthday_is_validated() {
    let pool = init_test_db();
    let out = session(&pool, "5\n1\nLeo\n30/06/2018\n2018-06-30\n1\n1\n0\n");
    assert!(out.contains("expected YYYY-MM-DD"));
    // No breed or enclosure exists, so the insert itself fails.
    assert!(out.contains("Error occurred while adding animal."));
}

#[test]
fn invalid_submenu_choice_returns_to_main_menu() {
    let pool = init_test_db();
    let out = session(&pool, "2\n7\n0\n");
    assert!(out.contains("Menu: Categories"));
    assert!(out.contains("Invalid choice. Please try again."));
}

// ══════════════════════════════════════════════════════════
//  search / filter
// ══════════════════════════════════════════════════════════

#[test]
fn search_without_results() {
    let pool = init_test_db();
    let out = session(&pool, "6\nzebra\n0\n");
    assert!(out.contains("Keyword: "));
    assert!(out.contains("No matching animals found."));
}

#[test]
fn filter_shows_breed_table() {
    let pool = init_test_db();
    let out = session(&pool, "2\n1\nBird\n3\n1\nParrot\n1\n7\nBird\n0\n");
    assert!(out.contains("Breed with ID 1 added successfully."));
    assert!(out.contains("Animal Category"));
    assert!(out.contains("Parrot"));
}

#[test]
fn filter_without_results() {
    let pool = init_test_db();
    let out = session(&pool, "7\nFish\n0\n");
    assert!(out.contains("No matching breeds found."));
}
