//! Tests for the leaderboard store.

use tempfile::NamedTempFile;

use ninecell::{LeaderboardStore, Mark};

/// Creates a temporary database file and an open store. The file handle
/// must stay in scope to keep the database alive.
fn setup_test_store() -> (NamedTempFile, LeaderboardStore) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();
    let store = LeaderboardStore::open(&db_path).expect("Failed to open store");
    (db_file, store)
}

#[test]
fn open_creates_schema_idempotently() {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    // Opening twice must not fail or clobber data.
    let mut first = LeaderboardStore::open(&db_path).expect("First open failed");
    first.record_win(Mark::X).expect("Record failed");
    drop(first);

    let mut second = LeaderboardStore::open(&db_path).expect("Second open failed");
    let entries = second.read_all().expect("Read failed");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].player(), "X");
    assert_eq!(*entries[0].wins(), 1);
}

#[test]
fn fresh_store_has_no_entries() {
    let (_db, mut store) = setup_test_store();
    assert!(store.read_all().expect("Read failed").is_empty());
}

#[test]
fn first_win_creates_entry_with_count_one() {
    let (_db, mut store) = setup_test_store();
    let entry = store.record_win(Mark::X).expect("Record failed");
    assert_eq!(entry.player(), "X");
    assert_eq!(*entry.wins(), 1);

    let entries = store.read_all().expect("Read failed");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0], entry);
}

#[test]
fn sequential_wins_count_exactly_n() {
    let (_db, mut store) = setup_test_store();
    for expected in 1..=5 {
        let entry = store.record_win(Mark::O).expect("Record failed");
        assert_eq!(*entry.wins(), expected);
    }
    let entries = store.read_all().expect("Read failed");
    assert_eq!(entries.len(), 1);
    assert_eq!(*entries[0].wins(), 5);
}

#[test]
fn marks_count_independently() {
    let (_db, mut store) = setup_test_store();
    store.record_win(Mark::X).expect("Record failed");
    store.record_win(Mark::X).expect("Record failed");
    store.record_win(Mark::O).expect("Record failed");

    let entries = store.read_all().expect("Read failed");
    assert_eq!(entries.len(), 2);

    let wins_for = |player: &str| {
        *entries
            .iter()
            .find(|e| e.player() == player)
            .expect("missing entry")
            .wins()
    };
    assert_eq!(wins_for("X"), 2);
    assert_eq!(wins_for("O"), 1);
}

#[test]
fn standings_order_best_first() {
    let (_db, mut store) = setup_test_store();
    store.record_win(Mark::O).expect("Record failed");
    store.record_win(Mark::O).expect("Record failed");
    store.record_win(Mark::X).expect("Record failed");

    let entries = store.read_all().expect("Read failed");
    assert_eq!(entries[0].player(), "O");
    assert_eq!(entries[1].player(), "X");
}

#[test]
fn entries_parse_back_into_marks() {
    let (_db, mut store) = setup_test_store();
    store.record_win(Mark::X).expect("Record failed");
    let entries = store.read_all().expect("Read failed");
    assert_eq!(entries[0].mark().expect("Parse failed"), Mark::X);
}

#[test]
fn open_fails_for_unwritable_path() {
    let result = LeaderboardStore::open("/nonexistent-dir/ninecell.db");
    assert!(result.is_err());
}
