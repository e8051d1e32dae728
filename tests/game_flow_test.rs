//! End-to-end tests for the move → record → re-read flow.

use tempfile::NamedTempFile;

use ninecell::{App, GameStatus, LeaderboardStore, Mark};

fn setup_app() -> (NamedTempFile, App) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();
    let store = LeaderboardStore::open(&db_path).expect("Failed to open store");
    let app = App::new(store).expect("Failed to create app");
    (db_file, app)
}

#[test]
fn top_row_win_records_exactly_one_increment() {
    let (_db, mut app) = setup_app();

    // X→0, O→3, X→1, O→4, X→2: X completes the top row.
    for pos in [0, 3, 1, 4, 2] {
        app.place(pos);
    }

    assert_eq!(app.game().status(), GameStatus::Won(Mark::X));
    assert_eq!(app.standings().len(), 1);
    assert_eq!(app.standings()[0].player(), "X");
    assert_eq!(*app.standings()[0].wins(), 1);
}

#[test]
fn clicks_after_the_win_do_not_increment_again() {
    let (_db, mut app) = setup_app();
    for pos in [0, 3, 1, 4, 2] {
        app.place(pos);
    }
    // Further input is silently ignored and records nothing.
    for pos in [5, 6, 7, 8] {
        app.place(pos);
    }
    assert_eq!(*app.standings()[0].wins(), 1);
    assert_eq!(app.standings().len(), 1);
}

#[test]
fn draw_records_nothing() {
    let (_db, mut app) = setup_app();

    // Nine moves filling the board with no three-in-a-row for either mark.
    for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        app.place(pos);
    }

    assert_eq!(app.game().status(), GameStatus::Draw);
    assert!(app.standings().is_empty());
}

#[test]
fn illegal_moves_are_silent_no_ops() {
    let (_db, mut app) = setup_app();

    app.place(4);
    let board_before = app.game().board().clone();

    app.place(4); // occupied
    app.place(42); // out of bounds

    assert_eq!(*app.game().board(), board_before);
    assert_eq!(app.game().status(), GameStatus::NextTurn(Mark::O));
}

#[test]
fn standings_survive_across_sessions() {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    {
        let store = LeaderboardStore::open(&db_path).expect("Failed to open store");
        let mut app = App::new(store).expect("Failed to create app");
        for pos in [0, 3, 1, 4, 2] {
            app.place(pos);
        }
    }

    // A new session over the same database sees the recorded win.
    let store = LeaderboardStore::open(&db_path).expect("Failed to reopen store");
    let app = App::new(store).expect("Failed to create app");
    assert_eq!(app.standings().len(), 1);
    assert_eq!(app.standings()[0].player(), "X");
    assert_eq!(*app.standings()[0].wins(), 1);
}
