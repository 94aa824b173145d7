//! Integration tests for reading maze files from disk.

use fancy_sokoban::{read_maze_file, GameState, SokobanError};
use std::io::Write;
use tempfile::NamedTempFile;

fn maze_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_load_from_file() {
    let file = maze_file("4 12\nW W\n P \nG2 \n");
    let state = GameState::load(file.path()).unwrap();

    assert_eq!(state.get_player_strength(), 4);
    assert_eq!(state.get_player_moves_remaining(), 12);
    assert_eq!(state.get_dimensions(), (3, 3));
    assert_eq!(state.get_entities().len(), 1);
}

#[test]
fn test_read_maze_file_round_trip() {
    let file = maze_file("2 8\nPG\n1 \n");
    let raw = read_maze_file(file.path()).unwrap();

    assert_eq!(raw.player_strength, 2);
    assert_eq!(raw.player_moves, 8);
    assert_eq!(raw.rows, vec![vec!['P', 'G'], vec!['1', ' ']]);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = read_maze_file("no/such/maze.txt");
    assert!(matches!(result, Err(SokobanError::Io(_))));
}

#[test]
fn test_malformed_file_is_load_error() {
    let file = maze_file("not a stats line\nP \n");
    assert!(matches!(
        GameState::load(file.path()),
        Err(SokobanError::MalformedMaze(_))
    ));
}

#[test]
fn test_playerless_file_is_load_error() {
    let file = maze_file("3 10\nW W\nG  \n");
    assert!(matches!(
        GameState::load(file.path()),
        Err(SokobanError::MalformedMaze(_))
    ));
}

#[test]
fn test_ragged_file_is_load_error() {
    let file = maze_file("3 10\nWWW\nP\n");
    assert!(GameState::load(file.path()).is_err());
}
