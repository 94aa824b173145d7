//! # Maze Loading
//!
//! Parsing of maze text into a raw character grid, and conversion of that
//! grid into the typed maze, entity map and player start.
//!
//! File reading is a thin wrapper; everything interesting happens on
//! in-memory text so tests and embedders never need the filesystem.

use crate::{maze, EntityMap, Maze, Position, SokobanError, SokobanResult, Tile};
use std::fs;
use std::path::Path;

/// A maze file parsed into its raw parts, before type conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMaze {
    /// The character grid, one inner vec per row.
    pub rows: Vec<Vec<char>>,
    /// The player's starting strength.
    pub player_strength: u32,
    /// The player's starting move allowance.
    pub player_moves: i32,
}

/// The typed output of maze conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedMaze {
    /// The tile grid.
    pub maze: Maze,
    /// Entities keyed by their starting cell.
    pub entities: EntityMap,
    /// The player's starting cell.
    pub player_start: Position,
}

/// Parses maze text of the form:
///
/// ```text
/// <strength> <moves_remaining>
/// <row 0 characters>
/// <row 1 characters>
/// ...
/// ```
///
/// Interior spaces are floor and are preserved; trailing blank lines are
/// ignored. All rows must have the same length.
///
/// # Examples
///
/// ```
/// use fancy_sokoban::parse_maze;
///
/// let raw = parse_maze("3 10\nW1\nP \n").unwrap();
/// assert_eq!(raw.player_strength, 3);
/// assert_eq!(raw.player_moves, 10);
/// assert_eq!(raw.rows.len(), 2);
/// ```
pub fn parse_maze(text: &str) -> SokobanResult<RawMaze> {
    let mut lines = text.lines();
    let stats_line = lines
        .next()
        .ok_or_else(|| SokobanError::MalformedMaze("maze file is empty".to_string()))?;

    let stats: Vec<&str> = stats_line.split_whitespace().collect();
    let [strength, moves] = stats[..] else {
        return Err(SokobanError::MalformedMaze(format!(
            "expected '<strength> <moves>' on the first line, got {stats_line:?}"
        )));
    };
    let player_strength: u32 = strength.parse().map_err(|_| {
        SokobanError::MalformedMaze(format!("invalid strength value {strength:?}"))
    })?;
    let player_moves: i32 = moves
        .parse()
        .map_err(|_| SokobanError::MalformedMaze(format!("invalid moves value {moves:?}")))?;

    let mut rows: Vec<Vec<char>> = lines.map(|line| line.chars().collect()).collect();
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }

    let Some(first) = rows.first() else {
        return Err(SokobanError::MalformedMaze(
            "maze file has no grid rows".to_string(),
        ));
    };
    let width = first.len();
    if width == 0 {
        return Err(SokobanError::MalformedMaze(
            "maze rows are empty".to_string(),
        ));
    }
    if rows.iter().any(|row| row.len() != width) {
        return Err(SokobanError::MalformedMaze(
            "maze rows have unequal lengths".to_string(),
        ));
    }

    Ok(RawMaze {
        rows,
        player_strength,
        player_moves,
    })
}

/// Reads and parses a maze file from disk.
pub fn read_maze_file<P: AsRef<Path>>(path: P) -> SokobanResult<RawMaze> {
    let text = fs::read_to_string(path)?;
    parse_maze(&text)
}

/// Converts a raw character grid into a typed maze, entity map and player
/// start position.
///
/// Each cell's symbol is dispatched through the mapping tables in
/// [`crate::maze`]: digits become floor plus a crate of that strength,
/// potion/coin symbols become floor plus the entity, `P` records the
/// player start, and tile symbols become their tile. A grid with no player
/// marker, or more than one, fails to convert.
pub fn convert_maze(rows: &[Vec<char>]) -> SokobanResult<ConvertedMaze> {
    let mut tiles = Vec::with_capacity(rows.len());
    let mut entities = EntityMap::new();
    let mut player_start: Option<Position> = None;

    for (row, symbols) in rows.iter().enumerate() {
        let mut tile_row: Vec<Tile> = Vec::with_capacity(symbols.len());
        for (col, &symbol) in symbols.iter().enumerate() {
            let position = Position::new(row as i32, col as i32);
            tile_row.push(maze::tile_from_symbol(symbol));

            if symbol == maze::PLAYER {
                if player_start.is_some() {
                    return Err(SokobanError::MalformedMaze(
                        "maze has more than one player marker".to_string(),
                    ));
                }
                player_start = Some(position);
            } else if let Some(entity) = maze::entity_from_symbol(symbol) {
                entities.insert(position, entity);
            }
        }
        tiles.push(tile_row);
    }

    let maze = Maze::new(tiles)?;
    let player_start = player_start.ok_or_else(|| {
        SokobanError::MalformedMaze("maze has no player marker".to_string())
    })?;

    Ok(ConvertedMaze {
        maze,
        entities,
        player_start,
    })
}
