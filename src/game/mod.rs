//! # Game Module
//!
//! Core game state management, maze representation, and entity systems.
//!
//! This module contains the fundamental building blocks of the engine:
//! - Grid geometry (positions and movement directions)
//! - Tile and maze representation
//! - Entity and player modeling
//! - The central game state and its atomic operations

pub mod entity;
pub mod state;
pub mod tile;

pub use entity::*;
pub use state::*;
pub use tile::*;

use serde::{Deserialize, Serialize};

/// Represents a (row, column) coordinate on the maze grid.
///
/// Rows grow downwards and columns grow rightwards, matching the order in
/// which maze files are read. Deltas may be negative; whether a position is
/// actually on the board is decided by [`Maze::in_bounds`].
///
/// # Examples
///
/// ```
/// use fancy_sokoban::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row, 2);
/// assert_eq!(pos.col, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring position one step in the given direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use fancy_sokoban::{Direction, Position};
    ///
    /// let pos = Position::new(1, 1);
    /// assert_eq!(pos.step(Direction::Up), Position::new(0, 1));
    /// assert_eq!(pos.step(Direction::Right), Position::new(1, 2));
    /// ```
    pub fn step(self, direction: Direction) -> Position {
        self + direction.delta()
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.row + other.row, self.col + other.col)
    }
}

/// The four cardinal movement directions.
///
/// There is deliberately no variant for diagonal or null movement; an
/// invalid direction token cannot reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Converts a direction to a (row, column) delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use fancy_sokoban::{Direction, Position};
    ///
    /// assert_eq!(Direction::Up.delta(), Position::new(-1, 0));
    /// assert_eq!(Direction::Left.delta(), Position::new(0, -1));
    /// ```
    pub fn delta(self) -> Position {
        match self {
            Direction::Up => Position::new(-1, 0),
            Direction::Down => Position::new(1, 0),
            Direction::Left => Position::new(0, -1),
            Direction::Right => Position::new(0, 1),
        }
    }

    /// Returns all four directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}
