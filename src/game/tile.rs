//! # Tile and Maze Representation
//!
//! Static per-cell terrain and the rectangular grid holding it.
//!
//! Tiles never change kind after loading; the only mutable piece of terrain
//! state is a goal's `filled` flag, which toggles when a crate is deposited
//! and when that deposit is undone.

use crate::{Position, SokobanError, SokobanResult};
use serde::{Deserialize, Serialize};

/// A single cell of terrain in the maze.
///
/// # Examples
///
/// ```
/// use fancy_sokoban::Tile;
///
/// assert!(Tile::Wall.is_blocking());
/// assert!(!Tile::Floor.is_blocking());
/// assert!(!Tile::Goal { filled: false }.is_blocking());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    /// Open floor; entities and the player may occupy it.
    Floor,
    /// Impassable terrain.
    Wall,
    /// A target cell for crates. Starts unfilled unless the maze file says
    /// otherwise, and toggles as crates are deposited and undone.
    Goal { filled: bool },
}

impl Tile {
    /// Returns true iff this tile blocks movement.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// Returns true iff this tile is a goal, filled or not.
    pub fn is_goal(&self) -> bool {
        matches!(self, Tile::Goal { .. })
    }

    /// Returns true iff this tile is a goal still waiting for a crate.
    pub fn is_unfilled_goal(&self) -> bool {
        matches!(self, Tile::Goal { filled: false })
    }

    /// Marks a goal as filled. Has no effect on other tile kinds.
    pub fn fill(&mut self) {
        if let Tile::Goal { filled } = self {
            *filled = true;
        }
    }

    /// Marks a goal as unfilled again. Has no effect on other tile kinds.
    pub fn unfill(&mut self) {
        if let Tile::Goal { filled } = self {
            *filled = false;
        }
    }
}

/// The rectangular grid of tiles making up a level.
///
/// The grid's shape is fixed at load time; only goal fill flags mutate
/// during play.
///
/// # Examples
///
/// ```
/// use fancy_sokoban::{Maze, Position, Tile};
///
/// let maze = Maze::new(vec![
///     vec![Tile::Wall, Tile::Wall],
///     vec![Tile::Floor, Tile::Goal { filled: false }],
/// ]).unwrap();
///
/// assert_eq!(maze.dimensions(), (2, 2));
/// assert!(maze.in_bounds(Position::new(1, 1)));
/// assert!(!maze.in_bounds(Position::new(2, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    tiles: Vec<Vec<Tile>>,
}

impl Maze {
    /// Creates a maze from rows of tiles.
    ///
    /// Fails with [`SokobanError::MalformedMaze`] if there are no rows or
    /// the rows are not all the same length.
    pub fn new(tiles: Vec<Vec<Tile>>) -> SokobanResult<Self> {
        let Some(first) = tiles.first() else {
            return Err(SokobanError::MalformedMaze(
                "maze has no rows".to_string(),
            ));
        };
        if first.is_empty() {
            return Err(SokobanError::MalformedMaze(
                "maze rows are empty".to_string(),
            ));
        }
        let width = first.len();
        if tiles.iter().any(|row| row.len() != width) {
            return Err(SokobanError::MalformedMaze(
                "maze rows have unequal lengths".to_string(),
            ));
        }
        Ok(Self { tiles })
    }

    /// Returns the maze dimensions as (rows, columns).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.tiles.len(), self.tiles[0].len())
    }

    /// Returns true iff the position lies on the grid.
    pub fn in_bounds(&self, position: Position) -> bool {
        let (rows, cols) = self.dimensions();
        position.row >= 0
            && position.col >= 0
            && (position.row as usize) < rows
            && (position.col as usize) < cols
    }

    /// Returns the tile at the given position, or None if out of bounds.
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        if !self.in_bounds(position) {
            return None;
        }
        Some(&self.tiles[position.row as usize][position.col as usize])
    }

    /// Returns the tile at the given position mutably, or None if out of
    /// bounds.
    pub fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        if !self.in_bounds(position) {
            return None;
        }
        Some(&mut self.tiles[position.row as usize][position.col as usize])
    }

    /// Iterates over all tiles with their positions, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Tile)> {
        self.tiles.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(col, tile)| (Position::new(row as i32, col as i32), tile))
        })
    }

    /// Returns true iff every goal tile in the maze is filled.
    ///
    /// Vacuously true for a maze without goals.
    pub fn all_goals_filled(&self) -> bool {
        !self.iter().any(|(_, tile)| tile.is_unfilled_goal())
    }

    /// Fills the goal at the given position, if there is one.
    pub fn fill_goal(&mut self, position: Position) {
        if let Some(tile) = self.tile_mut(position) {
            tile.fill();
        }
    }

    /// Unfills the goal at the given position, if there is one.
    pub fn unfill_goal(&mut self, position: Position) {
        if let Some(tile) = self.tile_mut(position) {
            tile.unfill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_maze() -> Maze {
        Maze::new(vec![
            vec![Tile::Wall, Tile::Wall, Tile::Wall],
            vec![Tile::Floor, Tile::Floor, Tile::Goal { filled: false }],
            vec![Tile::Floor, Tile::Floor, Tile::Floor],
        ])
        .unwrap()
    }

    #[test]
    fn test_only_walls_block() {
        assert!(Tile::Wall.is_blocking());
        assert!(!Tile::Floor.is_blocking());
        assert!(!Tile::Goal { filled: false }.is_blocking());
        assert!(!Tile::Goal { filled: true }.is_blocking());
    }

    #[test]
    fn test_goal_fill_and_unfill() {
        let mut tile = Tile::Goal { filled: false };
        assert!(tile.is_unfilled_goal());

        tile.fill();
        assert_eq!(tile, Tile::Goal { filled: true });
        assert!(tile.is_goal());
        assert!(!tile.is_unfilled_goal());

        tile.unfill();
        assert_eq!(tile, Tile::Goal { filled: false });
    }

    #[test]
    fn test_fill_ignores_non_goals() {
        let mut floor = Tile::Floor;
        floor.fill();
        assert_eq!(floor, Tile::Floor);

        let mut wall = Tile::Wall;
        wall.unfill();
        assert_eq!(wall, Tile::Wall);
    }

    #[test]
    fn test_maze_bounds() {
        let maze = square_maze();
        assert!(maze.in_bounds(Position::new(0, 0)));
        assert!(maze.in_bounds(Position::new(2, 2)));
        assert!(!maze.in_bounds(Position::new(-1, 0)));
        assert!(!maze.in_bounds(Position::new(0, -1)));
        assert!(!maze.in_bounds(Position::new(3, 0)));
        assert!(!maze.in_bounds(Position::new(0, 3)));
    }

    #[test]
    fn test_tile_lookup_out_of_bounds_is_none() {
        let maze = square_maze();
        assert!(maze.tile(Position::new(5, 5)).is_none());
        assert_eq!(maze.tile(Position::new(0, 0)), Some(&Tile::Wall));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let result = Maze::new(vec![vec![Tile::Floor, Tile::Floor], vec![Tile::Floor]]);
        assert!(matches!(result, Err(SokobanError::MalformedMaze(_))));
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert!(Maze::new(vec![]).is_err());
        assert!(Maze::new(vec![vec![]]).is_err());
    }

    #[test]
    fn test_all_goals_filled() {
        let mut maze = square_maze();
        assert!(!maze.all_goals_filled());

        maze.fill_goal(Position::new(1, 2));
        assert!(maze.all_goals_filled());

        maze.unfill_goal(Position::new(1, 2));
        assert!(!maze.all_goals_filled());
    }

    #[test]
    fn test_goalless_maze_counts_as_filled() {
        let maze = Maze::new(vec![vec![Tile::Floor]]).unwrap();
        assert!(maze.all_goals_filled());
    }
}
