//! # Fancy Sokoban
//!
//! A turn-based crate-pushing puzzle engine with potions, coins and
//! single-step undo.
//!
//! ## Architecture Overview
//!
//! The crate is split into a pure state-transition core and a thin console
//! presentation layer:
//!
//! - **Game State**: Centralized, value-semantic state for the maze,
//!   entities and player, mutated only through atomic operations
//! - **Maze Loading**: Text maze parsing and symbol-to-type conversion
//! - **Input System**: Line-oriented command parsing for the console loop
//! - **Rendering System**: Pure-string rendering of the board and stats
//!
//! Every public engine operation either applies fully or rejects with no
//! state change, so the core can back either a blocking console loop or an
//! event-driven front end.

pub mod game;
pub mod input;
pub mod maze;
pub mod rendering;

// Core module re-exports
pub use game::*;
pub use input::*;
pub use maze::*;
pub use rendering::*;

// Explicit re-exports for commonly used types
pub use game::{
    // From mod
    Direction,
    Position,
    // From entity
    Entity,
    EntityMap,
    Player,
    PotionEffect,
    PotionKind,
    // From state
    GameState,
    Snapshot,
    // From tile
    Maze,
    Tile,
};

pub use input::{InputHandler, PlayerInput};
pub use maze::{convert_maze, parse_maze, read_maze_file, RawMaze};
pub use rendering::TextDisplay;

/// Core error type for the Fancy Sokoban engine.
#[derive(thiserror::Error, Debug)]
pub enum SokobanError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The maze file is structurally invalid
    #[error("Malformed maze: {0}")]
    MalformedMaze(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Fancy Sokoban codebase.
pub type SokobanResult<T> = Result<T, SokobanError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
