//! # Maze Module
//!
//! The maze file symbol alphabet and the loader that turns raw character
//! grids into typed game state.
//!
//! Wire symbols are deliberately kept apart from the internal tile and
//! entity enums: the constants below plus the mapping functions are the
//! single bidirectional table between the two, so the file format can
//! change without touching the type model.

pub mod loader;

pub use loader::*;

use crate::{Entity, PotionKind, Tile};

/// Wall tile symbol.
pub const WALL: char = 'W';
/// Floor tile symbol.
pub const FLOOR: char = ' ';
/// Unfilled goal tile symbol.
pub const GOAL: char = 'G';
/// Filled goal tile symbol.
pub const FILLED_GOAL: char = 'X';
/// Player start symbol.
pub const PLAYER: char = 'P';
/// Strength potion symbol.
pub const STRENGTH_POTION: char = 'S';
/// Move potion symbol.
pub const MOVE_POTION: char = 'M';
/// Fancy potion symbol.
pub const FANCY_POTION: char = 'F';
/// Coin symbol.
pub const COIN: char = '$';

/// Maps a maze file symbol to the tile it stands for.
///
/// Symbols that do not name a tile (entities, the player marker, anything
/// unrecognized) map to floor, since an entity always stands on floor.
///
/// # Examples
///
/// ```
/// use fancy_sokoban::{maze, Tile};
///
/// assert_eq!(maze::tile_from_symbol('W'), Tile::Wall);
/// assert_eq!(maze::tile_from_symbol('X'), Tile::Goal { filled: true });
/// assert_eq!(maze::tile_from_symbol('7'), Tile::Floor);
/// ```
pub fn tile_from_symbol(symbol: char) -> Tile {
    match symbol {
        WALL => Tile::Wall,
        GOAL => Tile::Goal { filled: false },
        FILLED_GOAL => Tile::Goal { filled: true },
        _ => Tile::Floor,
    }
}

/// Maps a maze file symbol to the entity it stands for, if any.
///
/// Digits become crates of that strength. The player marker is not an
/// entity and returns None here; the loader handles it separately.
pub fn entity_from_symbol(symbol: char) -> Option<Entity> {
    if let Some(strength) = symbol.to_digit(10) {
        return Some(Entity::Crate { strength });
    }
    match symbol {
        STRENGTH_POTION => Some(Entity::Potion(PotionKind::Strength)),
        MOVE_POTION => Some(Entity::Potion(PotionKind::Move)),
        FANCY_POTION => Some(Entity::Potion(PotionKind::Fancy)),
        COIN => Some(Entity::Coin),
        _ => None,
    }
}

/// Returns the display symbol for a tile.
pub fn tile_symbol(tile: &Tile) -> char {
    match tile {
        Tile::Floor => FLOOR,
        Tile::Wall => WALL,
        Tile::Goal { filled: false } => GOAL,
        Tile::Goal { filled: true } => FILLED_GOAL,
    }
}

/// Returns the display symbol for an entity.
///
/// Crates display as their strength digit, matching the file format.
pub fn entity_symbol(entity: &Entity) -> char {
    match entity {
        Entity::Crate { strength } => {
            char::from_digit((*strength).min(9), 10).unwrap_or('9')
        }
        Entity::Potion(PotionKind::Strength) => STRENGTH_POTION,
        Entity::Potion(PotionKind::Move) => MOVE_POTION,
        Entity::Potion(PotionKind::Fancy) => FANCY_POTION,
        Entity::Coin => COIN,
    }
}
