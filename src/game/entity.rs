//! # Entity and Player Modeling
//!
//! Movable and interactive occupants of maze cells, plus the player.
//!
//! Entities are small immutable value objects; once created at load time
//! they are only ever moved between cells or removed. The player is not an
//! entity: it lives in a dedicated field of the game state so that stepping
//! onto an entity's cell never produces two occupants at one position.

use crate::Position;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Money granted when the player collects a coin.
pub const COIN_VALUE: u32 = 5;

/// Mapping from occupied cell positions to the entities occupying them.
///
/// A key exists in the map only while an entity currently occupies that
/// cell, and each cell holds at most one entity.
pub type EntityMap = HashMap<Position, Entity>;

/// Serde adapter storing an [`EntityMap`] as a sequence of pairs.
///
/// JSON maps require string keys, so the position-keyed map round-trips
/// through a list of `(position, entity)` entries instead.
pub(crate) mod entity_map_serde {
    use super::{Entity, EntityMap, Position};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(map: &EntityMap, serializer: S) -> Result<S::Ok, S::Error> {
        let pairs: Vec<(&Position, &Entity)> = map.iter().collect();
        pairs.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<EntityMap, D::Error> {
        let pairs: Vec<(Position, Entity)> = Vec::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

/// A movable or interactive occupant of a maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    /// A pushable crate requiring at least `strength` to move.
    Crate { strength: u32 },
    /// A consumable potion granting a stat effect on contact.
    Potion(PotionKind),
    /// A collectable coin worth [`COIN_VALUE`] money.
    Coin,
}

/// The kinds of potion that can appear in a maze or be purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PotionKind {
    /// Grants +2 strength.
    Strength,
    /// Grants +5 moves.
    Move,
    /// Grants +2 strength and +2 moves.
    Fancy,
}

impl PotionKind {
    /// Returns the stat effect this potion applies to the player.
    ///
    /// # Examples
    ///
    /// ```
    /// use fancy_sokoban::PotionKind;
    ///
    /// let effect = PotionKind::Move.effect();
    /// assert_eq!(effect.strength, 0);
    /// assert_eq!(effect.moves, 5);
    /// ```
    pub fn effect(self) -> PotionEffect {
        match self {
            PotionKind::Strength => PotionEffect {
                strength: 2,
                moves: 0,
            },
            PotionKind::Move => PotionEffect {
                strength: 0,
                moves: 5,
            },
            PotionKind::Fancy => PotionEffect {
                strength: 2,
                moves: 2,
            },
        }
    }
}

/// A stat adjustment granted by a potion.
///
/// A field of zero means that stat is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionEffect {
    /// Strength gained.
    pub strength: u32,
    /// Moves gained.
    pub moves: u32,
}

/// The player's stats.
///
/// The player's position is tracked separately by the game state; this
/// struct carries only the mutable stat block.
///
/// # Examples
///
/// ```
/// use fancy_sokoban::{Player, PotionKind};
///
/// let mut player = Player::new(3, 10);
/// player.apply_effect(PotionKind::Strength.effect());
/// assert_eq!(player.strength(), 5);
/// assert_eq!(player.moves_remaining(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    strength: u32,
    moves_remaining: i32,
    money: u32,
}

impl Player {
    /// Creates a player with the given starting stats and no money.
    pub fn new(strength: u32, moves_remaining: i32) -> Self {
        Self {
            strength,
            moves_remaining,
            money: 0,
        }
    }

    /// Returns the player's current strength.
    pub fn strength(&self) -> u32 {
        self.strength
    }

    /// Returns the number of moves the player has remaining.
    pub fn moves_remaining(&self) -> i32 {
        self.moves_remaining
    }

    /// Returns the amount of money the player has collected.
    pub fn money(&self) -> u32 {
        self.money
    }

    /// Applies a potion effect to the player's stats.
    pub fn apply_effect(&mut self, effect: PotionEffect) {
        self.strength += effect.strength;
        self.moves_remaining += effect.moves as i32;
    }

    /// Consumes one move.
    pub fn spend_move(&mut self) {
        self.moves_remaining -= 1;
    }

    /// Adds money to the player's total.
    pub fn add_money(&mut self, amount: u32) {
        self.money += amount;
    }

    /// Debits `cost` from the player's money.
    ///
    /// Returns false and leaves the total untouched if the player cannot
    /// afford it.
    pub fn spend_money(&mut self, cost: u32) -> bool {
        if self.money < cost {
            return false;
        }
        self.money -= cost;
        true
    }
}
