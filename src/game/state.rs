//! # Game State Module
//!
//! Central game state management and the movement/interaction resolver.
//!
//! This module contains the main [`GameState`] struct that owns the maze,
//! the entity map and the player, and exposes the engine's public
//! operations: attempting moves, undoing them, resetting, purchasing shop
//! items and evaluating win/loss. Every operation either applies fully or
//! rejects with the state byte-for-byte unchanged.

use crate::{
    maze, Direction, Entity, EntityMap, Maze, Player, Position, PotionKind, RawMaze,
    SokobanResult, COIN_VALUE,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The shop's stock: potion symbol and cost, in display order.
pub const SHOP_ITEMS: [(char, u32); 3] = [
    (maze::STRENGTH_POTION, 5),
    (maze::MOVE_POTION, 5),
    (maze::FANCY_POTION, 10),
];

/// A captured copy of the mutable state needed to reverse one action.
///
/// Entities are immutable-after-creation value objects, so copying the map
/// copies everything there is to know about them. Goal fill flags live in
/// the maze rather than the entity map, so the one goal an action can fill
/// is recorded separately and unfilled again on undo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(with = "crate::game::entity::entity_map_serde")]
    entities: EntityMap,
    player: Player,
    player_position: Position,
    /// Goal filled by the action this snapshot precedes, if any.
    filled_goal: Option<Position>,
}

/// Central game state for one puzzle session.
///
/// Constructed from a parsed maze file, then driven exclusively through
/// [`attempt_move`](GameState::attempt_move),
/// [`undo`](GameState::undo),
/// [`attempt_purchase`](GameState::attempt_purchase) and
/// [`reset`](GameState::reset). Read-only queries expose everything a
/// presentation layer needs for rendering.
///
/// # Examples
///
/// ```
/// use fancy_sokoban::{parse_maze, Direction, GameState};
///
/// let raw = parse_maze("3 10\nW W\n P \nG  \n").unwrap();
/// let mut state = GameState::new(raw).unwrap();
///
/// assert_eq!(state.get_player_strength(), 3);
/// assert!(state.attempt_move(Direction::Down));
/// assert_eq!(state.get_player_moves_remaining(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    maze: Maze,
    #[serde(with = "crate::game::entity::entity_map_serde")]
    entities: EntityMap,
    player: Player,
    player_position: Position,
    /// State before the last successful action, for single-step undo.
    last_state: Snapshot,
    /// Load-time state, for reset. The maze is kept separately because
    /// snapshots track goal fills as a single position, which cannot
    /// reverse an arbitrary number of them.
    initial: Snapshot,
    initial_maze: Maze,
}

impl GameState {
    /// Builds a game state from a parsed maze file.
    ///
    /// Fails if the character grid cannot be converted (ragged rows,
    /// missing player, and so on); no partial state is produced.
    pub fn new(raw: RawMaze) -> SokobanResult<Self> {
        let converted = maze::convert_maze(&raw.rows)?;
        let player = Player::new(raw.player_strength, raw.player_moves);
        let initial = Snapshot {
            entities: converted.entities.clone(),
            player,
            player_position: converted.player_start,
            filled_goal: None,
        };
        Ok(Self {
            maze: converted.maze.clone(),
            entities: converted.entities,
            player,
            player_position: converted.player_start,
            last_state: initial.clone(),
            initial,
            initial_maze: converted.maze,
        })
    }

    /// Reads and parses a maze file, then builds a game state from it.
    pub fn load<P: AsRef<Path>>(path: P) -> SokobanResult<Self> {
        Self::new(maze::read_maze_file(path)?)
    }

    /// Returns the maze.
    pub fn get_maze(&self) -> &Maze {
        &self.maze
    }

    /// Returns the maze dimensions as (rows, columns).
    pub fn get_dimensions(&self) -> (usize, usize) {
        self.maze.dimensions()
    }

    /// Returns the entities currently occupying maze cells.
    pub fn get_entities(&self) -> &EntityMap {
        &self.entities
    }

    /// Returns the player's current position.
    pub fn get_player_position(&self) -> Position {
        self.player_position
    }

    /// Returns the player's current strength.
    pub fn get_player_strength(&self) -> u32 {
        self.player.strength()
    }

    /// Returns the number of moves the player has remaining.
    pub fn get_player_moves_remaining(&self) -> i32 {
        self.player.moves_remaining()
    }

    /// Returns the amount of money the player has collected.
    pub fn get_player_money(&self) -> u32 {
        self.player.money()
    }

    /// Attempts to move the player one cell in the given direction.
    ///
    /// Returns true iff the move applied. On rejection the maze, entities
    /// and player are left exactly as they were; callers may simply
    /// re-prompt.
    ///
    /// A successful move into a crate pushes it: onto open floor the crate
    /// relocates, onto an unfilled goal it is consumed and the goal fills,
    /// onto a potion the potion is consumed (its effect applying to the
    /// player) and the crate relocates. Potions and coins on the target
    /// cell are collected as the player steps in. Every successful move
    /// costs one move.
    pub fn attempt_move(&mut self, direction: Direction) -> bool {
        let target = self.player_position.step(direction);
        let Some(&tile) = self.maze.tile(target) else {
            return false;
        };
        if tile.is_blocking() {
            return false;
        }

        let snapshot = self.snapshot();
        let mut filled_goal = None;

        match self.entities.get(&target).copied() {
            Some(Entity::Crate { strength }) => {
                if strength > self.player.strength() {
                    debug!(
                        "push rejected: crate strength {} exceeds player strength {}",
                        strength,
                        self.player.strength()
                    );
                    return false;
                }
                let beyond = target.step(direction);
                let Some(&beyond_tile) = self.maze.tile(beyond) else {
                    return false;
                };
                if beyond_tile.is_blocking() {
                    return false;
                }
                match self.entities.get(&beyond).copied() {
                    Some(Entity::Potion(kind)) => {
                        // Crushing a potion applies it before the crate
                        // lands in its cell.
                        self.player.apply_effect(kind.effect());
                        self.entities.remove(&beyond);
                        self.entities.remove(&target);
                        self.entities.insert(beyond, Entity::Crate { strength });
                    }
                    Some(_) => return false,
                    None => {
                        self.entities.remove(&target);
                        if beyond_tile.is_unfilled_goal() {
                            // The crate is consumed into the goal.
                            self.maze.fill_goal(beyond);
                            filled_goal = Some(beyond);
                        } else {
                            self.entities.insert(beyond, Entity::Crate { strength });
                        }
                    }
                }
                debug!("pushed crate from {:?} towards {:?}", target, beyond);
            }
            Some(Entity::Potion(kind)) => {
                self.player.apply_effect(kind.effect());
                self.entities.remove(&target);
                debug!("collected {:?} potion at {:?}", kind, target);
            }
            Some(Entity::Coin) => {
                self.player.add_money(COIN_VALUE);
                self.entities.remove(&target);
                debug!("collected coin at {:?}", target);
            }
            None => {}
        }

        self.player_position = target;
        self.player.spend_move();
        self.last_state = Snapshot {
            filled_goal,
            ..snapshot
        };
        if self.has_won() {
            info!("all goals filled");
        }
        true
    }

    /// Restores the state captured before the last successful action.
    ///
    /// Only one level of history is kept. With no prior action this is a
    /// no-op (the load-time snapshot matches the current state), and
    /// repeated undo is idempotent.
    pub fn undo(&mut self) {
        let Snapshot {
            entities,
            player,
            player_position,
            filled_goal,
        } = self.last_state.clone();
        self.entities = entities;
        self.player = player;
        self.player_position = player_position;
        if let Some(position) = filled_goal {
            self.maze.unfill_goal(position);
        }
    }

    /// Restores the complete load-time state, pre-filled goals included.
    pub fn reset(&mut self) {
        self.maze = self.initial_maze.clone();
        self.entities = self.initial.entities.clone();
        self.player = self.initial.player;
        self.player_position = self.initial.player_position;
        self.last_state = self.initial.clone();
    }

    /// Returns true iff every goal tile is filled.
    pub fn has_won(&self) -> bool {
        self.maze.all_goals_filled()
    }

    /// Returns true iff the player is out of moves without having won.
    pub fn has_lost(&self) -> bool {
        !self.has_won() && self.player.moves_remaining() <= 0
    }

    /// Returns the shop's stock as (potion symbol, cost) pairs.
    pub fn get_shop_items(&self) -> &'static [(char, u32)] {
        &SHOP_ITEMS
    }

    /// Attempts to buy the potion with the given symbol.
    ///
    /// On success the cost is debited and the potion's effect applies at
    /// the player's cell immediately; like a move, the purchase commits a
    /// snapshot so it can be undone. Returns false on an unknown symbol or
    /// insufficient money, with no state change.
    pub fn attempt_purchase(&mut self, item: char) -> bool {
        let Some(kind) = purchasable_potion(item) else {
            return false;
        };
        let Some(&(_, cost)) = SHOP_ITEMS.iter().find(|&&(symbol, _)| symbol == item) else {
            return false;
        };
        let snapshot = self.snapshot();
        if !self.player.spend_money(cost) {
            return false;
        }
        self.player.apply_effect(kind.effect());
        self.last_state = snapshot;
        debug!("purchased {:?} potion for {}", kind, cost);
        true
    }

    /// Serializes the state to a JSON string.
    pub fn to_json(&self) -> SokobanResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuilds a state from a JSON string produced by
    /// [`to_json`](GameState::to_json).
    pub fn from_json(json: &str) -> SokobanResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Captures the current state with no goal fill recorded.
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            entities: self.entities.clone(),
            player: self.player,
            player_position: self.player_position,
            filled_goal: None,
        }
    }
}

/// Maps a shop symbol to the potion kind it sells.
fn purchasable_potion(symbol: char) -> Option<PotionKind> {
    match symbol {
        maze::STRENGTH_POTION => Some(PotionKind::Strength),
        maze::MOVE_POTION => Some(PotionKind::Move),
        maze::FANCY_POTION => Some(PotionKind::Fancy),
        _ => None,
    }
}
