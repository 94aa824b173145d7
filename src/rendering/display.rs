//! # Display Management
//!
//! Pure-string rendering of the game state.
//!
//! The display never touches stdout itself; it produces strings for the
//! caller to print, which keeps rendering trivially testable and lets
//! embedders route output wherever they like.

use crate::{maze, GameState, Position};

/// Text renderer for the game board and stats line.
pub struct TextDisplay;

impl Default for TextDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDisplay {
    /// Creates a new text display.
    pub fn new() -> Self {
        Self
    }

    /// Renders the board: tiles, entities on top of them, and the player
    /// on top of everything.
    ///
    /// # Examples
    ///
    /// ```
    /// use fancy_sokoban::{parse_maze, GameState, TextDisplay};
    ///
    /// let state = GameState::new(parse_maze("3 10\nW1\nPG\n").unwrap()).unwrap();
    /// let board = TextDisplay::new().render_board(&state);
    /// assert_eq!(board, "W1\nPG\n");
    /// ```
    pub fn render_board(&self, state: &GameState) -> String {
        let (rows, cols) = state.get_dimensions();
        let mut out = String::with_capacity(rows * (cols + 1));

        for row in 0..rows {
            for col in 0..cols {
                let position = Position::new(row as i32, col as i32);
                let symbol = if position == state.get_player_position() {
                    maze::PLAYER
                } else if let Some(entity) = state.get_entities().get(&position) {
                    maze::entity_symbol(entity)
                } else if let Some(tile) = state.get_maze().tile(position) {
                    maze::tile_symbol(tile)
                } else {
                    maze::FLOOR
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }

    /// Renders the one-line stats summary.
    pub fn render_stats(&self, state: &GameState) -> String {
        format!(
            "Moves remaining: {}, strength: {}, money: {}",
            state.get_player_moves_remaining(),
            state.get_player_strength(),
            state.get_player_money(),
        )
    }

    /// Renders the shop stock as one line per item.
    pub fn render_shop(&self, state: &GameState) -> String {
        let mut out = String::from("Shop:\n");
        for (symbol, cost) in state.get_shop_items() {
            out.push_str(&format!("  b{symbol} - potion for {cost} money\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_maze, Direction};

    fn state_from(text: &str) -> GameState {
        GameState::new(parse_maze(text).unwrap()).unwrap()
    }

    #[test]
    fn test_board_shows_tiles_entities_and_player() {
        let state = state_from("3 10\nWGX\n2P \nSMF\n");
        let board = TextDisplay::new().render_board(&state);
        assert_eq!(board, "WGX\n2P \nSMF\n");
    }

    #[test]
    fn test_player_draws_over_goal() {
        let mut state = state_from("3 10\nPG \n   \n");
        assert!(state.attempt_move(Direction::Right));
        let board = TextDisplay::new().render_board(&state);
        // The goal under the player is hidden while occupied.
        assert_eq!(board, " P \n   \n");
    }

    #[test]
    fn test_filled_goal_renders_as_x() {
        let mut state = state_from("2 10\nP2G\n   \n");
        assert!(state.attempt_move(Direction::Right));
        let board = TextDisplay::new().render_board(&state);
        assert_eq!(board, " PX\n   \n");
    }

    #[test]
    fn test_stats_line() {
        let state = state_from("3 10\nP \n  \n");
        let stats = TextDisplay::new().render_stats(&state);
        assert_eq!(stats, "Moves remaining: 10, strength: 3, money: 0");
    }

    #[test]
    fn test_shop_listing_mentions_every_item() {
        let state = state_from("3 10\nP \n  \n");
        let shop = TextDisplay::new().render_shop(&state);
        assert!(shop.contains("bS"));
        assert!(shop.contains("bM"));
        assert!(shop.contains("bF"));
        assert!(shop.contains("10"));
    }
}
