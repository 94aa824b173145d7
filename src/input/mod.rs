//! # Input Module
//!
//! Line-oriented command parsing for the console front end.

use crate::Direction;

/// A parsed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Move one cell in a direction
    Move(Direction),
    /// Undo the last successful action
    Undo,
    /// Restart from the load-time state
    Reset,
    /// Buy the shop item with the given symbol
    Purchase(char),
    /// Show help
    Help,
    /// Quit the game
    Quit,
}

/// Parser turning console input lines into player commands.
///
/// Movement uses the classic `w`/`a`/`s`/`d` letters; `u` undoes, `r`
/// resets, `q` quits, `h` or `?` prints help, and `b` followed by a shop
/// symbol (for example `bS`) buys a potion when the shop is enabled.
pub struct InputHandler {
    /// Whether `b<symbol>` purchase commands are accepted
    pub shop_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates an input handler with the shop enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use fancy_sokoban::{Direction, InputHandler, PlayerInput};
    ///
    /// let handler = InputHandler::new();
    /// assert_eq!(
    ///     handler.parse("w"),
    ///     Some(PlayerInput::Move(Direction::Up))
    /// );
    /// assert_eq!(handler.parse("x"), None);
    /// ```
    pub fn new() -> Self {
        Self { shop_enabled: true }
    }

    /// Parses one input line into a command.
    ///
    /// Returns None for anything unrecognized; the caller reports a
    /// generic invalid-move message and re-prompts.
    pub fn parse(&self, line: &str) -> Option<PlayerInput> {
        let trimmed = line.trim();
        match trimmed {
            "w" => return Some(PlayerInput::Move(Direction::Up)),
            "s" => return Some(PlayerInput::Move(Direction::Down)),
            "a" => return Some(PlayerInput::Move(Direction::Left)),
            "d" => return Some(PlayerInput::Move(Direction::Right)),
            "u" => return Some(PlayerInput::Undo),
            "r" => return Some(PlayerInput::Reset),
            "q" => return Some(PlayerInput::Quit),
            "h" | "?" => return Some(PlayerInput::Help),
            _ => {}
        }

        if self.shop_enabled {
            let mut chars = trimmed.chars();
            if chars.next() == Some('b') {
                if let (Some(symbol), None) = (chars.next(), chars.next()) {
                    return Some(PlayerInput::Purchase(symbol));
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_letters() {
        let handler = InputHandler::new();
        assert_eq!(handler.parse("w"), Some(PlayerInput::Move(Direction::Up)));
        assert_eq!(handler.parse("s"), Some(PlayerInput::Move(Direction::Down)));
        assert_eq!(handler.parse("a"), Some(PlayerInput::Move(Direction::Left)));
        assert_eq!(
            handler.parse("d"),
            Some(PlayerInput::Move(Direction::Right))
        );
    }

    #[test]
    fn test_control_commands() {
        let handler = InputHandler::new();
        assert_eq!(handler.parse("u"), Some(PlayerInput::Undo));
        assert_eq!(handler.parse("r"), Some(PlayerInput::Reset));
        assert_eq!(handler.parse("q"), Some(PlayerInput::Quit));
        assert_eq!(handler.parse("h"), Some(PlayerInput::Help));
        assert_eq!(handler.parse("?"), Some(PlayerInput::Help));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.parse("  d\n"),
            Some(PlayerInput::Move(Direction::Right))
        );
    }

    #[test]
    fn test_purchase_command() {
        let handler = InputHandler::new();
        assert_eq!(handler.parse("bS"), Some(PlayerInput::Purchase('S')));
        assert_eq!(handler.parse("bF"), Some(PlayerInput::Purchase('F')));
        // Bare 'b' and overlong forms are not commands.
        assert_eq!(handler.parse("b"), None);
        assert_eq!(handler.parse("bSS"), None);
    }

    #[test]
    fn test_purchase_disabled_without_shop() {
        let handler = InputHandler {
            shop_enabled: false,
        };
        assert_eq!(handler.parse("bS"), None);
        assert_eq!(handler.parse("w"), Some(PlayerInput::Move(Direction::Up)));
    }

    #[test]
    fn test_unknown_input_is_none() {
        let handler = InputHandler::new();
        assert_eq!(handler.parse(""), None);
        assert_eq!(handler.parse("up"), None);
        assert_eq!(handler.parse("W"), None);
    }
}
