//! Property tests for move atomicity and undo reversibility.

use fancy_sokoban::{parse_maze, Direction, GameState};
use proptest::prelude::*;

/// A small board exercising every interaction: crates, goals, a potion,
/// a coin, walls and open edges.
const FIXTURE: &str = "3 99\nW G \n P2 \n $S \n 2G \n";

fn fixture() -> GameState {
    GameState::new(parse_maze(FIXTURE).unwrap()).unwrap()
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

/// The observable pieces of state a caller can query; undo restores these,
/// not the undo history itself.
fn observable(state: &GameState) -> (String, String, String) {
    (
        format!("{:?}", state.get_maze()),
        {
            let mut entities: Vec<_> = state
                .get_entities()
                .iter()
                .map(|(position, entity)| format!("{position:?}:{entity:?}"))
                .collect();
            entities.sort();
            entities.join(",")
        },
        format!(
            "{:?}/{}/{}/{}",
            state.get_player_position(),
            state.get_player_strength(),
            state.get_player_moves_remaining(),
            state.get_player_money()
        ),
    )
}

proptest! {
    /// A rejected move leaves the full state untouched.
    #[test]
    fn rejected_moves_change_nothing(moves in prop::collection::vec(direction(), 1..60)) {
        let mut state = fixture();
        for direction in moves {
            let before = state.clone();
            if !state.attempt_move(direction) {
                prop_assert_eq!(&state, &before);
            }
        }
    }

    /// Every successful move is exactly reversed by an immediate undo.
    #[test]
    fn undo_reverses_every_successful_move(moves in prop::collection::vec(direction(), 1..60)) {
        let mut state = fixture();
        for direction in moves {
            let before = observable(&state);
            if state.attempt_move(direction) {
                let mut undone = state.clone();
                undone.undo();
                prop_assert_eq!(observable(&undone), before);
            }
        }
    }

    /// Moves remaining only ever drops by exactly one per successful step
    /// on a potion-free board.
    #[test]
    fn moves_decrease_one_per_step(moves in prop::collection::vec(direction(), 1..60)) {
        let mut state = GameState::new(
            parse_maze("3 99\nW G \n P2 \n    \n 2G \n").unwrap()
        ).unwrap();
        for direction in moves {
            let before = state.get_player_moves_remaining();
            if state.attempt_move(direction) {
                prop_assert_eq!(state.get_player_moves_remaining(), before - 1);
            } else {
                prop_assert_eq!(state.get_player_moves_remaining(), before);
            }
        }
    }

    /// The player can never end up inside a wall or off the board, and no
    /// cell ever holds more than one entity (map semantics guarantee the
    /// latter; this guards the player overlap rule).
    #[test]
    fn player_never_shares_a_cell(moves in prop::collection::vec(direction(), 1..60)) {
        let mut state = fixture();
        for direction in moves {
            state.attempt_move(direction);
            let position = state.get_player_position();
            let tile = state.get_maze().tile(position);
            prop_assert!(tile.is_some());
            prop_assert!(!tile.unwrap().is_blocking());
            prop_assert!(!state.get_entities().contains_key(&position));
        }
    }
}
