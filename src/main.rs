//! # Fancy Sokoban Main Entry Point
//!
//! Initializes logging, loads the maze file, and runs the blocking console
//! game loop.

use clap::Parser;
use fancy_sokoban::{
    GameState, InputHandler, PlayerInput, SokobanResult, TextDisplay,
};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Command line arguments for Fancy Sokoban.
#[derive(Parser, Debug)]
#[command(name = "fancy-sokoban")]
#[command(about = "A crate-pushing puzzle with potions, coins and undo")]
#[command(version)]
struct Args {
    /// Path to the maze file to play
    #[arg(default_value = "mazes/basic.txt")]
    maze_file: PathBuf,

    /// Disable the potion shop
    #[arg(long)]
    no_shop: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    if let Err(error) = run_game(&args) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Runs the console game loop until the game ends or the player quits.
fn run_game(args: &Args) -> SokobanResult<()> {
    info!("Starting Fancy Sokoban v{}", fancy_sokoban::VERSION);

    let mut state = GameState::load(&args.maze_file)?;
    let display = TextDisplay::new();
    let input = InputHandler {
        shop_enabled: !args.no_shop,
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", display.render_board(&state));
        println!("{}\n", display.render_stats(&state));
        print!("Enter move: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };

        match input.parse(&line?) {
            Some(PlayerInput::Quit) => break,
            Some(PlayerInput::Undo) => state.undo(),
            Some(PlayerInput::Reset) => state.reset(),
            Some(PlayerInput::Help) => {
                print_help(&display, &state, input.shop_enabled);
            }
            Some(PlayerInput::Purchase(symbol)) => {
                if !state.attempt_purchase(symbol) {
                    println!("Cannot purchase that\n");
                }
            }
            Some(PlayerInput::Move(direction)) => {
                if state.attempt_move(direction) {
                    if state.has_won() || state.has_lost() {
                        break;
                    }
                } else {
                    println!("Invalid move\n");
                }
            }
            None => println!("Invalid move\n"),
        }
    }

    show_result(&display, &state);
    Ok(())
}

/// Prints the command reference and, when enabled, the shop stock.
fn print_help(display: &TextDisplay, state: &GameState, shop_enabled: bool) {
    println!("Commands: w/a/s/d move, u undo, r reset, q quit");
    if shop_enabled {
        println!("{}", display.render_shop(state));
    }
}

/// Prints the final board and the game's outcome.
fn show_result(display: &TextDisplay, state: &GameState) {
    if state.has_won() {
        println!("{}", display.render_board(state));
        println!("You won!");
    } else if state.has_lost() {
        println!("You lost!");
    }
}
