//! # Rendering Module
//!
//! Text rendering of the board and player stats for the console front end.

pub mod display;

pub use display::*;
