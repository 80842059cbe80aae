//! # rust-2048
//!
//! A deterministic engine for the sliding-tile puzzle 2048.
//!
//! ## Design Principles
//!
//! 1. **Value Grid**: Cells hold plain values. There is no per-tile identity,
//!    so every operation is a pure function of the grid plus the seeded RNG.
//!
//! 2. **One Owner**: A single `GameState` owns the board, score and RNG. There
//!    is no global state; front ends pass the game around explicitly.
//!
//! 3. **Headless**: Rendering, animation and input wiring live outside the
//!    crate. They read `Snapshot`s and send `Direction`s or `Command`s.
//!
//! ## Rules
//!
//! - A move slides every row (left/right) or column (up/down) toward one edge.
//! - Equal neighbours merge once per move, starting from the edge the tiles
//!   slide toward: `[2, 2, 2, 0]` left becomes `[4, 2, 0, 0]`.
//! - Each merge adds the new value to the score.
//! - A tile (2 with probability 0.9, else 4) spawns after every move that
//!   changed the grid, and only then.
//! - The game is over when the grid is full and no neighbours are equal.
//!
//! ## Modules
//!
//! - `core`: Directions, commands, errors, configuration, RNG, game state
//! - `board`: Grid storage, merge algorithm, spawning, terminal detection

pub mod board;
pub mod core;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Command, Direction, GameConfig, GameError, GameRng, GameRngState, GameState, Result,
    Snapshot,
};

pub use crate::board::{merge_line, slide_line, Board, MoveOutcome, Tile};
