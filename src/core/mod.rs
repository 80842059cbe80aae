//! Core engine types: directions, commands, errors, configuration, RNG, state.
//!
//! Everything here is independent of how the game is drawn or controlled.
//! Front ends hold a `GameState` and read `Snapshot`s back out.

pub mod action;
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;
pub mod state;

pub use action::Command;
pub use config::{GameConfig, DEFAULT_COLS, DEFAULT_INITIAL_TILES, DEFAULT_ROWS};
pub use direction::Direction;
pub use error::{GameError, Result};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Snapshot};
