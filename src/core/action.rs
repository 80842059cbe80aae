//! Player commands and input-key mapping.
//!
//! A `Command` is what the player asks for on a turn: slide the tiles in a
//! direction, or restart. Front ends translate their own input events into
//! key names and call [`Command::from_key`]; anything unrecognised is
//! rejected here so the game state only ever sees valid directions.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::error::{GameError, Result};

/// A player command.
///
/// ## Example
///
/// ```
/// use rust_2048::core::{Command, Direction};
///
/// assert_eq!(Command::from_key("ArrowLeft").unwrap(), Command::Move(Direction::Left));
/// assert_eq!(Command::from_key("w").unwrap(), Command::Move(Direction::Up));
/// assert_eq!(Command::from_key("R").unwrap(), Command::Restart);
/// assert!(Command::from_key("x").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Slide and merge toward a direction.
    Move(Direction),
    /// Start a fresh game.
    Restart,
}

impl Command {
    /// Map a key name to a command.
    ///
    /// Accepts arrow keys (`ArrowUp`, `Up`, ...), WASD in either case and
    /// `r`/`R` for restart. Arrow names are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidArgument`] for any other key.
    pub fn from_key(key: &str) -> Result<Self> {
        let command = match key.to_ascii_lowercase().as_str() {
            "arrowup" | "up" | "w" => Command::Move(Direction::Up),
            "arrowdown" | "down" | "s" => Command::Move(Direction::Down),
            "arrowleft" | "left" | "a" => Command::Move(Direction::Left),
            "arrowright" | "right" | "d" => Command::Move(Direction::Right),
            "r" => Command::Restart,
            _ => {
                return Err(GameError::InvalidArgument(format!(
                    "key '{key}' is not bound to a command"
                )))
            }
        };
        Ok(command)
    }

    /// The direction, if this is a move.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::Move(dir) => Some(dir),
            Command::Restart => None,
        }
    }
}

impl From<Direction> for Command {
    fn from(dir: Direction) -> Self {
        Command::Move(dir)
    }
}
