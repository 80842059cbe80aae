//! Game state and snapshots.
//!
//! ## GameState
//!
//! Owns the board, cumulative score, terminal flag and RNG. It is the only
//! thing a front end mutates, one turn at a time:
//! - `apply_move` slides the board and, only if something changed, adds the
//!   merge score, spawns a tile and re-checks the terminal flag
//! - `reset` starts over with a cleared board and two fresh tiles
//!
//! ## Snapshot
//!
//! Owned copy of grid values, score and terminal flag for rendering.
//! Nothing a renderer does with a snapshot can reach back into the game.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::action::Command;
use super::config::{GameConfig, DEFAULT_INITIAL_TILES};
use super::direction::Direction;
use super::error::Result;
use super::rng::{GameRng, GameRngState};
use crate::board::Board;

/// Immutable view of a game for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    /// Grid values, one `Vec` per row.
    pub grid: Vec<Vec<u32>>,

    /// Cumulative score.
    pub score: u64,

    /// True once no move can change the grid.
    pub is_over: bool,
}

impl Snapshot {
    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// Largest tile (0 if empty).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.grid.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&v| v != 0).count()
    }
}

/// A single game of 2048.
///
/// ## Example
///
/// ```
/// use rust_2048::core::{Direction, GameConfig, GameState};
///
/// let mut game = GameState::new(GameConfig::default(), 42).unwrap();
/// assert_eq!(game.snapshot().tile_count(), 2);
///
/// let changed = game.apply_move(Direction::Left);
/// assert_eq!(changed, game.move_count() == 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    score: u64,
    is_over: bool,
    move_count: u32,
    rng: GameRng,
}

impl GameState {
    /// Create a game and spawn its initial tiles.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`](super::GameError::InvalidConfig)
    /// if the configuration cannot produce a playable grid.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let board = Board::new(config.rows, config.cols)?;

        let mut state = Self {
            config,
            board,
            score: 0,
            is_over: false,
            move_count: 0,
            rng: GameRng::new(seed),
        };
        state.initialize();
        Ok(state)
    }

    /// Create a game from an existing board.
    ///
    /// Score starts at 0, no tiles are spawned and the terminal flag is
    /// computed from the board. The config takes the board's dimensions, and
    /// its initial tile count is capped at the number of cells so that
    /// [`reset`](Self::reset) spawns what the config says.
    #[must_use]
    pub fn with_board(board: Board, seed: u64) -> Self {
        let cell_count = board.cells().len();
        let config = GameConfig::default()
            .with_rows(board.rows())
            .with_cols(board.cols())
            .with_initial_tiles(DEFAULT_INITIAL_TILES.min(cell_count));
        let is_over = board.is_terminal();

        Self {
            config,
            board,
            score: 0,
            is_over,
            move_count: 0,
            rng: GameRng::new(seed),
        }
    }

    /// Clear the board, spawn the initial tiles and zero the score.
    ///
    /// The RNG keeps its position, so consecutive games from one seed differ.
    pub fn initialize(&mut self) {
        self.board.clear();
        self.score = 0;
        self.move_count = 0;

        for _ in 0..self.config.initial_tiles {
            self.board.spawn(&mut self.rng);
        }
        self.is_over = self.board.is_terminal();

        debug!(
            "initialized {}x{} game with {} tiles",
            self.config.rows,
            self.config.cols,
            self.config.initial_tiles
        );
    }

    /// Restart mid-game. Same as [`GameState::initialize`].
    pub fn reset(&mut self) {
        self.initialize();
    }

    /// Play one turn.
    ///
    /// Returns true if the grid changed. A move that changes nothing does not
    /// spawn a tile, and any move after the game is over is ignored.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if self.is_over {
            return false;
        }

        let outcome = self.board.shift(direction);
        if !outcome.changed {
            trace!("move {direction} changed nothing");
            return false;
        }

        self.score += outcome.score_delta;
        self.move_count += 1;
        let spawned = self.board.spawn(&mut self.rng);
        self.is_over = self.board.is_terminal();

        trace!(
            "move {direction}: +{} (score {}), spawned {:?}",
            outcome.score_delta,
            self.score,
            spawned
        );
        if self.is_over {
            info!(
                "game over after {} moves, score {}, max tile {}",
                self.move_count,
                self.score,
                self.board.max_tile()
            );
        }
        true
    }

    /// Apply a player command. `Restart` always reports a change.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::Move(direction) => self.apply_move(direction),
            Command::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Directions that would change the grid.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Direction> {
        if self.is_over {
            return Vec::new();
        }
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.board.can_shift(dir))
            .collect()
    }

    /// Owned copy of the grid, score and terminal flag.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.board.to_rows(),
            score: self.score,
            is_over: self.is_over,
        }
    }

    /// Cumulative score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Whether the game has reached a terminal grid.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Moves that changed the grid since the last reset.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Seed of the spawn RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Current spawn RNG state.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
