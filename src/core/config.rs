//! Game configuration.
//!
//! Callers configure the grid at startup through `GameConfig`. A bad
//! configuration is rejected once, at construction, and never re-checked.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Default number of grid rows.
pub const DEFAULT_ROWS: usize = 4;

/// Default number of grid columns.
pub const DEFAULT_COLS: usize = 4;

/// Tiles placed on an empty grid at game start.
pub const DEFAULT_INITIAL_TILES: usize = 2;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows (must be positive).
    pub rows: usize,

    /// Number of columns (must be positive).
    pub cols: usize,

    /// Tiles spawned by `initialize`/`reset`.
    pub initial_tiles: usize,
}

impl GameConfig {
    /// Create a configuration with the given dimensions.
    ///
    /// Dimensions are checked by [`GameConfig::validate`], not here, so a
    /// config can be built up with `with_*` methods before it is used.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            initial_tiles: DEFAULT_INITIAL_TILES,
        }
    }

    /// Set the number of rows.
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the number of columns.
    #[must_use]
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Set the number of tiles spawned at game start.
    #[must_use]
    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        self.initial_tiles = count;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Check that this configuration describes a playable grid.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] if either dimension is zero, the
    /// cell count overflows, or the grid cannot hold the initial tiles.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidConfig(format!(
                "grid dimensions must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(GameError::InvalidConfig(format!(
                "a {}x{} grid has too many cells",
                self.rows, self.cols
            )));
        }
        if self.initial_tiles > self.cell_count() {
            return Err(GameError::InvalidConfig(format!(
                "{} initial tiles do not fit on a {}x{} grid",
                self.initial_tiles, self.rows, self.cols
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
