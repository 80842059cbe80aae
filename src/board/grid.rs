//! The board: a row-major grid of tile values.
//!
//! Positions hold values, not tile objects. `0` is an empty cell; anything
//! else is a power of two >= 2. The grid only changes through [`Board::shift`]
//! and [`Board::spawn`], so the invariant holds for every board built with
//! [`Board::new`] or [`Board::from_rows`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::line::{can_merge, slide_line, LineBuf};
use crate::core::{Direction, GameError, GameRng, Result};

/// Probability that a spawned tile is a 2 (otherwise it is a 4).
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// A tile placed by [`Board::spawn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
    /// Tile value (2 or 4).
    pub value: u32,
}

/// Result of sliding the board in one direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether any cell changed.
    pub changed: bool,
    /// Sum of the values created by merges.
    pub score_delta: u64,
}

/// Grid of tile values, `rows` x `cols`, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] if either dimension is zero or
    /// the grid is too large to allocate.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidConfig(format!(
                "grid dimensions must be positive, got {rows}x{cols}"
            )));
        }
        let too_large =
            || GameError::InvalidConfig(format!("a {rows}x{cols} grid is too large"));
        let len = rows.checked_mul(cols).ok_or_else(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, 0);

        Ok(Self { rows, cols, cells })
    }

    /// Build a board from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidArgument`] if the input is empty, ragged,
    /// or holds a value that is neither 0 nor a power of two >= 2.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.is_empty() || cols == 0 {
            return Err(GameError::InvalidArgument(
                "grid must have at least one row and one column".into(),
            ));
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GameError::InvalidArgument(format!(
                    "row {r} has {} cells, expected {cols}",
                    row.len()
                )));
            }
            for (c, &value) in row.iter().enumerate() {
                if !is_valid_cell(value) {
                    return Err(GameError::InvalidArgument(format!(
                        "cell ({r}, {c}) holds {value}, expected 0 or a power of two >= 2"
                    )));
                }
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Row-major cell values.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Copy the grid out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.cols).map(<[u32]>::to_vec).collect()
    }

    /// Coordinates of every empty cell, in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| (i / self.cols, i % self.cols))
            .collect()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Largest tile on the board (0 if empty).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    // === Moves ===

    /// Slide and merge every line toward `direction`.
    ///
    /// Rows are processed for left/right and columns for up/down, each read
    /// from the end the tiles slide toward. A line that is already
    /// compressed with no equal neighbours is left untouched.
    pub fn shift(&mut self, direction: Direction) -> MoveOutcome {
        let mut outcome = MoveOutcome::default();

        for line in 0..self.line_count(direction) {
            let original = self.line(direction, line);
            let (slid, delta) = slide_line(&original);

            if slid != original {
                outcome.changed = true;
                for (pos, &value) in slid.iter().enumerate() {
                    let idx = self.line_index(direction, line, pos);
                    self.cells[idx] = value;
                }
            }
            outcome.score_delta += delta;
        }

        outcome
    }

    /// Whether [`Board::shift`] would change anything, without mutating.
    #[must_use]
    pub fn can_shift(&self, direction: Direction) -> bool {
        (0..self.line_count(direction)).any(|line| {
            let original = self.line(direction, line);
            slide_line(&original).0 != original
        })
    }

    fn line_count(&self, direction: Direction) -> usize {
        if direction.is_horizontal() {
            self.rows
        } else {
            self.cols
        }
    }

    fn line_len(&self, direction: Direction) -> usize {
        if direction.is_horizontal() {
            self.cols
        } else {
            self.rows
        }
    }

    /// Flat index of position `pos` along `line`, counted from the leading end.
    fn line_index(&self, direction: Direction, line: usize, pos: usize) -> usize {
        let len = self.line_len(direction);
        let offset = if direction.is_reversed() {
            len - 1 - pos
        } else {
            pos
        };
        if direction.is_horizontal() {
            line * self.cols + offset
        } else {
            offset * self.cols + line
        }
    }

    /// Values of `line` ordered from the leading end.
    fn line(&self, direction: Direction, line: usize) -> LineBuf {
        (0..self.line_len(direction))
            .map(|pos| self.cells[self.line_index(direction, line, pos)])
            .collect()
    }

    // === Spawning ===

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns `None` and leaves the board untouched when it is full.
    pub fn spawn(&mut self, rng: &mut GameRng) -> Option<Tile> {
        let empties = self.empty_cells();
        let &(row, col) = rng.choose(&empties)?;
        let value = if rng.gen_bool(SPAWN_TWO_PROBABILITY) { 2 } else { 4 };

        self.cells[row * self.cols + col] = value;
        Some(Tile { row, col, value })
    }

    // === Terminal detection ===

    /// True when the board is full and no two orthogonal neighbours are equal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        if self.cells.contains(&0) {
            return false;
        }

        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = row * self.cols + col;
                let value = self.cells[idx];
                if col + 1 < self.cols && can_merge(value, self.cells[idx + 1]) {
                    return false;
                }
                if row + 1 < self.rows && can_merge(value, self.cells[idx + self.cols]) {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for (c, &value) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                if value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{value:>5}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn is_valid_cell(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}
