//! Game bindings for Python.

use numpy::PyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Command, Direction, GameConfig, GameState, Snapshot};

use super::to_py_err;

/// Python wrapper for Snapshot.
#[pyclass(name = "Snapshot")]
#[derive(Clone, Debug)]
pub struct PySnapshot(pub Snapshot);

#[pymethods]
impl PySnapshot {
    /// Grid values as a list of rows.
    #[getter]
    fn grid(&self) -> Vec<Vec<u32>> {
        self.0.grid.clone()
    }

    /// Cumulative score.
    #[getter]
    fn score(&self) -> u64 {
        self.0.score
    }

    /// True once no move can change the grid.
    #[getter]
    fn is_over(&self) -> bool {
        self.0.is_over
    }

    /// Largest tile on the grid.
    fn max_tile(&self) -> u32 {
        self.0.max_tile()
    }

    fn __repr__(&self) -> String {
        format!(
            "Snapshot(score={}, max_tile={}, is_over={})",
            self.0.score,
            self.0.max_tile(),
            self.0.is_over
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for GameState.
#[pyclass(name = "Game")]
pub struct PyGame {
    state: GameState,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - rows: Number of grid rows
    /// - cols: Number of grid columns
    /// - seed: RNG seed for deterministic spawns
    #[new]
    #[pyo3(signature = (rows = 4, cols = 4, seed = 42))]
    fn new(rows: usize, cols: usize, seed: u64) -> PyResult<Self> {
        let state = GameState::new(GameConfig::new(rows, cols), seed).map_err(to_py_err)?;
        Ok(Self { state })
    }

    /// Slide toward "up", "down", "left" or "right".
    ///
    /// Returns True if the grid changed. Raises ValueError for any other name.
    fn apply_move(&mut self, direction: &str) -> PyResult<bool> {
        let direction: Direction = direction.parse().map_err(to_py_err)?;
        Ok(self.state.apply_move(direction))
    }

    /// Apply a key press (arrow names, WASD, or "r" to restart).
    fn press_key(&mut self, key: &str) -> PyResult<bool> {
        let command = Command::from_key(key).map_err(to_py_err)?;
        Ok(self.state.apply_command(command))
    }

    /// Start over with a fresh grid.
    fn reset(&mut self) {
        self.state.reset();
    }

    /// Names of the directions that would change the grid.
    fn legal_moves(&self) -> Vec<&'static str> {
        self.state
            .legal_moves()
            .into_iter()
            .map(Direction::as_str)
            .collect()
    }

    /// Immutable view of the current game.
    fn snapshot(&self) -> PySnapshot {
        PySnapshot(self.state.snapshot())
    }

    /// Grid values as a 2-D numpy array.
    fn grid<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u32>>> {
        PyArray2::from_vec2_bound(py, &self.state.board().to_rows())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Cumulative score.
    #[getter]
    fn score(&self) -> u64 {
        self.state.score()
    }

    /// True once no move can change the grid.
    #[getter]
    fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Moves that changed the grid since the last reset.
    #[getter]
    fn move_count(&self) -> u32 {
        self.state.move_count()
    }

    /// Copy the game, RNG position included.
    fn copy(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let status = if self.state.is_over() { "over" } else { "ongoing" };
        format!(
            "Game({}x{}, score={}, status={})",
            self.state.board().rows(),
            self.state.board().cols(),
            self.state.score(),
            status
        )
    }
}
