//! Python bindings for the rust-2048 engine.
//!
//! Lets Python front ends and agents drive a game without touching the grid.
//!
//! # Quick Start
//!
//! ```python
//! import rust_2048
//!
//! game = rust_2048.Game(rows=4, cols=4, seed=42)
//! game.apply_move("left")
//! snap = game.snapshot()
//! print(snap.grid, snap.score, snap.is_over)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::GameError;

mod py_game;

pub use py_game::*;

/// Map engine errors onto `ValueError`.
pub(crate) fn to_py_err(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// rust-2048: a headless 2048 engine.
///
/// This module provides:
/// - `Game`: a single game with move/reset/snapshot
/// - `Snapshot`: an immutable view of grid, score and terminal flag
#[pymodule]
fn rust_2048(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_class::<PySnapshot>()?;
    Ok(())
}
