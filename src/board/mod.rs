//! Board: grid storage, the move/merge algorithm, spawning and terminal detection.
//!
//! - `line`: single-line merge pass shared by all four directions
//! - `grid`: the `Board` itself

pub mod grid;
pub mod line;

pub use grid::{Board, MoveOutcome, Tile, SPAWN_TWO_PROBABILITY};
pub use line::{can_merge, merge_line, slide_line, LineBuf, MAX_TILE};
