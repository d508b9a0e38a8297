//! Dumb-move filter
//!
//! Static 3x3 patterns that flag moves which are never the only way to
//! reach a goal (filling one's own sure eye), so the search can skip them
//! before generating a child.

pub mod dumb;
pub mod pattern;

pub use dumb::DumbMoveFilter;
pub use pattern::{neighborhood, Cell, Pattern};

use crate::board::Stone;

/// Read access the filter needs from a board.
pub trait BoardView {
    /// Stone at (row, col), or `None` when the point is off the board.
    /// Coordinates may be negative.
    fn stone_at(&self, row: i32, col: i32) -> Option<Stone>;
}
