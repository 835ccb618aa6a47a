//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The board is square. Its side length `N` is chosen per session:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_BOARD_SIZE` | 2 | Smallest playable board (4 cells) |
//! | `MAX_BOARD_SIZE` | 20 | Largest playable board |
//! | `DEFAULT_BOARD_SIZE` | 8 | Used when the first size prompt is cancelled |
//!
//! # Examples
//!
//! ```
//! use queen_step_types::{Square, DEFAULT_BOARD_SIZE};
//!
//! let sq = Square::new(3, 4);
//! assert_eq!(sq.chebyshev(Square::new(4, 5)), 1);
//! assert_eq!(sq.offset(-1, 1, 8), Some(Square::new(2, 5)));
//!
//! assert_eq!(DEFAULT_BOARD_SIZE, 8);
//! ```

/// Smallest board side length.
pub const MIN_BOARD_SIZE: u8 = 2;

/// Largest board side length.
pub const MAX_BOARD_SIZE: u8 = 20;

/// Board side length used when the first size prompt is cancelled.
pub const DEFAULT_BOARD_SIZE: u8 = 8;

/// The eight king-step offsets as `(d_row, d_col)`, in row-major order.
pub const STEP_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];


/// A board cell addressed by `(row, col)`, both zero-based.
///
/// Row 0 is the top row of the rendered board, column 0 the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Chebyshev (king-move) distance between two squares.
    ///
    /// # Examples
    ///
    /// ```
    /// use queen_step_types::Square;
    ///
    /// assert_eq!(Square::new(0, 0).chebyshev(Square::new(0, 0)), 0);
    /// assert_eq!(Square::new(0, 0).chebyshev(Square::new(1, 1)), 1);
    /// assert_eq!(Square::new(2, 0).chebyshev(Square::new(0, 1)), 2);
    /// ```
    pub fn chebyshev(&self, other: Square) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Offset this square by `(d_row, d_col)`.
    ///
    /// Returns `None` when the result would leave `[0, size)` on either axis.
    pub fn offset(&self, d_row: i8, d_col: i8, size: u8) -> Option<Square> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        let size = size as i16;
        if row < 0 || col < 0 || row >= size || col >= size {
            return None;
        }
        Some(Square::new(row as u8, col as u8))
    }

    /// Checkerboard parity, `(row + col) mod 2`. Zero is a light square.
    pub fn is_dark(&self) -> bool {
        (self.row as u16 + self.col as u16) % 2 == 1
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are produced by mouse clicks, toolbar buttons and keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Step the queen onto the given square (ignored unless legal)
    MoveTo(Square),
    /// Start a new game on the current board size
    Reset,
    /// Teleport the queen to a random free square and clear the move count
    RandomizeQueen,
    /// Move the blocked square to a random square not under the queen
    RandomizeBlock,
    /// Start a new game on a board with the given side length
    Resize(u8),
}

impl GameAction {
    /// Short name used in log records.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveTo(_) => "moveTo",
            GameAction::Reset => "reset",
            GameAction::RandomizeQueen => "randomizeQueen",
            GameAction::RandomizeBlock => "randomizeBlock",
            GameAction::Resize(_) => "resize",
        }
    }
}
