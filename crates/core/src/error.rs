use thiserror::Error;

use crate::types::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Rejected board-size input.
///
/// This is the only failure the game knows about. It is reported back to the
/// size prompt and never touches the running session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardSizeError {
    #[error("enter a whole number, got {0:?}")]
    NotANumber(String),
    #[error("size must be between {} and {}, got {}", MIN_BOARD_SIZE, MAX_BOARD_SIZE, .0)]
    OutOfRange(i64),
}
