//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and session state. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical block and queen placements
//! - **Testable**: Every rule is checked by unit tests
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: Legal moves fit in a fixed-capacity `ArrayVec`
//!
//! # Module Structure
//!
//! - [`board`]: validated board size and the single-step legality rule
//! - [`game_state`]: the session (queen, blocked square, move count) and its transitions
//! - [`rng`]: seeded LCG and uniform square sampling
//! - [`snapshot`]: read-only copy of a session for renderers
//! - [`error`]: board-size validation error
//!
//! # Game Rules
//!
//! - The queen moves exactly one square per move, orthogonally or diagonally
//! - She may never enter the blocked square, and never leaves the board
//! - A new game places the queen on `(N / 2, N / 2)` and the block on a random
//!   other square
//! - Randomizing the queen clears the move count; randomizing the block does not
//!
//! # Example
//!
//! ```
//! use queen_step_core::{BoardSize, GameState};
//! use queen_step_types::{GameAction, Square};
//!
//! let size = BoardSize::new(8).unwrap();
//! let mut game = GameState::new(size, 12345);
//! assert_eq!(game.queen(), Square::new(4, 4));
//!
//! // Two squares away is never legal.
//! assert!(!game.attempt_move(Square::new(6, 4)));
//! assert_eq!(game.move_count(), 0);
//!
//! // Pick any legal destination and step there.
//! let target = game.legal_moves()[0];
//! assert!(game.apply_action(GameAction::MoveTo(target)));
//! assert_eq!(game.move_count(), 1);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use queen_step_types as types;

// Re-export commonly used types for convenience
pub use board::{legal_moves_from, BoardSize, LegalMoves};
pub use error::BoardSizeError;
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
