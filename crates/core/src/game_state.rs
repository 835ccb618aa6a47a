//! Game state module - manages one game session
//!
//! A session is the board size, the queen square, the blocked square and the
//! number of accepted moves. Every operation is an atomic transition that keeps
//! `blocked != queen`.

use crate::board::{legal_moves_from, BoardSize, LegalMoves};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Square};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    size: BoardSize,
    queen: Square,
    blocked: Square,
    move_count: u32,
    rng: SimpleRng,
    /// Seed the session was created with (not the live RNG state).
    seed: u32,
}

impl GameState {
    /// Start a new game with the queen on the center square.
    pub fn new(size: BoardSize, seed: u32) -> Self {
        let mut state = Self {
            size,
            queen: size.center(),
            blocked: Square::default(),
            move_count: 0,
            rng: SimpleRng::new(seed),
            seed,
        };
        state.new_game();
        state
    }

    /// Build a session with explicit positions.
    ///
    /// Returns `None` when a square is off the board or both squares coincide.
    pub fn with_positions(size: BoardSize, queen: Square, blocked: Square, seed: u32) -> Option<Self> {
        if !size.contains(queen) || !size.contains(blocked) || queen == blocked {
            return None;
        }
        Some(Self {
            size,
            queen,
            blocked,
            move_count: 0,
            rng: SimpleRng::new(seed),
            seed,
        })
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn queen(&self) -> Square {
        self.queen
    }

    pub fn blocked(&self) -> Square {
        self.blocked
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Legal single-step destinations from an arbitrary square.
    pub fn legal_moves_from(&self, pos: Square) -> LegalMoves {
        legal_moves_from(self.size, self.blocked, pos)
    }

    /// Legal single-step destinations from the queen.
    pub fn legal_moves(&self) -> LegalMoves {
        self.legal_moves_from(self.queen)
    }

    pub fn is_legal_move(&self, target: Square) -> bool {
        self.legal_moves().contains(&target)
    }

    /// Move the queen to `target` if it is a legal destination.
    ///
    /// Returns false and leaves the state untouched otherwise.
    pub fn attempt_move(&mut self, target: Square) -> bool {
        if !self.is_legal_move(target) {
            return false;
        }
        self.queen = target;
        self.move_count += 1;
        true
    }

    /// Put the queen on a random square other than the blocked one.
    pub fn randomize_queen(&mut self) {
        self.queen = self.rng.pick_square_excluding(self.size, self.blocked);
        self.move_count = 0;
    }

    /// Move the block to a random square other than the queen's.
    ///
    /// The move count is kept.
    pub fn randomize_block(&mut self) {
        self.blocked = self.rng.pick_square_excluding(self.size, self.queen);
    }

    /// Switch to a new board size and start a new game on it.
    pub fn resize(&mut self, size: BoardSize) {
        self.size = size;
        self.new_game();
    }

    /// Start a new game on the current board size.
    pub fn reset(&mut self) {
        self.new_game();
    }

    fn new_game(&mut self) {
        self.queen = self.size.center();
        self.randomize_block();
        self.move_count = 0;
    }

    /// Apply one user command.
    ///
    /// Returns whether the state changed (and should be redrawn).
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveTo(target) => self.attempt_move(target),
            GameAction::Reset => {
                self.reset();
                true
            }
            GameAction::RandomizeQueen => {
                self.randomize_queen();
                true
            }
            GameAction::RandomizeBlock => {
                self.randomize_block();
                true
            }
            GameAction::Resize(n) => match BoardSize::new(n) {
                Ok(size) => {
                    self.resize(size);
                    true
                }
                Err(_) => false,
            },
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.size,
            queen: self.queen,
            blocked: self.blocked,
            move_count: self.move_count,
            legal_moves: self.legal_moves(),
        }
    }
}
