//! Board module - board geometry and single-step move generation
//!
//! The board itself holds no cells: the only occupied squares are the queen and
//! the blocked square, both tracked by [`crate::GameState`]. This module owns the
//! validated side length and the pure legality rule.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::BoardSizeError;
use crate::types::{Square, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE, STEP_OFFSETS};

/// Destinations reachable in one step. A square has at most eight neighbours.
pub type LegalMoves = ArrayVec<Square, 8>;

/// Validated board side length in `[MIN_BOARD_SIZE, MAX_BOARD_SIZE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardSize(u8);

impl BoardSize {
    pub fn new(n: u8) -> Result<Self, BoardSizeError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&n) {
            return Err(BoardSizeError::OutOfRange(n as i64));
        }
        Ok(Self(n))
    }

    /// Parse user input (surrounding whitespace is ignored).
    ///
    /// # Examples
    ///
    /// ```
    /// use queen_step_core::{BoardSize, BoardSizeError};
    ///
    /// assert_eq!(BoardSize::parse(" 12 ").unwrap().get(), 12);
    /// assert_eq!(BoardSize::parse("1"), Err(BoardSizeError::OutOfRange(1)));
    /// assert!(matches!(BoardSize::parse("abc"), Err(BoardSizeError::NotANumber(_))));
    /// ```
    pub fn parse(input: &str) -> Result<Self, BoardSizeError> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| BoardSizeError::NotANumber(trimmed.to_string()))?;
        if value < MIN_BOARD_SIZE as i64 || value > MAX_BOARD_SIZE as i64 {
            return Err(BoardSizeError::OutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn cell_count(self) -> u16 {
        self.0 as u16 * self.0 as u16
    }

    /// Starting square of the queen, `(N / 2, N / 2)`.
    pub fn center(self) -> Square {
        Square::new(self.0 / 2, self.0 / 2)
    }

    pub fn contains(self, sq: Square) -> bool {
        sq.row < self.0 && sq.col < self.0
    }

    /// Row-major index of `sq`. Only meaningful when `contains(sq)`.
    pub fn index_of(self, sq: Square) -> u16 {
        sq.row as u16 * self.0 as u16 + sq.col as u16
    }

    /// Inverse of [`BoardSize::index_of`].
    pub fn square_at(self, index: u16) -> Square {
        let n = self.0 as u16;
        Square::new((index / n) as u8, (index % n) as u8)
    }

    /// All squares in row-major order.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        (0..self.cell_count()).map(move |i| self.square_at(i))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.0, self.0)
    }
}

/// Every in-bounds square one king step away from `from`, except `blocked`.
///
/// `from` itself need not be on the board; only the results are bounds-checked.
pub fn legal_moves_from(size: BoardSize, blocked: Square, from: Square) -> LegalMoves {
    let mut out = LegalMoves::new();
    for &(dr, dc) in STEP_OFFSETS.iter() {
        if let Some(sq) = from.offset(dr, dc, size.get()) {
            if sq != blocked {
                out.push(sq);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: u8) -> BoardSize {
        BoardSize::new(n).unwrap()
    }

    #[test]
    fn test_board_size_bounds() {
        assert!(BoardSize::new(1).is_err());
        assert!(BoardSize::new(2).is_ok());
        assert!(BoardSize::new(20).is_ok());
        assert_eq!(BoardSize::new(21), Err(BoardSizeError::OutOfRange(21)));
    }

    #[test]
    fn test_parse_rejects_garbage_and_range() {
        assert_eq!(
            BoardSize::parse(""),
            Err(BoardSizeError::NotANumber(String::new()))
        );
        assert!(matches!(
            BoardSize::parse("8.5"),
            Err(BoardSizeError::NotANumber(_))
        ));
        assert_eq!(BoardSize::parse("-3"), Err(BoardSizeError::OutOfRange(-3)));
        assert_eq!(BoardSize::parse("400"), Err(BoardSizeError::OutOfRange(400)));
        assert_eq!(BoardSize::parse(" 20 ").unwrap().get(), 20);
    }

    #[test]
    fn test_center_and_indexing() {
        assert_eq!(size(8).center(), Square::new(4, 4));
        assert_eq!(size(3).center(), Square::new(1, 1));
        assert_eq!(size(2).center(), Square::new(1, 1));

        let s = size(5);
        for (i, sq) in s.squares().enumerate() {
            assert_eq!(s.index_of(sq) as usize, i);
            assert_eq!(s.square_at(i as u16), sq);
        }
        assert_eq!(s.squares().count(), 25);
    }

    #[test]
    fn test_center_square_has_eight_neighbours() {
        let s = size(8);
        let far_block = Square::new(0, 0);
        assert_eq!(legal_moves_from(s, far_block, Square::new(4, 4)).len(), 8);
    }

    #[test]
    fn test_blocked_square_is_excluded() {
        let s = size(3);
        let moves = legal_moves_from(s, Square::new(0, 0), Square::new(1, 1));
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Square::new(0, 0)));
    }

    #[test]
    fn test_corner_moves() {
        let s = size(8);
        let moves = legal_moves_from(s, Square::new(7, 7), Square::new(0, 0));
        assert_eq!(
            moves.as_slice(),
            &[Square::new(0, 1), Square::new(1, 0), Square::new(1, 1)]
        );
    }

    #[test]
    fn test_moves_are_in_bounds_at_distance_one_for_all_sizes() {
        for n in 2..=20 {
            let s = size(n);
            let blocked = Square::new(n - 1, 0);
            for from in s.squares() {
                let moves = legal_moves_from(s, blocked, from);
                for sq in moves.iter() {
                    assert!(s.contains(*sq));
                    assert_eq!(from.chebyshev(*sq), 1);
                    assert_ne!(*sq, blocked);
                }
            }
        }
    }
}
