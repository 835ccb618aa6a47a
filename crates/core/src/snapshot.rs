use crate::board::{BoardSize, LegalMoves};
use crate::types::Square;

/// Read-only copy of a session, handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub size: BoardSize,
    pub queen: Square,
    pub blocked: Square,
    pub move_count: u32,
    /// Legal destinations from `queen`, in row-major order.
    pub legal_moves: LegalMoves,
}
