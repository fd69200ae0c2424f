use crate::coord::Coord;
use crate::piece::Piece;

/// Failures of board placement and move requests. None of them leave the board modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("square {at} is outside a {size}x{size} board")]
    OutOfBounds { at: Coord, size: i32 },

    #[error("square {at} is already occupied by {occupant}")]
    SquareOccupied { at: Coord, occupant: Piece },

    #[error("cannot add another {piece}: at most {cap} allowed")]
    PopulationCapExceeded { piece: Piece, cap: usize },

    #[error("no piece at {0}")]
    NoPieceAtOrigin(Coord),

    #[error("board size {size} is not supported: must be between 1 and {max}")]
    InvalidSize { size: i32, max: i32 },

    #[error("standard setup is only defined for an 8x8 board, not {0}x{0}")]
    UnsupportedSetup(i32),
}
