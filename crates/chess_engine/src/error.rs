//! Error types for chess engine
//!
//! Every rejected call on the [`Board`](crate::board::Board) maps to one of these
//! variants. A rejected call never mutates the board, so callers can treat all of
//! them as ordinary, locally-handled failures.

use thiserror::Error;

use crate::types::{Color, Square};

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Square coordinates outside the 8x8 board
    #[error("Invalid square ({row}, {col}) (row and column must be 0-7)")]
    InvalidSquare { row: u8, col: u8 },

    /// No piece at source square
    #[error("No piece at square {square}")]
    NoPieceAtSquare { square: Square },

    /// Piece does not belong to the side to move
    #[error("Piece at square {square} does not belong to {color:?}")]
    WrongPieceColor { square: Square, color: Color },

    /// A move was requested without a prior selection
    #[error("No piece is selected")]
    NothingSelected,

    /// Destination is not in the selected piece's legal set
    #[error("Illegal move: from square {from} to square {to}")]
    IllegalDestination { from: Square, to: Square },

    /// A pawn is waiting for its promotion choice
    #[error("Promotion pending at square {square}")]
    PromotionPending { square: Square },

    /// `promote` called while no pawn is waiting
    #[error("No promotion is pending")]
    NoPromotionPending,
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
