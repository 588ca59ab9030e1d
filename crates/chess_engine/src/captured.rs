//! Captured pieces tracking
//!
//! Tracks pieces captured by each player and calculates material advantage.
//!
//! Positive advantage means White is ahead, negative means Black is ahead.
//! Example: if White captured (Rook=5, Pawn=1) and Black captured (Knight=3),
//! White's advantage is (5+1) - 3 = +3 pawns.

use crate::types::{Color, PieceKind};

/// Captured pieces for both sides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    /// Pieces captured by white (black pieces taken)
    pub white_captured: Vec<PieceKind>,
    /// Pieces captured by black (white pieces taken)
    pub black_captured: Vec<PieceKind>,
}

impl CapturedPieces {
    /// Record a capture; the side that did not lose the piece gets credit
    pub fn add_capture(&mut self, captured_piece_color: Color, kind: PieceKind) {
        match captured_piece_color {
            Color::White => self.black_captured.push(kind),
            Color::Black => self.white_captured.push(kind),
        }
    }

    /// Material difference in pawn units
    pub fn material_advantage(&self) -> i32 {
        let white_score: i32 = self.white_captured.iter().map(|k| k.value()).sum();
        let black_score: i32 = self.black_captured.iter().map(|k| k.value()).sum();
        white_score - black_score
    }
}
