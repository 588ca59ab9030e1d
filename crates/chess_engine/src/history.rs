//! Move history tracking
//!
//! Keeps a chronological record of every completed move. Renderers read the
//! last entry to highlight the previous move.

use serde::{Deserialize, Serialize};

use crate::types::{Color, PieceKind, Square, SpecialMove};

/// One completed move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: PieceKind,
    pub color: Color,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub special: SpecialMove,
}

/// Chronological list of moves since the game started
///
/// Index 0 is White's first move, index 1 Black's reply, and so on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Get the most recent move, if any
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub(crate) fn last_move_mut(&mut self) -> Option<&mut MoveRecord> {
        self.moves.last_mut()
    }

    /// Number of half-moves made
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter()
    }
}
