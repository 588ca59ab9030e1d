//! King move generation
//!
//! Kings move one square in any direction. Castling is layered on top:
//!
//! - [`king_basic_reach`] yields the eight adjacent squares only. Attack
//!   detection uses it so that asking "is this square attacked?" never
//!   re-enters castling evaluation.
//! - [`generate_king_moves`] adds castling candidates, whose safety checks go
//!   through [`super::attack`] (and therefore through the basic reach).
//!
//! ## Castling preconditions (per side)
//!
//! - King unmoved, on its home square (back rank, column 4), and not
//!   currently in check
//! - Corner rook of the same color present and unmoved
//! - Every square between king and rook empty
//! - Kingside: columns 5 and 6 not attacked
//! - Queenside: columns 3 and 2 not attacked (column 1 only has to be empty)

use super::attack::{is_in_check, is_square_attacked};
use super::knight::generate_step_moves;
use crate::board::Board;
use crate::constants::{
    KING_DELTAS, KING_HOME_COL, KINGSIDE_KING_DEST_COL, KINGSIDE_ROOK_COL,
    QUEENSIDE_KING_DEST_COL, QUEENSIDE_ROOK_COL,
};
use crate::types::{Color, PieceKind, Square};

/// The eight adjacent squares not occupied by a friendly piece
pub fn king_basic_reach(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    generate_step_moves(board, from, color, &KING_DELTAS, moves);
}

/// Basic reach plus any castling destinations currently available
pub fn generate_king_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    king_basic_reach(board, from, color, moves);

    let Some(king) = board.piece_at(from) else {
        return;
    };
    if king.has_moved
        || from.row != color.back_row()
        || from.col != KING_HOME_COL
        || is_in_check(board, color)
    {
        return;
    }

    let row = from.row;
    if can_castle(board, row, color, KINGSIDE_ROOK_COL, &[5, 6], &[5, 6]) {
        moves.push(Square::new(row, KINGSIDE_KING_DEST_COL));
    }
    if can_castle(board, row, color, QUEENSIDE_ROOK_COL, &[1, 2, 3], &[2, 3]) {
        moves.push(Square::new(row, QUEENSIDE_KING_DEST_COL));
    }
}

fn can_castle(
    board: &Board,
    row: u8,
    color: Color,
    rook_col: u8,
    empty_cols: &[u8],
    safe_cols: &[u8],
) -> bool {
    let rook_ready = board.piece_at(Square::new(row, rook_col)).is_some_and(|p| {
        p.kind == PieceKind::Rook && p.color == color && !p.has_moved
    });
    if !rook_ready {
        return false;
    }

    empty_cols
        .iter()
        .all(|&col| board.is_empty(Square::new(row, col)))
        && safe_cols
            .iter()
            .all(|&col| !is_square_attacked(board, Square::new(row, col), color))
}
