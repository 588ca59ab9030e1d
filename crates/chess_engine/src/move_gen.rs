//! Move generation
//!
//! Two layers:
//!
//! - [`candidate_moves`]: pseudo-legal destinations from piece geometry and
//!   occupancy alone, dispatched on [`PieceKind`]
//! - [`legal_moves_from`]: candidates that do not leave the mover's own king
//!   in check, found by simulating each one and restoring the board
//!
//! There is no pin detection shortcut; simulation is the only filter.

pub mod attack;
pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;

use crate::board::Board;
use crate::make_unmake::with_move_applied;
use crate::types::{Color, PieceKind, Square};

pub use attack::{is_in_check, is_square_attacked};

/// Pseudo-legal destinations of the piece on `from`
///
/// Ignores whether the mover's own king would be left in check. Empty when
/// `from` holds no piece.
pub fn candidate_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut moves = Vec::new();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };
    let color = piece.color;

    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, from, color, &mut moves),
        PieceKind::Knight => knight::generate_knight_moves(board, from, color, &mut moves),
        PieceKind::Bishop => bishop::generate_bishop_moves(board, from, color, &mut moves),
        PieceKind::Rook => rook::generate_rook_moves(board, from, color, &mut moves),
        PieceKind::Queen => queen::generate_queen_moves(board, from, color, &mut moves),
        PieceKind::King => king::generate_king_moves(board, from, color, &mut moves),
    }

    moves
}

/// Candidates of the piece on `from` that keep its own king safe
///
/// The board is mutated while each candidate is tested and is identical to
/// its prior state when this returns.
pub fn legal_moves_from(board: &mut Board, from: Square) -> Vec<Square> {
    let Some(mover) = board.color_at(from) else {
        return Vec::new();
    };

    candidate_moves(board, from)
        .into_iter()
        .filter(|&to| {
            with_move_applied(board, from, to, |b| !is_in_check(b, mover)).unwrap_or(false)
        })
        .collect()
}

/// Whether any piece of `color` has at least one legal move
pub fn has_any_legal_move(board: &mut Board, color: Color) -> bool {
    board
        .squares_of(color)
        .into_iter()
        .any(|from| !legal_moves_from(board, from).is_empty())
}
