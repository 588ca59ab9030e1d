//! Attack detection and square checking
//!
//! Provides functions to check if squares are under attack and if kings are in check.
//! This module is critical for move legality validation and check detection.
//!
//! ## Algorithm
//!
//! To check if a square is attacked, we iterate through all opponent pieces
//! and test whether the square is in that piece's attack reach:
//!
//! - Kings use their basic one-square reach, never castling
//! - Everything else, pawns included, uses its ordinary candidate moves
//!
//! A pawn therefore covers an empty square only through a push, and its
//! diagonals only when they hold an enemy piece. Occupied squares (a king's
//! own square) come out the same as under the diagonal rule; the difference
//! shows on empty castling transit squares.

use super::bishop::generate_bishop_moves;
use super::king::king_basic_reach;
use super::knight::generate_knight_moves;
use super::pawn::generate_pawn_moves;
use super::queen::generate_queen_moves;
use super::rook::generate_rook_moves;
use crate::board::Board;
use crate::types::{Color, PieceKind, Square};

/// Check if `square` is attacked by any opponent of `defender`
///
/// # Examples
///
/// ```rust,ignore
/// // Is f1 covered by a black piece?
/// let attacked = is_square_attacked(&board, Square::new(7, 5), Color::White);
/// ```
pub fn is_square_attacked(board: &Board, square: Square, defender: Color) -> bool {
    let attacker = defender.opposite();
    let mut reach = Vec::with_capacity(28);

    for from in board.squares_of(attacker) {
        reach.clear();
        attack_reach(board, from, &mut reach);
        if reach.contains(&square) {
            return true;
        }
    }

    false
}

/// Check if the king of `color` is attacked
///
/// A side without a king on the board is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_attacked(board, king, color),
        None => false,
    }
}

/// Squares the piece on `from` attacks
pub fn attack_reach(board: &Board, from: Square, reach: &mut Vec<Square>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    let color = piece.color;

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, color, reach),
        PieceKind::Knight => generate_knight_moves(board, from, color, reach),
        PieceKind::Bishop => generate_bishop_moves(board, from, color, reach),
        PieceKind::Rook => generate_rook_moves(board, from, color, reach),
        PieceKind::Queen => generate_queen_moves(board, from, color, reach),
        PieceKind::King => king_basic_reach(board, from, color, reach),
    }
}
