//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent onto an empty square
//!   (White moves toward row 0, Black toward row 7)
//! - **Double push**: from the starting row, two squares when both the
//!   intermediate and destination squares are empty
//! - **Captures**: one square diagonally forward onto an opponent piece
//! - **En passant**: diagonally forward onto the empty en passant target when
//!   the square beside the pawn (same row, destination column) holds an
//!   opponent pawn
//! - **Promotion**: handled during move execution, not here

use crate::board::Board;
use crate::types::{Color, PieceKind, Square};

/// Generate pawn moves from a given square
pub fn generate_pawn_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    let direction = color.pawn_direction();

    if let Some(forward) = from.offset(direction, 0) {
        if board.is_empty(forward) {
            moves.push(forward);

            if from.row == color.pawn_start_row() {
                if let Some(double) = from.offset(2 * direction, 0) {
                    if board.is_empty(double) {
                        moves.push(double);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = from.offset(direction, d_col) else {
            continue;
        };

        match board.color_at(target) {
            Some(occupant) if occupant != color => moves.push(target),
            Some(_) => {}
            None => {
                if board.en_passant_target() == Some(target)
                    && is_en_passant_victim(board, Square::new(from.row, target.col), color)
                {
                    moves.push(target);
                }
            }
        }
    }
}

fn is_en_passant_victim(board: &Board, square: Square, mover: Color) -> bool {
    board
        .piece_at(square)
        .is_some_and(|p| p.kind == PieceKind::Pawn && p.color != mover)
}
