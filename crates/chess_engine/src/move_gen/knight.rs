//! Knight move generation
//!
//! Knights jump to the eight (±1,±2)/(±2,±1) offsets. Intervening pieces do
//! not matter; only the destination's occupant does.

use crate::board::Board;
use crate::constants::KNIGHT_DELTAS;
use crate::types::{Color, Square};

/// Generate knight moves from a given square
///
/// Destinations off the board or holding a friendly piece are skipped.
pub fn generate_knight_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    generate_step_moves(board, from, color, &KNIGHT_DELTAS, moves);
}

/// Single-step movers (knight, king) share the same occupancy rule
pub(crate) fn generate_step_moves(
    board: &Board,
    from: Square,
    color: Color,
    deltas: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(d_row, d_col) in deltas {
        if let Some(to) = from.offset(d_row, d_col) {
            // Valid if destination is empty or contains opponent piece
            if board.color_at(to) != Some(color) {
                moves.push(to);
            }
        }
    }
}
