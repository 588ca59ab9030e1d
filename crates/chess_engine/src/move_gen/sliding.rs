//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction, walk outward one step at a time:
//! 1. Empty square: valid move, keep walking
//! 2. Opponent piece: valid capture, then stop
//! 3. Own piece or board edge: stop without adding the square

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::types::{Color, Square};

/// Generate moves for a sliding piece along the given unit directions
///
/// # Arguments
///
/// * `board` - The current position
/// * `from` - Source square
/// * `color` - Color of the moving piece
/// * `dirs` - (d_row, d_col) unit steps for this piece kind
/// * `moves` - Output vector to append valid moves to
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(d_row, d_col) in dirs {
        for step in 1..BOARD_SIZE as i8 {
            let Some(to) = from.offset(d_row * step, d_col * step) else {
                break;
            };

            match board.color_at(to) {
                None => moves.push(to),
                Some(occupant) => {
                    if occupant != color {
                        moves.push(to);
                    }
                    break;
                }
            }
        }
    }
}
