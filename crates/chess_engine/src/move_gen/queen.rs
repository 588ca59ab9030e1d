//! Queen move generation
//!
//! The queen combines rook and bishop movement: all eight directions.

use super::sliding;
use crate::board::Board;
use crate::constants::QUEEN_DIRS;
use crate::types::{Color, Square};

/// Generate queen moves from a given square
pub fn generate_queen_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    sliding::generate_sliding_moves(board, from, color, &QUEEN_DIRS, moves);
}
