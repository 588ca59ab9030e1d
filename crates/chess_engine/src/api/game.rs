//! Game lifecycle management
//!
//! Creating a game. An existing game is restarted with [`Board::reset`].

use crate::board::Board;

/// Create a new game in the standard starting position
pub fn new_game() -> Board {
    Board::new()
}
