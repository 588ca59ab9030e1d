//! Check, checkmate and stalemate queries
//!
//! Checkmate and stalemate need every legal move of one side, which are found
//! by simulation, so both take `&mut self`. The board is unchanged when they
//! return.

use tracing::info;

use crate::board::Board;
use crate::move_gen::{self, attack};
use crate::types::{Color, GameOutcome, Square};

impl Board {
    /// Whether any opponent of `defender` attacks `square`
    pub fn is_square_attacked(&self, square: Square, defender: Color) -> bool {
        attack::is_square_attacked(self, square, defender)
    }

    /// Whether the king of `color` is attacked
    pub fn is_in_check(&self, color: Color) -> bool {
        attack::is_in_check(self, color)
    }

    /// In check with no legal move
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && !move_gen::has_any_legal_move(self, color)
    }

    /// Not in check, yet no legal move
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && !move_gen::has_any_legal_move(self, color)
    }

    /// Record checkmate or stalemate for the side to move
    ///
    /// Checkmate is tested first, so a position is never reported as both.
    /// An outcome already recorded is kept.
    pub(crate) fn evaluate_terminal_state(&mut self) {
        if self.outcome.is_some() {
            return;
        }

        let side = self.current_turn;
        if self.is_checkmate(side) {
            let winner = side.opposite();
            info!("[GAME_OVER] Checkmate - {:?} wins", winner);
            self.outcome = Some(GameOutcome::Checkmate { winner });
        } else if self.is_stalemate(side) {
            info!("[GAME_OVER] Stalemate - {:?} has no legal moves", side);
            self.outcome = Some(GameOutcome::Stalemate);
        }
    }
}
