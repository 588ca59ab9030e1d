//! Selection, move execution and promotion
//!
//! Each operation comes in two forms: `try_*` returns why it was rejected,
//! and the plain form reports success as a `bool`. A rejected call leaves
//! every board field untouched.

use tracing::{debug, error, info};

use crate::board::Board;
use crate::constants::{
    KINGSIDE_ROOK_COL, KINGSIDE_ROOK_DEST_COL, QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_DEST_COL,
};
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::history::MoveRecord;
use crate::move_gen;
use crate::types::{GameOutcome, Piece, PieceKind, PromotionChoice, Square, SpecialMove};

impl Board {
    /// Select the piece on `square` and compute its legal destinations
    ///
    /// Fails when the square is empty, holds an opponent piece, or a
    /// promotion choice is outstanding.
    pub fn try_select(&mut self, square: Square) -> ChessEngineResult<&[Square]> {
        if let Some(pending) = self.promotion_pending {
            return Err(ChessEngineError::PromotionPending { square: pending });
        }

        let color = self
            .color_at(square)
            .ok_or(ChessEngineError::NoPieceAtSquare { square })?;
        if color != self.current_turn {
            return Err(ChessEngineError::WrongPieceColor {
                square,
                color: self.current_turn,
            });
        }

        let destinations = move_gen::legal_moves_from(self, square);
        debug!(
            "[SELECT] {:?} piece at {} has {} legal moves",
            color,
            square,
            destinations.len()
        );

        self.selected = Some(square);
        self.legal_destinations = destinations;
        Ok(&self.legal_destinations)
    }

    /// Boolean form of [`Board::try_select`]
    pub fn select(&mut self, square: Square) -> bool {
        match self.try_select(square) {
            Ok(_) => true,
            Err(e) => {
                debug!("[SELECT] Rejected: {}", e);
                false
            }
        }
    }

    /// Drop the current selection, if any
    pub fn deselect(&mut self) {
        self.clear_selection();
    }

    /// Legal destinations of the piece on `square` without selecting it
    pub fn legal_moves_from(&mut self, square: Square) -> Vec<Square> {
        move_gen::legal_moves_from(self, square)
    }

    /// Move the selected piece to `to`
    ///
    /// Applies en passant removal, castling rook relocation and promotion
    /// suspension, then hands the turn over and evaluates checkmate and
    /// stalemate for the side now to move.
    pub fn try_move_to(&mut self, to: Square) -> ChessEngineResult<MoveRecord> {
        if let Some(pending) = self.promotion_pending {
            return Err(ChessEngineError::PromotionPending { square: pending });
        }
        let from = self.selected.ok_or(ChessEngineError::NothingSelected)?;
        if !self.legal_destinations.contains(&to) {
            return Err(ChessEngineError::IllegalDestination { from, to });
        }
        let mover = *self
            .piece_at(from)
            .ok_or(ChessEngineError::NoPieceAtSquare { square: from })?;

        let mut special = SpecialMove::None;
        let mut captured: Option<Piece> = None;

        // En passant: the bypassed pawn sits beside the mover, not on `to`
        if mover.kind == PieceKind::Pawn && self.en_passant_target == Some(to) && self.is_empty(to) {
            captured = self.take(Square::new(from.row, to.col));
            special = SpecialMove::EnPassant;
        }

        if let Some(target) = self.piece_at(to) {
            if target.kind == PieceKind::King && target.color != mover.color {
                error!(
                    "[MOVE] {:?} king captured at {} - legal play should never allow this",
                    target.color, to
                );
                self.outcome = Some(GameOutcome::KingCaptured {
                    winner: self.current_turn,
                });
            }
        }

        if mover.kind == PieceKind::King && from.col.abs_diff(to.col) == 2 {
            let (rook_col, rook_dest_col, castle) = if to.col > from.col {
                (KINGSIDE_ROOK_COL, KINGSIDE_ROOK_DEST_COL, SpecialMove::CastleKingside)
            } else {
                (QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_DEST_COL, SpecialMove::CastleQueenside)
            };
            if let Some(mut rook) = self.take(Square::new(from.row, rook_col)) {
                rook.has_moved = true;
                self.set(Square::new(from.row, rook_dest_col), Some(rook));
            }
            special = castle;
        }

        self.take(from);
        if let Some(victim) = self.take(to) {
            captured = Some(victim);
        }
        self.set(
            to,
            Some(Piece {
                has_moved: true,
                ..mover
            }),
        );

        if let Some(victim) = captured {
            self.captured.add_capture(victim.color, victim.kind);
        }

        let is_pawn = mover.kind == PieceKind::Pawn;
        if is_pawn && from.row.abs_diff(to.row) == 2 {
            special = SpecialMove::DoublePawnPush;
        }

        let record = MoveRecord {
            piece: mover.kind,
            color: mover.color,
            from,
            to,
            captured: captured.map(|p| p.kind),
            special,
        };
        self.history.add_move(record);
        self.clear_selection();

        info!(
            "[MOVE] {:?} {:?} {} -> {} ({:?})",
            mover.color, mover.kind, from, to, special
        );

        if is_pawn && to.row == mover.color.opposite().back_row() {
            // The turn stays with the mover until a promotion piece is chosen
            self.en_passant_target = None;
            self.promotion_pending = Some(to);
            info!("[PROMOTION] {:?} pawn awaiting promotion at {}", mover.color, to);
            return Ok(record);
        }

        self.en_passant_target = if special == SpecialMove::DoublePawnPush {
            Some(Square::new((from.row + to.row) / 2, from.col))
        } else {
            None
        };

        self.finish_turn();
        Ok(record)
    }

    /// Boolean form of [`Board::try_move_to`]
    pub fn move_to(&mut self, to: Square) -> bool {
        match self.try_move_to(to) {
            Ok(_) => true,
            Err(e) => {
                debug!("[MOVE] Rejected: {}", e);
                false
            }
        }
    }

    /// Replace the pawn awaiting promotion with the chosen piece
    ///
    /// The new piece counts as moved. Its legal destinations are left in
    /// [`Board::legal_destinations`] for display; a fresh selection is still
    /// required before the next move.
    pub fn try_promote(&mut self, choice: PromotionChoice) -> ChessEngineResult<Piece> {
        let square = self
            .promotion_pending
            .ok_or(ChessEngineError::NoPromotionPending)?;
        let pawn = *self
            .piece_at(square)
            .ok_or(ChessEngineError::NoPieceAtSquare { square })?;

        let kind = PieceKind::from(choice);
        let promoted = Piece {
            kind,
            color: pawn.color,
            position: square,
            has_moved: true,
        };
        self.set(square, Some(promoted));
        self.promotion_pending = None;
        self.selected = None;
        self.legal_destinations = move_gen::legal_moves_from(self, square);

        if let Some(record) = self.history.last_move_mut() {
            record.special = SpecialMove::Promotion(kind);
        }
        info!("[PROMOTION] {:?} pawn at {} promoted to {:?}", pawn.color, square, kind);

        self.finish_turn();
        Ok(promoted)
    }

    /// Boolean form of [`Board::try_promote`]
    pub fn promote(&mut self, choice: PromotionChoice) -> bool {
        match self.try_promote(choice) {
            Ok(_) => true,
            Err(e) => {
                debug!("[PROMOTION] Rejected: {}", e);
                false
            }
        }
    }

    /// Hand the move to the other side and look for a terminal position
    fn finish_turn(&mut self) {
        self.current_turn = self.current_turn.opposite();
        self.evaluate_terminal_state();
    }
}
