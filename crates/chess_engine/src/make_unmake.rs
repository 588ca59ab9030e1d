//! Hypothetical move making and unmaking
//!
//! Legality filtering tries each candidate move on the real board, asks
//! whether the mover's king is attacked, and restores the board. The
//! restoration lives in [`with_move_applied`], so callers only ever see the
//! board through a shared reference while the move is applied.

use crate::board::Board;
use crate::types::{Piece, PieceKind, Square};

/// Information needed to undo a hypothetical move
pub(crate) struct UndoInfo {
    from: Square,
    to: Square,
    moved: Piece,
    captured: Option<Piece>,
    en_passant_victim: Option<Piece>,
}

/// Relocate the piece on `from` to `to`, returning undo information
///
/// An en passant capture also lifts the bypassed pawn. Returns `None` when
/// `from` is empty.
pub(crate) fn make_move(board: &mut Board, from: Square, to: Square) -> Option<UndoInfo> {
    let moved = board.take(from)?;

    let en_passant_victim = if moved.kind == PieceKind::Pawn
        && board.en_passant_target() == Some(to)
        && board.is_empty(to)
    {
        board.take(Square::new(from.row, to.col))
    } else {
        None
    };

    let captured = board.take(to);
    board.set(to, Some(moved));

    Some(UndoInfo {
        from,
        to,
        moved,
        captured,
        en_passant_victim,
    })
}

/// Put every piece touched by [`make_move`] back where it was
pub(crate) fn unmake_move(board: &mut Board, undo: UndoInfo) {
    board.set(undo.from, Some(undo.moved));
    board.set(undo.to, undo.captured);
    if let Some(victim) = undo.en_passant_victim {
        board.set(victim.position, Some(victim));
    }
}

/// Apply `from -> to`, evaluate `f` on the resulting position, then restore
pub(crate) fn with_move_applied<R>(
    board: &mut Board,
    from: Square,
    to: Square,
    f: impl FnOnce(&Board) -> R,
) -> Option<R> {
    let undo = make_move(board, from, to)?;
    let result = f(board);
    unmake_move(board, undo);
    Some(result)
}
