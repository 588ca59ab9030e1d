//! Board representation
//!
//! An 8x8 mailbox of optional pieces plus the turn, en passant, selection,
//! promotion and game-over state. The board is a plain owned value: every
//! operation takes `&self` or `&mut self`, and nothing is shared globally.
//!
//! Mutating operations (select, move, promote) live in [`crate::api`]; this
//! module holds construction, position setup and read-only observers.

use crate::captured::CapturedPieces;
use crate::constants::{BACK_ROW, BLACK_BACK_ROW, BLACK_PAWN_ROW, BOARD_SIZE, WHITE_BACK_ROW, WHITE_PAWN_ROW};
use crate::history::{MoveHistory, MoveRecord};
use crate::types::{Color, GameOutcome, Piece, PieceKind, Square};

/// Full game position and interaction state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    pub(crate) current_turn: Color,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) selected: Option<Square>,
    pub(crate) legal_destinations: Vec<Square>,
    pub(crate) promotion_pending: Option<Square>,
    pub(crate) outcome: Option<GameOutcome>,
    pub(crate) history: MoveHistory,
    pub(crate) captured: CapturedPieces,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board in the standard starting position, White to move
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_standard();
        board
    }

    /// Create a board with no pieces, White to move
    pub fn empty() -> Self {
        Board {
            grid: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            current_turn: Color::White,
            en_passant_target: None,
            selected: None,
            legal_destinations: Vec::new(),
            promotion_pending: None,
            outcome: None,
            history: MoveHistory::default(),
            captured: CapturedPieces::default(),
        }
    }

    /// Restore the standard starting position and clear all game state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn setup_standard(&mut self) {
        for (col, &kind) in BACK_ROW.iter().enumerate() {
            let col = col as u8;
            self.put_piece(Square::new(BLACK_BACK_ROW, col), kind, Color::Black);
            self.put_piece(Square::new(WHITE_BACK_ROW, col), kind, Color::White);
            self.put_piece(Square::new(BLACK_PAWN_ROW, col), PieceKind::Pawn, Color::Black);
            self.put_piece(Square::new(WHITE_PAWN_ROW, col), PieceKind::Pawn, Color::White);
        }
    }

    // ========================================================================
    // Position setup
    // ========================================================================

    /// Place a fresh (unmoved) piece, replacing any occupant
    pub fn put_piece(&mut self, square: Square, kind: PieceKind, color: Color) {
        self.set(square, Some(Piece::new(kind, color, square)));
        self.clear_selection();
    }

    /// Remove whatever occupies `square`
    pub fn clear_square(&mut self, square: Square) {
        self.set(square, None);
        self.clear_selection();
    }

    /// Flag the piece on `square` as having moved (forfeits castling rights)
    pub fn mark_moved(&mut self, square: Square) {
        if let Some(piece) = self.piece_at_mut(square) {
            piece.has_moved = true;
        }
        self.clear_selection();
    }

    pub fn set_current_turn(&mut self, color: Color) {
        self.current_turn = color;
        self.clear_selection();
    }

    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
        self.clear_selection();
    }

    // ========================================================================
    // Grid access
    // ========================================================================

    /// Get the piece at a given square
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.grid[square.row as usize][square.col as usize].as_ref()
    }

    pub(crate) fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.grid[square.row as usize][square.col as usize].as_mut()
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|p| p.color)
    }

    /// Overwrite a square, keeping the occupant's `position` in sync
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.grid[square.row as usize][square.col as usize] = piece.map(|mut p| {
            p.position = square;
            p
        });
    }

    /// Take the occupant off a square
    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        self.grid[square.row as usize][square.col as usize].take()
    }

    /// Squares holding a piece of `color`, row-major
    pub fn squares_of(&self, color: Color) -> Vec<Square> {
        Square::all()
            .filter(|&sq| self.color_at(sq) == Some(color))
            .collect()
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            self.piece_at(sq)
                .is_some_and(|p| p.kind == PieceKind::King && p.color == color)
        })
    }

    /// Row-major copy of the occupant grid
    pub fn grid(&self) -> [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize] {
        self.grid
    }

    // ========================================================================
    // Observers
    // ========================================================================

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Legal destinations of the current selection
    ///
    /// Only meaningful right after a successful selection.
    pub fn legal_destinations(&self) -> &[Square] {
        &self.legal_destinations
    }

    pub fn promotion_pending(&self) -> Option<Square> {
        self.promotion_pending
    }

    pub fn game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Winning side; `None` while playing and on stalemate
    pub fn winner(&self) -> Option<Color> {
        self.outcome.and_then(GameOutcome::winner)
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last_move()
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
        self.legal_destinations.clear();
    }
}
