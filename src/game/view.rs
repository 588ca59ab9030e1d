//! Renderer-facing board snapshot
//!
//! [`BoardView`] copies everything a frontend draws out of the board in one
//! call, so a renderer never needs `&mut Board` and can ship the snapshot
//! over JSON.

use chess_engine::constants::BOARD_SIZE;
use chess_engine::{Board, Color, MoveRecord, Piece, PieceKind, Square};
use serde::Serialize;

use crate::game::game_over::GameOverState;

const SIZE: usize = BOARD_SIZE as usize;

/// What a renderer needs to draw one piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceView {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl From<Piece> for PieceView {
    fn from(piece: Piece) -> Self {
        Self {
            kind: piece.kind,
            color: piece.color,
            has_moved: piece.has_moved,
        }
    }
}

/// Snapshot of a board for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// `grid[row][col]`, row 0 is Black's back rank
    pub grid: [[Option<PieceView>; SIZE]; SIZE],
    pub current_turn: Color,
    pub selected: Option<Square>,
    pub legal_destinations: Vec<Square>,
    pub promotion_pending: Option<Square>,
    pub game_over: bool,
    pub winner: Option<Color>,
    /// Whether the side to move is in check
    pub in_check: bool,
    pub last_move: Option<MoveRecord>,
    /// Every completed move, oldest first
    pub moves: Vec<MoveRecord>,
    pub ply_count: usize,
    /// Positive when White has captured more material
    pub material_advantage: i32,
    pub status: GameOverState,
}

impl BoardView {
    pub fn from_board(board: &Board) -> Self {
        Self {
            grid: board.grid().map(|row| row.map(|cell| cell.map(PieceView::from))),
            current_turn: board.current_turn(),
            selected: board.selected(),
            legal_destinations: board.legal_destinations().to_vec(),
            promotion_pending: board.promotion_pending(),
            game_over: board.game_over(),
            winner: board.winner(),
            in_check: board.is_in_check(board.current_turn()),
            last_move: board.last_move().copied(),
            moves: board.history().iter().copied().collect(),
            ply_count: board.history().ply_count(),
            material_advantage: board.captured().material_advantage(),
            status: GameOverState::from_board(board),
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<PieceView> {
        self.grid[square.row() as usize][square.col() as usize]
    }

    /// One-line status for logs and the CLI
    pub fn summary(&self) -> String {
        if self.status.is_game_over() {
            return format!("{} after {} plies", self.status.message(), self.ply_count);
        }

        let mut line = format!("{:?} to move", self.current_turn);
        if self.in_check {
            line.push_str(" (in check)");
        }
        if let Some(square) = self.promotion_pending {
            line.push_str(&format!(", promotion pending at {}", square));
        }
        line.push_str(&format!(", {} plies played", self.ply_count));
        line
    }
}
