//! Core engine types
//!
//! Squares, colors, piece kinds and pieces. Pieces have no identity beyond the
//! square they occupy; the board owns them outright.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{BLACK_BACK_ROW, BLACK_PAWN_ROW, BOARD_SIZE, WHITE_BACK_ROW, WHITE_PAWN_ROW};
use crate::error::ChessEngineError;

/// Side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step (White moves toward row 0)
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row an unmoved pawn of this color starts on
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => WHITE_PAWN_ROW,
            Color::Black => BLACK_PAWN_ROW,
        }
    }

    pub fn back_row(self) -> u8 {
        match self {
            Color::White => WHITE_BACK_ROW,
            Color::Black => BLACK_BACK_ROW,
        }
    }
}

/// Kind of a chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Material value in pawns
    ///
    /// The king has no material value; it is never captured in a legal game.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }
}

/// Piece kinds a pawn may promote to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionChoice {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionChoice {
    pub const ALL: [PromotionChoice; 4] = [
        PromotionChoice::Queen,
        PromotionChoice::Rook,
        PromotionChoice::Bishop,
        PromotionChoice::Knight,
    ];
}

impl From<PromotionChoice> for PieceKind {
    fn from(choice: PromotionChoice) -> Self {
        match choice {
            PromotionChoice::Queen => PieceKind::Queen,
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Bishop => PieceKind::Bishop,
            PromotionChoice::Knight => PieceKind::Knight,
        }
    }
}

/// Board square as (row, column)
///
/// Row 0 is Black's back rank, row 7 is White's back rank. Every `Square`
/// is on the board: construction and deserialization both check the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "SquareRepr")]
pub struct Square {
    pub(crate) row: u8,
    pub(crate) col: u8,
}

/// Unchecked wire form of a [`Square`]
#[derive(Deserialize)]
struct SquareRepr {
    row: u8,
    col: u8,
}

impl TryFrom<SquareRepr> for Square {
    type Error = ChessEngineError;

    fn try_from(repr: SquareRepr) -> Result<Self, Self::Error> {
        Square::try_from((repr.row, repr.col))
    }
}

impl Square {
    /// Create a square from row and column indices
    ///
    /// Panics if either index is outside 0-7. Use `Square::try_from` for
    /// unchecked input.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "Square must be in range 0-7"
        );
        Square { row, col }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// The square `d_row`/`d_col` away, or `None` when that falls off the board
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Every square on the board in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = ChessEngineError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Square { row, col })
        } else {
            Err(ChessEngineError::InvalidSquare { row, col })
        }
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        (square.row, square.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A piece on the board
///
/// `has_moved` gates castling and is never reset once set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Square,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, position: Square) -> Self {
        Piece {
            kind,
            color,
            position,
            has_moved: false,
        }
    }
}

/// Move variants that carry side effects beyond relocating one piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpecialMove {
    #[default]
    None,
    DoublePawnPush,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    Promotion(PieceKind),
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    /// A king was taken off the board. Unreachable through legal play.
    KingCaptured { winner: Color },
}

impl GameOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate { winner } | GameOutcome::KingCaptured { winner } => Some(winner),
            GameOutcome::Stalemate => None,
        }
    }
}
