//! Board geometry constants
//!
//! Rows run from 0 (Black's back rank) to 7 (White's back rank); columns from
//! 0 (file a) to 7 (file h).

use crate::types::PieceKind;

pub const BOARD_SIZE: u8 = 8;

/// Back rank layout, column 0 to column 7
pub const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const WHITE_BACK_ROW: u8 = 7;
pub const BLACK_BACK_ROW: u8 = 0;
pub const WHITE_PAWN_ROW: u8 = 6;
pub const BLACK_PAWN_ROW: u8 = 1;

// Castling columns
pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const KINGSIDE_KING_DEST_COL: u8 = 6;
pub const QUEENSIDE_KING_DEST_COL: u8 = 2;
pub const KINGSIDE_ROOK_DEST_COL: u8 = 5;
pub const QUEENSIDE_ROOK_DEST_COL: u8 = 3;

/// (d_row, d_col) unit steps
pub const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
