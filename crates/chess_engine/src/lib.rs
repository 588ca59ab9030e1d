//! Two-player chess rules engine
//!
//! Legal-move generation per piece kind, turn management, check / checkmate /
//! stalemate detection, and the special moves (castling, en passant, pawn
//! promotion) over an 8x8 mailbox board.
//!
//! # Module Structure
//!
//! - `types` - Squares, colors, piece kinds, pieces
//! - `board` - Board state, setup and observers
//! - `move_gen` - Pseudo-legal generation per piece kind, attack detection,
//!   and legality filtering by simulation
//! - `api` - Select / move / promote and terminal-state queries
//! - `history`, `captured` - Move record and material tracking
//!
//! # Example
//!
//! ```
//! use chess_engine::{Board, Square};
//!
//! let mut board = Board::new();
//! assert!(board.select(Square::new(6, 4)));
//! assert!(board.move_to(Square::new(4, 4)));
//! assert_eq!(board.en_passant_target(), Some(Square::new(5, 4)));
//! ```

pub mod api;
pub mod board;
pub mod captured;
pub mod constants;
pub mod error;
pub mod history;
mod make_unmake;
pub mod move_gen;
pub mod types;


pub use api::new_game;
pub use board::Board;
pub use captured::CapturedPieces;
pub use error::{ChessEngineError, ChessEngineResult};
pub use history::{MoveHistory, MoveRecord};
pub use types::{Color, GameOutcome, Piece, PieceKind, PromotionChoice, Square, SpecialMove};
