//! Public API for the chess engine
//!
//! The operations the session layer drives, implemented as `Board` methods:
//!
//! - `game` - Game lifecycle (new_game)
//! - `moves` - Selection, move execution, promotion
//! - `state` - Check, checkmate and stalemate queries

mod game;
mod moves;
mod state;

pub use game::new_game;
