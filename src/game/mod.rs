//! Game session module
//!
//! Sits between an input source (mouse clicks, a replay script) and the
//! rules engine. The engine owns every rule; this module only decides which
//! engine call a click means.
//!
//! # Module Organization
//!
//! - `session` - [`ChessGame`] and the click state machine
//! - `game_over` - [`GameOverState`] derived from the board outcome
//! - `view` - [`BoardView`] snapshot for renderers
//! - `error` - [`GameError`] for the explicit intent methods

pub mod error;
pub mod game_over;
pub mod session;
pub mod view;


pub use error::{GameError, GameResult};
pub use game_over::GameOverState;
pub use session::{ChessGame, ClickOutcome};
pub use view::{BoardView, PieceView};
