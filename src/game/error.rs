//! Error types for game module
//!
//! Engine rejections pass through unchanged; the session adds the failures
//! that only exist at its level.

use chess_engine::{ChessEngineError, PromotionChoice};

use crate::game::game_over::GameOverState;

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The game has finished; no further intents are accepted
    #[error("Game is over: {}", .state.message())]
    GameOver { state: GameOverState },

    /// Promotion piece not offered by the configured picker
    #[error("Promotion to {choice:?} is not offered")]
    PromotionChoiceUnavailable { choice: PromotionChoice },

    /// The engine refused the call
    #[error(transparent)]
    Engine(#[from] ChessEngineError),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
