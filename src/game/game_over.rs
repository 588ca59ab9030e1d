//! Game over state tracking and result management
//!
//! Collapses the engine's [`GameOutcome`] into the four states a results
//! screen distinguishes.
//!
//! ```text
//! Playing → WhiteWon / BlackWon / Stalemate
//!         → WhiteWonByKingCapture / BlackWonByKingCapture
//! ```
//!
//! The king-capture states come from the engine's invariant guard and are
//! not reached through legal play.
//!
//! All non-Playing states are terminal.

use chess_engine::{Board, Color, GameOutcome};
use serde::Serialize;

/// The game's end state
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverState {
    /// Game is still in progress
    #[default]
    Playing,

    /// White won; Black is checkmated
    WhiteWon,

    /// Black won; White is checkmated
    BlackWon,

    /// Side to move has no legal move but is not in check
    Stalemate,

    /// White took the black king off the board
    WhiteWonByKingCapture,

    /// Black took the white king off the board
    BlackWonByKingCapture,
}

impl GameOverState {
    /// Derive the state from the board's recorded outcome
    pub fn from_board(board: &Board) -> Self {
        Self::from(board.outcome())
    }

    /// Returns `true` for any non-Playing state
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    /// Human-readable result message
    pub fn message(&self) -> &'static str {
        match self {
            GameOverState::Playing => "Game in progress",
            GameOverState::WhiteWon => "White wins by checkmate!",
            GameOverState::BlackWon => "Black wins by checkmate!",
            GameOverState::Stalemate => "Draw by stalemate",
            GameOverState::WhiteWonByKingCapture => "White wins by king capture!",
            GameOverState::BlackWonByKingCapture => "Black wins by king capture!",
        }
    }

    /// Winner of the game, `None` for draws or ongoing games
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameOverState::WhiteWon | GameOverState::WhiteWonByKingCapture => Some(Color::White),
            GameOverState::BlackWon | GameOverState::BlackWonByKingCapture => Some(Color::Black),
            GameOverState::Playing | GameOverState::Stalemate => None,
        }
    }
}

impl From<Option<GameOutcome>> for GameOverState {
    fn from(outcome: Option<GameOutcome>) -> Self {
        match outcome {
            None => GameOverState::Playing,
            Some(GameOutcome::Stalemate) => GameOverState::Stalemate,
            Some(GameOutcome::Checkmate { winner }) => match winner {
                Color::White => GameOverState::WhiteWon,
                Color::Black => GameOverState::BlackWon,
            },
            Some(GameOutcome::KingCaptured { winner }) => match winner {
                Color::White => GameOverState::WhiteWonByKingCapture,
                Color::Black => GameOverState::BlackWonByKingCapture,
            },
        }
    }
}
