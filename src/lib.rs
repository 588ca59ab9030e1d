//! Two-player chess with a click-driven game session
//!
//! The rules live in the `chess_engine` workspace crate. This crate wraps a
//! [`chess_engine::Board`] in a session controller that turns square clicks
//! into select / move / promote calls, and adds the settings and logging
//! infrastructure the binary needs.
//!
//! # Module Organization
//!
//! - `core` - Settings persistence, logging bootstrap, core errors
//! - `game` - Session controller, game-over state, renderer snapshot

pub mod core;
pub mod game;

pub use crate::core::{GameSettings, CoreError, CoreResult};
pub use crate::game::{BoardView, ChessGame, ClickOutcome, GameError, GameOverState, GameResult};
