//! Click-driven game session
//!
//! A click means different things depending on what the board is waiting
//! for:
//!
//! 1. **Promotion pending** - the configured picker row offers one piece per
//!    column; any other click is ignored.
//! 2. **Piece selected** - the click is a destination. If the move is
//!    illegal, the click is treated as a new selection instead. A click on
//!    nothing selectable leaves the current selection in place, and a click
//!    on the selected square itself drops it.
//! 3. **Nothing selected** - the click selects a piece of the side to move.
//!
//! Once the game is over every click is ignored.

use chess_engine::{Board, MoveRecord, Piece, PromotionChoice, Square};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::GameSettings;
use crate::game::error::{GameError, GameResult};
use crate::game::game_over::GameOverState;
use crate::game::view::BoardView;

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClickOutcome {
    /// A piece was selected; its destinations are on the board
    Selected(Square),
    /// The previous selection was dropped
    Deselected,
    /// A move completed and the turn passed
    Moved(MoveRecord),
    /// A pawn reached the last rank and waits for its piece
    PromotionPending(Square),
    /// The waiting pawn was replaced
    Promoted(Piece),
    /// The click had no effect
    Ignored,
}

/// One two-player game driven by clicks or explicit intents
#[derive(Debug, Clone)]
pub struct ChessGame {
    board: Board,
    settings: GameSettings,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}

impl ChessGame {
    /// Start a game from the standard position
    pub fn new(settings: GameSettings) -> Self {
        Self::with_board(Board::new(), settings)
    }

    /// Continue from an already set-up board
    pub fn with_board(board: Board, settings: GameSettings) -> Self {
        Self { board, settings }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn status(&self) -> GameOverState {
        GameOverState::from_board(&self.board)
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_board(&self.board)
    }

    /// Discard the current game and set up a fresh one
    pub fn new_game(&mut self) {
        self.board.reset();
        info!("[SESSION] New game started");
    }

    // ========================================================================
    // Explicit intents
    // ========================================================================

    pub fn select(&mut self, square: Square) -> GameResult<()> {
        self.ensure_playing()?;
        self.board.try_select(square)?;
        Ok(())
    }

    pub fn move_to(&mut self, square: Square) -> GameResult<()> {
        self.ensure_playing()?;
        self.board.try_move_to(square)?;
        Ok(())
    }

    /// Promote the waiting pawn; the choice must be one the picker offers
    pub fn promote(&mut self, choice: PromotionChoice) -> GameResult<()> {
        self.ensure_playing()?;
        if !self.settings.promotion_choices.contains(&choice) {
            return Err(GameError::PromotionChoiceUnavailable { choice });
        }
        self.board.try_promote(choice)?;
        Ok(())
    }

    fn ensure_playing(&self) -> GameResult<()> {
        let state = self.status();
        if state.is_game_over() {
            debug!("[SESSION] Intent rejected: {}", state.message());
            return Err(GameError::GameOver { state });
        }
        Ok(())
    }

    // ========================================================================
    // Clicks
    // ========================================================================

    /// Interpret a click on `square`
    pub fn handle_click(&mut self, square: Square) -> ClickOutcome {
        if self.board.game_over() {
            debug!("[SESSION] Click on {} ignored: game is over", square);
            return ClickOutcome::Ignored;
        }

        if self.board.promotion_pending().is_some() {
            return self.click_promotion_picker(square);
        }

        match self.board.selected() {
            Some(from) => self.click_destination(from, square),
            None => self.click_select(square),
        }
    }

    fn click_promotion_picker(&mut self, square: Square) -> ClickOutcome {
        if square.row() != self.settings.promotion_row {
            debug!("[SESSION] Click on {} ignored: waiting for promotion choice", square);
            return ClickOutcome::Ignored;
        }

        let Some(choice) = self.settings.promotion_choice_at(square.col()) else {
            debug!("[SESSION] Picker column {} holds no choice", square.col());
            return ClickOutcome::Ignored;
        };

        match self.board.try_promote(choice) {
            Ok(piece) => ClickOutcome::Promoted(piece),
            Err(e) => {
                debug!("[SESSION] Promotion rejected: {}", e);
                ClickOutcome::Ignored
            }
        }
    }

    fn click_destination(&mut self, from: Square, square: Square) -> ClickOutcome {
        if square == from {
            self.board.deselect();
            return ClickOutcome::Deselected;
        }

        match self.board.try_move_to(square) {
            Ok(record) => match self.board.promotion_pending() {
                Some(pending) => {
                    info!("[SESSION] Waiting for promotion choice at {}", pending);
                    ClickOutcome::PromotionPending(pending)
                }
                None => ClickOutcome::Moved(record),
            },
            Err(e) => {
                debug!("[SESSION] {} -> {} is not a move ({}), trying reselect", from, square, e);
                match self.board.try_select(square) {
                    Ok(_) => ClickOutcome::Selected(square),
                    Err(e) => {
                        debug!("[SESSION] Keeping selection at {}: {}", from, e);
                        ClickOutcome::Ignored
                    }
                }
            }
        }
    }

    fn click_select(&mut self, square: Square) -> ClickOutcome {
        match self.board.try_select(square) {
            Ok(_) => ClickOutcome::Selected(square),
            Err(e) => {
                debug!("[SESSION] Click on {} ignored: {}", square, e);
                ClickOutcome::Ignored
            }
        }
    }
}
