//! Turn sequencing and the command/query surface.

use crate::board::{Board, SIDE};
use crate::engine::SearchEngine;
use crate::error::GameError;
use crate::types::{Cell, GameConfig, GameResult, Mode, Player, Strategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Read-only view of the game handed to the presentation layer.
///
/// The presentation layer polls this after each command and redraws; it
/// never mutates the board directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The grid, row-major.
    pub grid: [[Cell; SIDE]; SIDE],
    /// The player whose turn it is.
    pub current_player: Player,
    /// Result derived from the grid.
    pub status: GameResult,
    /// Active game mode.
    pub mode: Mode,
}

/// The turn-controller state machine.
///
/// Owns the live board and the engine for the automated seat. The result
/// is always recomputed from the board, never cached, so it cannot go
/// stale. All commands reject with a typed error and leave state
/// untouched when invoked in the wrong state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    engine: SearchEngine,
    current_player: Player,
    mode: Mode,
}

impl Game {
    /// Creates a game with the default configuration: human versus a
    /// minimax engine playing noughts.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Creates a game from an explicit configuration.
    #[instrument]
    pub fn with_config(config: GameConfig) -> Self {
        info!(mode = %config.mode, strategy = %config.strategy, "starting new game");
        Self {
            board: Board::new(),
            engine: SearchEngine::new(config.strategy, config.ai_player),
            current_player: Player::Cross,
            mode: config.mode,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Query surface
    // ─────────────────────────────────────────────────────────────

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the result derived from the current board.
    pub fn status(&self) -> GameResult {
        self.board.final_state()
    }

    /// Checks whether the game has reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.status() != GameResult::InProgress
    }

    /// Returns the active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the engine's strategy.
    pub fn strategy(&self) -> Strategy {
        self.engine.strategy()
    }

    /// Returns the player the engine acts as.
    pub fn ai_player(&self) -> Player {
        self.engine.player()
    }

    /// Returns a snapshot of grid, current player, status, and mode.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.board.grid(),
            current_player: self.current_player,
            status: self.status(),
            mode: self.mode,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Command surface
    // ─────────────────────────────────────────────────────────────

    /// Applies a move for the current player.
    ///
    /// On success the turn passes to the opponent unless the move ended
    /// the game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] once the game is over, or wraps
    /// the board's rejection of the cell. The game is unchanged on error.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        self.board.mark(row, col, self.current_player)?;
        debug!(row, col, "move accepted");

        match self.status() {
            GameResult::InProgress => {
                self.current_player = self.current_player.opponent();
            }
            result => {
                info!(?result, "game over");
            }
        }
        Ok(())
    }

    /// Asks the engine for a move and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] once the game is over,
    /// [`GameError::WrongMode`] outside [`Mode::HumanVsAi`], and
    /// [`GameError::NotAiTurn`] when it is the human seat's turn.
    #[instrument(skip(self))]
    pub fn request_ai_move(&mut self) -> Result<(usize, usize), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.mode != Mode::HumanVsAi {
            return Err(GameError::WrongMode);
        }
        if self.current_player != self.engine.player() {
            return Err(GameError::NotAiTurn);
        }

        let (row, col) = self.engine.select_move(&self.board)?;
        self.apply_move(row, col)?;
        Ok((row, col))
    }

    /// Discards the board and starts over with crosses to move.
    ///
    /// Mode and engine configuration persist across resets.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("resetting game");
        self.board = Board::new();
        self.current_player = Player::Cross;
    }

    /// Switches the game mode. Takes effect immediately; does not reset
    /// game state.
    pub fn set_mode(&mut self, mode: Mode) {
        debug!(%mode, "mode changed");
        self.mode = mode;
    }

    /// Switches the engine strategy. Takes effect immediately; does not
    /// reset game state.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        debug!(%strategy, "strategy changed");
        self.engine.set_strategy(strategy);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
