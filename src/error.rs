//! Error types for the game core.
//!
//! Every error here is a rejected command, not a failure: the board and
//! controller are left exactly as they were, and the caller decides what
//! to do next.

use derive_more::{Display, From};

/// Errors from marking a cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The coordinates fall outside the 3x3 grid.
    #[display("position ({row}, {col}) is outside the 3x3 grid")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for MoveError {}

/// Errors from the move-selection engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EngineError {
    /// Move selection was invoked on a board with no empty cells.
    #[display("no moves available on a full board")]
    NoMovesAvailable,
}

impl std::error::Error for EngineError {}

/// Errors surfaced at the turn-controller boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, From)]
pub enum GameError {
    /// The board rejected the move.
    #[display("{_0}")]
    Move(MoveError),

    /// The engine could not select a move.
    #[display("{_0}")]
    Engine(EngineError),

    /// A move was submitted after the game reached a terminal state.
    #[display("game is already over")]
    GameOver,

    /// An engine move was requested while in human-vs-human mode.
    #[display("engine move requested in human vs human mode")]
    WrongMode,

    /// An engine move was requested when it is not the engine's turn.
    #[display("engine move requested out of turn")]
    NotAiTurn,
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(err) => Some(err),
            GameError::Engine(err) => Some(err),
            _ => None,
        }
    }
}
