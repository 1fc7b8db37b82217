//! Noughts and crosses game core with an adversarial move-selection engine.
//!
//! Three components, leaves first:
//!
//! - [`Board`]: the 3x3 grid, its single mutation path, and terminal-state
//!   detection.
//! - [`SearchEngine`]: produces a move for the automated seat from a board
//!   snapshot, either uniformly at random or by exhaustive minimax.
//! - [`Game`]: the turn-controller state machine sequencing moves, detecting
//!   game over, and exposing the [`Snapshot`] query surface.
//!
//! The crate holds no rendering or input-handling concept: a presentation
//! layer translates user input into cell coordinates, drives the command
//! surface, and redraws from snapshots.
//!
//! # Example
//!
//! ```
//! use noughts::{Game, GameResult};
//!
//! # fn main() -> Result<(), noughts::GameError> {
//! let mut game = Game::new();
//! game.apply_move(1, 1)?;            // human plays the center
//! game.request_ai_move()?;
//! assert_eq!(game.status(), GameResult::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod game;
mod rules;
mod types;

pub use board::{Board, CELLS, SIDE};
pub use engine::{SearchEngine, minimax};
pub use error::{EngineError, GameError, MoveError};
pub use game::{Game, Snapshot};
pub use rules::{final_state, winner};
pub use types::{Cell, GameConfig, GameResult, Mode, Player, Strategy};
