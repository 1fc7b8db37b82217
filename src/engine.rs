//! Adversarial move selection.
//!
//! The engine never touches the live board: it receives a snapshot and,
//! for the search, explores hypothetical positions on private clones.

use crate::board::Board;
use crate::error::EngineError;
use crate::types::{GameResult, Player, Strategy};
use rand::Rng;
use tracing::{debug, instrument};

/// Score for a crosses win, from the fixed crosses perspective.
const CROSS_WIN: i32 = 1;
/// Score for a noughts win.
const NOUGHT_WIN: i32 = -1;
/// Score for a draw.
const DRAW: i32 = 0;

/// Move-selection engine for one seat.
///
/// Dispatches on a [`Strategy`] value; the engine itself holds no search
/// state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    strategy: Strategy,
    player: Player,
}

impl SearchEngine {
    /// Creates an engine playing as `player` with the given strategy.
    pub fn new(strategy: Strategy, player: Player) -> Self {
        Self { strategy, player }
    }

    /// Returns the active strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the player this engine acts as.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Switches the active strategy.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Selects one empty cell of `board` as the engine's move.
    ///
    /// The random strategy draws from the thread-local generator; use
    /// [`select_move_with`](Self::select_move_with) to inject a seeded
    /// source for replayable selection.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoMovesAvailable`] if the board has no
    /// empty cells.
    pub fn select_move(&self, board: &Board) -> Result<(usize, usize), EngineError> {
        self.select_move_with(board, &mut rand::rng())
    }

    /// Selects a move using the provided random source.
    #[instrument(skip(self, board, rng), fields(strategy = %self.strategy, player = %self.player))]
    pub fn select_move_with<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<(usize, usize), EngineError> {
        if board.is_full() {
            return Err(EngineError::NoMovesAvailable);
        }
        match self.strategy {
            Strategy::Random => random_move(board, rng),
            Strategy::Minimax => {
                let (eval, best) = minimax(board, self.player);
                debug!(eval, ?best, "search complete");
                best.ok_or(EngineError::NoMovesAvailable)
            }
        }
    }
}

/// Picks a uniformly random empty cell.
fn random_move<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<(usize, usize), EngineError> {
    let cells = board.empty_cells();
    if cells.is_empty() {
        return Err(EngineError::NoMovesAvailable);
    }
    Ok(cells[rng.random_range(0..cells.len())])
}

/// Exhaustive minimax over the full game tree from `board`, with
/// `to_move` to play.
///
/// Scores are always from the crosses perspective: `Win(Cross) = +1`,
/// `Win(Nought) = -1`, `Draw = 0`. Crosses maximizes and noughts
/// minimizes, so the layer at the root follows `to_move` rather than
/// which seat the engine occupies.
///
/// Returns the evaluation and the best move; the move is `None` only at
/// a terminal position. Ties keep the first best move in row-major
/// order: only strictly better evaluations replace the current best.
pub fn minimax(board: &Board, to_move: Player) -> (i32, Option<(usize, usize)>) {
    match board.final_state() {
        GameResult::Win(Player::Cross) => return (CROSS_WIN, None),
        GameResult::Win(Player::Nought) => return (NOUGHT_WIN, None),
        GameResult::Draw => return (DRAW, None),
        GameResult::InProgress => {}
    }

    let maximising = to_move == Player::Cross;
    let mut best_eval = if maximising { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for (row, col) in board.empty_cells() {
        // Each branch explores its own clone; nothing in the tree is
        // shared or mutated after construction.
        let mut next = board.clone();
        next.mark(row, col, to_move)
            .expect("cell from empty_cells is empty");
        let (eval, _) = minimax(&next, to_move.opponent());
        if (maximising && eval > best_eval) || (!maximising && eval < best_eval) {
            best_eval = eval;
            best_move = Some((row, col));
        }
    }

    (best_eval, best_move)
}
