//! Terminal-state evaluation.
//!
//! Pure functions over [`Board`], separated from board storage so the
//! engine and the controller share one evaluation path.

use crate::board::Board;
use crate::types::{Cell, GameResult, Player};
use tracing::instrument;

/// The eight winning lines in evaluation order: columns, rows, then the
/// descending and ascending diagonals. The first line matched wins; a
/// legal game has at most one, but the order is fixed so evaluation is
/// reproducible.
const LINES: [[(usize, usize); 3]; 8] = [
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line (in evaluation order) fully
/// marked by one player, `None` otherwise.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let cell = board.cell(a.0, a.1);
        if let Some(Cell::Marked(player)) = cell
            && cell == board.cell(b.0, b.1)
            && cell == board.cell(c.0, c.1)
        {
            return Some(player);
        }
    }
    None
}

/// Evaluates the board for a terminal state.
///
/// A winning line beats a full board: a board that is both full and won
/// reports the win.
#[instrument(skip(board))]
pub fn final_state(board: &Board) -> GameResult {
    if let Some(player) = winner(board) {
        return GameResult::Win(player);
    }
    if board.is_full() {
        return GameResult::Draw;
    }
    GameResult::InProgress
}
