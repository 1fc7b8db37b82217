//! Board storage and mutation.

use crate::error::MoveError;
use crate::rules;
use crate::types::{Cell, GameResult, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Cells per side of the board.
pub const SIDE: usize = 3;

/// Total cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// The 3x3 grid.
///
/// Cells are stored row-major. `marked` caches the number of non-empty
/// cells and must never diverge from the grid; it is re-checked after
/// every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
    marked: u8,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
            marked: 0,
        }
    }

    /// Returns the cell at the given coordinates, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= SIDE || col >= SIDE {
            return None;
        }
        Some(self.cells[row * SIDE + col])
    }

    /// Marks a cell for a player.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if either coordinate is outside
    /// `0..3`, or [`MoveError::CellOccupied`] if the cell already holds a
    /// mark. The board is unchanged on error.
    #[instrument(skip(self))]
    pub fn mark(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        if row >= SIDE || col >= SIDE {
            return Err(MoveError::OutOfRange { row, col });
        }
        let idx = row * SIDE + col;
        if self.cells[idx] != Cell::Empty {
            return Err(MoveError::CellOccupied { row, col });
        }

        self.cells[idx] = Cell::Marked(player);
        self.marked += 1;
        debug_assert_eq!(
            self.marked as usize,
            self.cells.iter().filter(|c| **c != Cell::Empty).count(),
            "marked cache diverged from grid occupancy"
        );
        Ok(())
    }

    /// Checks whether the cell at the given coordinates is empty.
    ///
    /// Out-of-range coordinates are not free.
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        matches!(self.cell(row, col), Some(Cell::Empty))
    }

    /// Returns the coordinates of all empty cells in row-major order.
    ///
    /// Recomputed on every call; the result is a plain snapshot, not a
    /// live cursor.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(idx, _)| (idx / SIDE, idx % SIDE))
            .collect()
    }

    /// Checks whether every cell is marked.
    pub fn is_full(&self) -> bool {
        self.marked as usize == CELLS
    }

    /// Checks whether no cell is marked.
    pub fn is_empty(&self) -> bool {
        self.marked == 0
    }

    /// Returns the number of marked cells.
    pub fn marked(&self) -> u8 {
        self.marked
    }

    /// Returns the grid as a 3x3 array of rows.
    pub fn grid(&self) -> [[Cell; SIDE]; SIDE] {
        let mut grid = [[Cell::Empty; SIDE]; SIDE];
        for (idx, cell) in self.cells.iter().enumerate() {
            grid[idx / SIDE][idx % SIDE] = *cell;
        }
        grid
    }

    /// Evaluates the board for a terminal state.
    pub fn final_state(&self) -> GameResult {
        rules::final_state(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIDE {
            for col in 0..SIDE {
                let symbol = match self.cells[row * SIDE + col] {
                    Cell::Empty => '.',
                    Cell::Marked(player) => player.symbol(),
                };
                write!(f, "{symbol}")?;
                if col < SIDE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < SIDE - 1 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}
