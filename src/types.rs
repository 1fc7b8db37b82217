//! Core domain types for noughts and crosses.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// Crosses (goes first).
    Cross,
    /// Noughts (goes second).
    Nought,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    /// Returns the conventional player number: 1 for crosses, 2 for noughts.
    pub fn number(self) -> u8 {
        match self {
            Player::Cross => 1,
            Player::Nought => 2,
        }
    }

    /// Returns the mark symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::Cross => 'X',
            Player::Nought => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell marked by a player.
    Marked(Player),
}

/// Outcome of evaluating a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Game is ongoing.
    InProgress,
    /// A player has three in a row.
    Win(Player),
    /// Board is full with no winner.
    Draw,
}

/// Who the second seat is played by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Two humans alternating at the same board.
    HumanVsHuman,
    /// One human seat, one engine seat.
    HumanVsAi,
}

impl Mode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::HumanVsHuman => Mode::HumanVsAi,
            Mode::HumanVsAi => Mode::HumanVsHuman,
        }
    }
}

/// Move-selection strategy for the engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Uniform choice over the empty cells.
    Random,
    /// Exhaustive game-tree search.
    Minimax,
}

/// Configuration for a game: mode, engine strategy, and which seat the engine plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Game mode.
    pub mode: Mode,
    /// Engine strategy.
    pub strategy: Strategy,
    /// The player the engine acts as.
    pub ai_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::HumanVsAi,
            strategy: Strategy::Minimax,
            ai_player: Player::Nought,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_round_trip() {
        assert_eq!(Player::Cross.opponent(), Player::Nought);
        assert_eq!(Player::Nought.opponent().opponent(), Player::Nought);
    }

    #[test]
    fn test_player_numbers() {
        assert_eq!(Player::Cross.number(), 1);
        assert_eq!(Player::Nought.number(), 2);
    }

    #[test]
    fn test_mode_toggled() {
        assert_eq!(Mode::HumanVsHuman.toggled(), Mode::HumanVsAi);
        assert_eq!(Mode::HumanVsAi.toggled(), Mode::HumanVsHuman);
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.mode, Mode::HumanVsAi);
        assert_eq!(config.strategy, Strategy::Minimax);
        assert_eq!(config.ai_player, Player::Nought);
    }
}
