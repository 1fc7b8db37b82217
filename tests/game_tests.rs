//! Tests for the turn-controller state machine.

use noughts::{
    Cell, Game, GameConfig, GameError, GameResult, Mode, MoveError, Player, Strategy,
};

/// Plays crosses to a top-row win: X X X / O O . / . . .
fn play_cross_win(game: &mut Game) {
    game.apply_move(0, 0).unwrap();
    game.apply_move(1, 0).unwrap();
    game.apply_move(0, 1).unwrap();
    game.apply_move(1, 1).unwrap();
    game.apply_move(0, 2).unwrap();
}

fn human_vs_human() -> Game {
    Game::with_config(GameConfig {
        mode: Mode::HumanVsHuman,
        ..GameConfig::default()
    })
}

#[test]
fn test_win_ends_the_game() {
    let mut game = human_vs_human();
    play_cross_win(&mut game);
    assert_eq!(game.status(), GameResult::Win(Player::Cross));
    assert!(game.is_over());
}

#[test]
fn test_move_after_game_over_is_rejected() {
    let mut game = human_vs_human();
    play_cross_win(&mut game);

    let snapshot = game.snapshot();
    assert_eq!(game.apply_move(2, 2), Err(GameError::GameOver));
    // Rejected command leaves the game untouched.
    assert_eq!(game.snapshot(), snapshot);
}

#[test]
fn test_out_of_range_move_surfaces_board_error() {
    let mut game = human_vs_human();
    assert_eq!(
        game.apply_move(5, 1),
        Err(GameError::Move(MoveError::OutOfRange { row: 5, col: 1 }))
    );
    assert!(game.board().is_empty());
    assert_eq!(game.current_player(), Player::Cross);
}

#[test]
fn test_ai_move_rejected_in_human_vs_human() {
    let mut game = human_vs_human();
    assert_eq!(game.request_ai_move(), Err(GameError::WrongMode));
}

#[test]
fn test_ai_move_rejected_on_human_turn() {
    let mut game = Game::new();
    // Crosses (the human seat) to move.
    assert_eq!(game.request_ai_move(), Err(GameError::NotAiTurn));
    assert!(game.board().is_empty());
}

#[test]
fn test_ai_responds_after_human_move() {
    let mut game = Game::new();
    game.apply_move(1, 1).unwrap();

    let (row, col) = game.request_ai_move().unwrap();
    assert_eq!(game.snapshot().grid[row][col], Cell::Marked(Player::Nought));
    assert_eq!(game.current_player(), Player::Cross);
}

#[test]
fn test_ai_move_after_game_over_is_rejected() {
    let mut game = Game::new();
    game.set_mode(Mode::HumanVsHuman);
    play_cross_win(&mut game);
    game.set_mode(Mode::HumanVsAi);
    assert_eq!(game.request_ai_move(), Err(GameError::GameOver));
}

#[test]
fn test_minimax_opponent_never_loses() {
    // A center-then-greedy human cannot beat the minimax seat; every
    // game ends in a draw or a noughts win.
    let mut game = Game::new();
    loop {
        match game.status() {
            GameResult::InProgress => {}
            result => {
                assert_ne!(result, GameResult::Win(Player::Cross));
                break;
            }
        }
        if game.current_player() == Player::Cross {
            let (row, col) = game.board().empty_cells()[0];
            game.apply_move(row, col).unwrap();
        } else {
            game.request_ai_move().unwrap();
        }
    }
}

#[test]
fn test_reset_clears_board_but_keeps_config() {
    let mut game = Game::with_config(GameConfig {
        mode: Mode::HumanVsHuman,
        strategy: Strategy::Random,
        ai_player: Player::Nought,
    });
    game.apply_move(0, 0).unwrap();
    game.apply_move(1, 1).unwrap();

    game.reset();
    assert!(game.board().is_empty());
    assert_eq!(game.current_player(), Player::Cross);
    assert_eq!(game.status(), GameResult::InProgress);
    assert_eq!(game.mode(), Mode::HumanVsHuman);
    assert_eq!(game.strategy(), Strategy::Random);
    assert_eq!(game.ai_player(), Player::Nought);
}

#[test]
fn test_setters_do_not_touch_game_state() {
    let mut game = Game::new();
    game.apply_move(0, 0).unwrap();

    game.set_mode(Mode::HumanVsHuman);
    game.set_strategy(Strategy::Random);
    assert_eq!(game.board().marked(), 1);
    assert_eq!(game.current_player(), Player::Nought);
    assert_eq!(game.mode(), Mode::HumanVsHuman);
    assert_eq!(game.strategy(), Strategy::Random);
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut game = Game::new();
    game.apply_move(0, 0).unwrap();

    let snapshot = game.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: noughts::Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
    assert_eq!(restored.grid[0][0], Cell::Marked(Player::Cross));
}

#[test]
fn test_draw_game() {
    // X O X
    // X O O
    // O X X
    let mut game = human_vs_human();
    for (row, col) in [
        (0, 0), // X
        (0, 1), // O
        (0, 2), // X
        (1, 1), // O
        (1, 0), // X
        (1, 2), // O
        (2, 1), // X
        (2, 0), // O
        (2, 2), // X
    ] {
        game.apply_move(row, col).unwrap();
    }
    assert_eq!(game.status(), GameResult::Draw);
    assert!(game.is_over());
}
