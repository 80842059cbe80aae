//! Game lifecycle integration tests.
//!
//! These tests drive `GameState` the way a front end would: key presses in,
//! snapshots out.

use rust_2048::board::Board;
use rust_2048::core::{Command, Direction, GameConfig, GameError, GameState};

fn game_with(rows: &[[u32; 4]], seed: u64) -> GameState {
    GameState::with_board(Board::from_rows(rows).unwrap(), seed)
}

/// Play a deterministic cycle of moves until the game ends or `max_turns` pass.
fn play_out(game: &mut GameState, max_turns: usize) {
    let order = [Direction::Down, Direction::Left, Direction::Right, Direction::Up];
    for turn in 0..max_turns {
        if game.is_over() {
            break;
        }
        let moved = game.apply_move(order[turn % 4]);
        if !moved {
            // fall back to any legal move so the game keeps progressing
            if let Some(&dir) = game.legal_moves().first() {
                assert!(game.apply_move(dir));
            }
        }
    }
}

// =============================================================================
// Initialization Tests
// =============================================================================

/// A new game has exactly two 2-or-4 tiles, zero score and is not over.
#[test]
fn test_initialize_scenario() {
    for seed in 0..50 {
        let game = GameState::new(GameConfig::default(), seed).unwrap();
        let snap = game.snapshot();

        let tiles: Vec<u32> = snap.grid.iter().flatten().copied().filter(|&v| v != 0).collect();
        assert_eq!(tiles.len(), 2, "seed {seed}");
        assert!(tiles.iter().all(|&v| v == 2 || v == 4));
        assert_eq!(snap.score, 0);
        assert!(!snap.is_over);
    }
}

/// Custom dimensions and tile counts are honoured.
#[test]
fn test_custom_config() {
    let config = GameConfig::new(3, 5).with_initial_tiles(4);
    let game = GameState::new(config, 11).unwrap();
    let snap = game.snapshot();

    assert_eq!(snap.rows(), 3);
    assert_eq!(snap.cols(), 5);
    assert_eq!(snap.tile_count(), 4);
}

/// Misconfigured grids fail at construction.
#[test]
fn test_misconfiguration_is_fatal() {
    for config in [
        GameConfig::new(0, 0),
        GameConfig::new(0, 4),
        GameConfig::new(4, 0),
        GameConfig::new(1, 1).with_initial_tiles(2),
        GameConfig::new(usize::MAX, 2),
    ] {
        assert!(matches!(
            GameState::new(config, 0),
            Err(GameError::InvalidConfig(_))
        ));
    }
}

// =============================================================================
// Turn Tests
// =============================================================================

/// A changed move spawns exactly one tile.
#[test]
fn test_changed_move_spawns_one_tile() {
    let mut game = game_with(&[[0, 0, 0, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 4]], 1);

    assert!(game.apply_move(Direction::Left));
    assert_eq!(game.snapshot().tile_count(), 3);
    assert_eq!(game.score(), 0);
}

/// A no-op move leaves the snapshot byte-for-byte identical.
#[test]
fn test_noop_move_is_idempotent() {
    let mut game = game_with(&[[2, 4, 8, 16], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]], 1);
    let before = game.snapshot();
    let rng_before = game.rng_state();

    for _ in 0..3 {
        assert!(!game.apply_move(Direction::Up));
        assert!(!game.apply_move(Direction::Left));
        assert!(!game.apply_move(Direction::Right));
    }

    assert_eq!(game.snapshot(), before);
    // no spawn means no randomness consumed
    assert_eq!(game.rng_state(), rng_before);
}

/// Score grows by exactly the merge results of each move.
#[test]
fn test_score_is_sum_of_merges() {
    let mut game = game_with(&[[2, 2, 4, 4], [8, 8, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]], 3);

    assert!(game.apply_move(Direction::Left));
    // 2+2 -> 4, 4+4 -> 8, 8+8 -> 16
    assert_eq!(game.score(), 4 + 8 + 16);
}

/// Over a whole game the score never drops and matches the merges.
#[test]
fn test_score_accumulates_over_game() {
    let mut game = GameState::new(GameConfig::default(), 77).unwrap();
    let mut expected = 0u64;

    for turn in 0..500 {
        if game.is_over() {
            break;
        }
        let dir = game.legal_moves()[turn % game.legal_moves().len()];
        let mut preview = game.board().clone();
        expected += preview.shift(dir).score_delta;

        let before = game.score();
        assert!(game.apply_move(dir));
        assert!(game.score() >= before);
        assert_eq!(game.score(), expected);
    }
}

/// Moves after game over are ignored.
#[test]
fn test_moves_after_game_over_are_ignored() {
    let mut game = game_with(&[[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 2]], 1);
    assert!(game.is_over());
    let before = game.snapshot();

    for dir in Direction::ALL {
        assert!(!game.apply_move(dir));
    }
    assert_eq!(game.snapshot(), before);
}

/// A long game reaches a terminal state whose flag matches the board.
#[test]
fn test_game_reaches_terminal_state() {
    let mut game = GameState::new(GameConfig::default(), 2024).unwrap();
    play_out(&mut game, 100_000);

    assert!(game.is_over());
    assert!(game.board().is_terminal());
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.board().empty_count(), 0);
}

/// Grid values stay 0 or powers of two >= 2 throughout play.
#[test]
fn test_grid_invariant_holds_during_play() {
    let mut game = GameState::new(GameConfig::new(5, 3), 8).unwrap();
    for turn in 0..300 {
        game.apply_move(Direction::ALL[(turn * 7) % 4]);
        for &v in game.board().cells() {
            assert!(v == 0 || (v >= 2 && v.is_power_of_two()), "bad value {v}");
        }
    }
}

// =============================================================================
// Reset and Command Tests
// =============================================================================

/// Reset mid-game restores a fresh two-tile grid and zero score.
#[test]
fn test_reset_mid_game() {
    let mut game = GameState::new(GameConfig::default(), 5).unwrap();
    play_out(&mut game, 40);
    assert!(game.score() > 0);

    game.reset();
    let snap = game.snapshot();
    assert_eq!(snap.score, 0);
    assert_eq!(snap.tile_count(), 2);
    assert!(!snap.is_over);
}

/// Reset after game over makes the game playable again.
#[test]
fn test_reset_after_game_over() {
    let mut game = game_with(&[[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 2]], 1);
    assert!(game.is_over());

    game.reset();
    assert!(!game.is_over());
    assert!(!game.legal_moves().is_empty());
}

/// Key presses flow through `Command` into the game.
#[test]
fn test_key_presses() {
    let mut game = game_with(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]], 4);

    let cmd = Command::from_key("a").unwrap();
    assert!(game.apply_command(cmd));
    assert_eq!(game.score(), 4);

    assert!(Command::from_key("Escape").is_err());

    assert!(game.apply_command(Command::from_key("R").unwrap()));
    assert_eq!(game.score(), 0);
}

/// Two games with one seed and one move list are identical.
#[test]
fn test_replay_is_deterministic() {
    let moves: Vec<Direction> = (0..200).map(|i| Direction::ALL[(i * 3 + i / 5) % 4]).collect();

    let run = |seed| {
        let mut game = GameState::new(GameConfig::default(), seed).unwrap();
        for &dir in &moves {
            game.apply_move(dir);
        }
        game.snapshot()
    };

    assert_eq!(run(31), run(31));
}
