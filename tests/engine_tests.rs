//! GameEngine integration tests: rules, lifecycle, and save/restore.

use std::sync::Arc;

use tictac_engine::{
    Board, Cell, EngineConfig, EngineSnapshot, FirstMover, GameEngine, GameResult, MoveOutcome,
    MoveRejection, Player, ScoreCache, WinningLine,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn engine_with(first: Player, seed: u64) -> GameEngine {
    let config = EngineConfig::default()
        .with_seed(seed)
        .with_first_mover(FirstMover::Fixed(first));
    GameEngine::with_cache(config, ScoreCache::shared())
}

/// Engine positioned on `grid` with `player` to move.
fn engine_on(grid: &str, player: Player) -> GameEngine {
    let mut engine = engine_with(player, 1);
    engine.set_board(Board::from_grid(grid).unwrap());
    engine.set_current_player(player);
    engine
}

// =============================================================================
// Win Detection
// =============================================================================

#[test]
fn test_top_row_win() {
    init_tracing();
    let mut engine = engine_on("XX-------", Player::One);

    let outcome = engine.make_move(2).unwrap();

    assert!(outcome.is_game_over());
    let expected = WinningLine::new([0, 1, 2]);
    assert_eq!(
        outcome,
        MoveOutcome::GameOver {
            result: GameResult::PlayerOneWins,
            winning_line: expected,
        }
    );
    assert!(engine.is_over());
    assert_eq!(engine.result(), GameResult::PlayerOneWins);
    assert_eq!(engine.winning_line().unwrap().indices(), [0, 1, 2]);
}

#[test]
fn test_full_board_tie() {
    let mut engine = engine_on("XOXXOOOX-", Player::One);

    let outcome = engine.make_move(8).unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::GameOver {
            result: GameResult::Tie,
            winning_line: None,
        }
    );
    assert!(engine.is_over());
    assert_eq!(engine.winning_line(), None);
}

#[test]
fn test_diagonal_win() {
    let mut engine = engine_on("X---X----", Player::One);

    engine.make_move(8).unwrap();

    assert_eq!(engine.result(), GameResult::PlayerOneWins);
    assert_eq!(engine.winning_line().unwrap().indices(), [0, 4, 8]);
}

#[test]
fn test_computer_win_is_recorded() {
    let mut engine = engine_on("XX-OO-X--", Player::Two);

    engine.make_move(5).unwrap();

    assert_eq!(engine.result(), GameResult::PlayerTwoWins);
    assert_eq!(engine.winning_line().unwrap().indices(), [3, 4, 5]);
}

#[test]
fn test_non_winning_move_continues() {
    let mut engine = engine_on("XX-------", Player::One);

    let outcome = engine.make_move(5).unwrap();

    assert_eq!(outcome, MoveOutcome::InProgress);
    assert!(!engine.is_over());
    assert_eq!(engine.result(), GameResult::Continue);
    assert_eq!(engine.winning_line(), None);
}

// =============================================================================
// Move Validation
// =============================================================================

#[test]
fn test_invalid_moves_leave_state_untouched() {
    let mut engine = engine_with(Player::One, 3);
    engine.make_move(4).unwrap();
    let before = engine.snapshot();

    for (position, reason) in [(4, MoveRejection::Occupied), (42, MoveRejection::OutOfRange)] {
        let err = engine.make_move(position).unwrap_err();
        assert_eq!(err.rejection(), Some(reason));
        assert_eq!(engine.snapshot(), before);
    }
}

#[test]
fn test_turns_alternate() {
    let mut engine = engine_with(Player::Two, 4);
    let mut expected = Player::Two;

    for position in [0, 1, 2, 4, 3, 5] {
        assert_eq!(engine.current_player(), expected);
        engine.make_move(position).unwrap();
        assert_eq!(engine.board().get(position), Some(Cell::Marked(expected)));
        expected = expected.opponent();
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_restart_gives_fresh_game() {
    let mut engine = engine_with(Player::One, 5);
    for position in [0, 3, 1, 4, 2] {
        engine.make_move(position).unwrap();
    }
    assert!(engine.is_over());

    engine.restart();

    assert!(engine.board().is_empty());
    assert!(!engine.is_over());
    assert_eq!(engine.result(), GameResult::Continue);
    assert_eq!(engine.winning_line(), None);
    assert!(engine.make_move(0).is_ok());
}

#[test]
fn test_random_first_mover_varies() {
    let config = EngineConfig::default().with_seed(99);
    let mut engine = GameEngine::with_cache(config, ScoreCache::shared());

    let mut ones = 0;
    for _ in 0..200 {
        engine.restart();
        if engine.current_player() == Player::One {
            ones += 1;
        }
    }

    assert!((60..140).contains(&ones), "Player One went first {ones}/200 times");
}

#[test]
fn test_same_seed_same_first_mover() {
    let a = GameEngine::with_cache(EngineConfig::default().with_seed(17), ScoreCache::shared());
    let b = GameEngine::with_cache(EngineConfig::default().with_seed(17), ScoreCache::shared());
    assert_eq!(a.current_player(), b.current_player());
}

#[test]
fn test_engines_share_process_cache() {
    let a = GameEngine::new(EngineConfig::default().with_seed(1));
    let b = GameEngine::new(EngineConfig::default().with_seed(2));
    assert!(Arc::ptr_eq(a.cache(), b.cache()));
}

// =============================================================================
// Save / Restore
// =============================================================================

#[test]
fn test_snapshot_round_trip_mid_game() {
    let mut engine = engine_with(Player::One, 6);
    engine.make_move(4).unwrap();
    let reply = engine.compute_computer_move().unwrap();
    engine.make_move(reply).unwrap();

    let bytes = engine.snapshot().to_bytes().unwrap();
    let mut restored = engine_with(Player::Two, 7);
    restored.restore(&EngineSnapshot::from_bytes(&bytes).unwrap());

    assert_eq!(restored.board(), engine.board());
    assert_eq!(restored.current_player(), engine.current_player());
    assert_eq!(restored.is_over(), engine.is_over());
    assert_eq!(restored.result(), engine.result());
    assert_eq!(restored.winning_line(), engine.winning_line());
}

#[test]
fn test_snapshot_round_trip_finished_game() {
    let mut engine = engine_with(Player::One, 8);
    for position in [0, 3, 4, 5, 8] {
        engine.make_move(position).unwrap();
    }
    assert!(engine.is_over());

    let json = serde_json::to_string(&engine.snapshot()).unwrap();
    let snapshot: EngineSnapshot = serde_json::from_str(&json).unwrap();

    let mut restored = engine_with(Player::One, 9);
    restored.restore(&snapshot);

    assert_eq!(restored.snapshot(), engine.snapshot());
    assert_eq!(restored.winning_line().unwrap().indices(), [0, 4, 8]);
    assert!(restored.make_move(1).is_err());
}

#[test]
fn test_restored_game_plays_on() {
    let mut source = engine_with(Player::One, 10);
    source.make_move(0).unwrap();
    source.make_move(4).unwrap();
    source.make_move(1).unwrap();

    let mut restored = engine_with(Player::One, 11);
    restored.restore(&source.snapshot());

    assert_eq!(restored.current_player(), Player::Two);
    assert_eq!(restored.compute_computer_move().unwrap(), 2);
}

#[test]
fn test_restored_game_replays_random_openings() {
    let mut source = engine_with(Player::Two, 21);
    source.compute_computer_move().unwrap();
    let snapshot = source.snapshot();

    let mut restored = engine_with(Player::Two, 22);
    restored.restore(&snapshot);

    let from_source: Vec<_> = (0..8)
        .map(|_| source.compute_computer_move().unwrap())
        .collect();
    let from_restored: Vec<_> = (0..8)
        .map(|_| restored.compute_computer_move().unwrap())
        .collect();
    assert_eq!(from_source, from_restored);
}

#[test]
fn test_snapshot_with_invalid_line_is_rejected() {
    let mut engine = engine_with(Player::One, 13);
    for position in [0, 3, 1, 4, 2] {
        engine.make_move(position).unwrap();
    }
    let json = serde_json::to_string(&engine.snapshot()).unwrap();
    let tampered = json.replace("[0,1,2]", "[0,1,3]");
    assert_ne!(json, tampered);

    assert!(serde_json::from_str::<EngineSnapshot>(&tampered).is_err());
}

#[test]
fn test_field_setters_restore_state() {
    let mut engine = engine_with(Player::One, 12);
    engine.set_board(Board::from_grid("XXXOO----").unwrap());
    engine.set_current_player(Player::Two);
    engine.set_over(true);
    engine.set_result(GameResult::PlayerOneWins);
    engine.set_winning_line(WinningLine::new([0, 1, 2]));

    assert!(engine.is_over());
    assert_eq!(engine.result(), GameResult::PlayerOneWins);
    assert_eq!(
        engine.make_move(5).unwrap_err().rejection(),
        Some(MoveRejection::GameOver)
    );
}
