//! End-to-end scoring tests for complete and partial games.

use rust_bowling::{FrameId, Game, InvalidRoll, ScoreError, ScoringStrategy, FRAME_COUNT};

fn play(rolls: &[i32]) -> Game {
    Game::from_rolls(rolls.iter().copied()).unwrap()
}

// =============================================================================
// Complete Games
// =============================================================================

/// The worked example: mixed open frames, spares and strikes.
#[test]
fn test_example_game() {
    let game = play(&[1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 1, 7, 3, 6, 4, 10, 2, 8, 6]);

    let expected: [Option<u32>; FRAME_COUNT] = [5, 14, 29, 49, 60, 61, 77, 97, 117, 133].map(Some);
    assert_eq!(game.cumulative_scores(), expected);
    assert!(game.is_resolved());
    assert_eq!(game.current_score(), Some(133));
    assert_eq!(game.final_score(), Some(133));
    assert_eq!(game.rolls_per_frame()[9], vec![2, 8, 6]);
}

/// Twenty gutter balls score zero everywhere.
#[test]
fn test_gutter_game() {
    let game = play(&[0; 20]);

    assert_eq!(game.cumulative_scores(), [Some(0); FRAME_COUNT]);
    assert_eq!(game.final_score(), Some(0));
    assert!(game.rolls_per_frame().iter().all(|r| r == &vec![0, 0]));
}

/// Twelve strikes: frame k is worth 30 * k cumulatively.
#[test]
fn test_perfect_game() {
    let game = play(&[10; 12]);

    let expected: Vec<Option<u32>> = (1..=10).map(|k| Some(30 * k)).collect();
    assert_eq!(game.cumulative_scores().to_vec(), expected);
    assert_eq!(game.final_score(), Some(300));
    assert_eq!(game.rolls_per_frame()[9], vec![10, 10, 10]);
}

/// All spares of 5/5 with a final 5: every frame worth 15.
#[test]
fn test_all_spares() {
    let game = play(&[5; 21]);

    let expected: Vec<Option<u32>> = (1..=10).map(|k| Some(15 * k)).collect();
    assert_eq!(game.cumulative_scores().to_vec(), expected);
    assert_eq!(game.final_score(), Some(150));
}

/// A tenth-frame strike allows two bonus rolls that need not sum to 10.
#[test]
fn test_tenth_frame_bonus_rolls_are_independent() {
    let mut rolls = vec![0; 18];
    rolls.extend([10, 9, 8]);
    let game = play(&rolls);

    assert!(game.is_resolved());
    assert_eq!(game.final_score(), Some(27));
}

/// An open tenth frame ends after two rolls.
#[test]
fn test_open_tenth_frame_ends_game() {
    let mut rolls = vec![0; 18];
    rolls.extend([3, 4]);
    let mut game = play(&rolls);

    assert!(game.is_resolved());
    assert_eq!(game.final_score(), Some(7));
    assert_eq!(game.score(1), Err(ScoreError::GameOver));
}

// =============================================================================
// Bonus Deferral
// =============================================================================

/// A strike stays unscored until two more rolls, spanning frames if needed.
#[test]
fn test_strike_waits_for_two_rolls() {
    let mut game = Game::new();
    game.score(10).unwrap();
    assert_eq!(game.cumulative_scores()[0], None);

    game.score(10).unwrap();
    assert_eq!(game.cumulative_scores()[0], None);

    game.score(4).unwrap();
    assert_eq!(game.cumulative_scores()[0], Some(24));
    assert_eq!(game.cumulative_scores()[1], None);

    game.score(3).unwrap();
    assert_eq!(game.cumulative_scores()[..3], [Some(24), Some(41), Some(48)]);
}

/// A spare stays unscored until exactly one more roll.
#[test]
fn test_spare_waits_for_one_roll() {
    let mut game = Game::new();
    game.score(7).unwrap();
    game.score(3).unwrap();
    assert_eq!(game.current_score(), None);

    game.score(2).unwrap();
    assert_eq!(game.cumulative_scores()[0], Some(12));
    assert_eq!(game.current_score(), Some(12));
}

/// Queries do not change anything.
#[test]
fn test_queries_are_idempotent() {
    let game = play(&[10, 3, 7, 4]);

    assert_eq!(game.cumulative_scores(), game.cumulative_scores());
    assert_eq!(game.current_score(), game.current_score());
    assert_eq!(game.rolls_per_frame(), game.rolls_per_frame());
    assert_eq!(game.snapshot(), game.snapshot());
}

// =============================================================================
// Errors
// =============================================================================

/// Out-of-range counts are rejected before anything changes.
#[test]
fn test_out_of_range_rejected() {
    let mut game = play(&[4]);
    let before = game.clone();

    assert_eq!(
        game.score(-1),
        Err(ScoreError::InvalidInput(InvalidRoll::Negative { pins: -1 }))
    );
    assert_eq!(
        game.score(11),
        Err(ScoreError::InvalidInput(InvalidRoll::AboveMax { pins: 11 }))
    );
    assert_eq!(
        game.score(7),
        Err(ScoreError::InvalidInput(InvalidRoll::FrameOverflow {
            pins: 7,
            already_hit: 4,
        }))
    );
    assert_eq!(game, before);

    game.score(6).unwrap();
    assert_eq!(game.rolls_per_frame()[0], vec![4, 6]);
}

/// Every roll after the end is rejected as game over.
#[test]
fn test_game_over_after_perfect_game() {
    let mut game = play(&[10; 12]);

    for pins in [0, 10, -1, 11] {
        assert_eq!(game.score(pins), Err(ScoreError::GameOver));
    }
    assert_eq!(game.final_score(), Some(300));
}

/// Strategy seam: stops at the first rejected roll.
#[test]
fn test_score_all_reports_accepted_count() {
    let mut game = Game::new();
    assert_eq!(game.score_all([1, 2, 3]), Ok(3));
    assert!(game.score_all([8, 1]).unwrap_err().is_invalid_input());
    assert_eq!(game.current_frame(), FrameId::new(1));
    assert_eq!(game.rolls_per_frame()[1], vec![3]);
}

/// The cursor only ever moves forward.
#[test]
fn test_cursor_is_monotonic() {
    let mut game = Game::new();
    let mut last = game.current_frame();

    for pins in [10, 3, 7, 0, 0, 10, 10, 5, 5, 1, 8, 10, 10, 10, 10] {
        game.score(pins).unwrap();
        assert!(game.current_frame() >= last);
        last = game.current_frame();
    }
    assert_eq!(last, FrameId::LAST);
}
