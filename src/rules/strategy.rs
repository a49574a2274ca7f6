//! Scoring strategy trait for scoreboards and simulators.
//!
//! A presentation layer or a simulated bowler needs only this surface:
//! - Submit a roll
//! - Ask whether the game is over and how many pins are standing
//! - Read scores and rolls back out

use crate::core::ScoreError;
use crate::game::Game;

/// The scoring surface of a single-player game.
///
/// ## Implementation Notes
///
/// - `score`: must leave the game unchanged when it returns an error
/// - `cumulative_scores` / `rolls_per_frame`: one entry per frame, owned copies
/// - `pins_standing`: `None` exactly when `is_resolved` is true
pub trait ScoringStrategy {
    /// Score one roll.
    fn score(&mut self, pins: i32) -> Result<(), ScoreError>;

    /// Check if the game accepts no more rolls.
    fn is_resolved(&self) -> bool;

    /// Cumulative score through each frame, `None` where not yet known.
    fn cumulative_scores(&self) -> Vec<Option<u32>>;

    /// Cumulative score through the last scorable frame.
    fn current_score(&self) -> Option<u32>;

    /// Rolls made in each frame.
    fn rolls_per_frame(&self) -> Vec<Vec<u8>>;

    /// The largest pin count the next roll may take.
    fn pins_standing(&self) -> Option<u8>;

    // === Convenience Methods ===

    /// Score rolls in order, stopping at the first error.
    ///
    /// Returns how many rolls were accepted.
    fn score_all<I>(&mut self, rolls: I) -> Result<usize, ScoreError>
    where
        I: IntoIterator<Item = i32>,
        Self: Sized,
    {
        let mut accepted = 0;
        for pins in rolls {
            self.score(pins)?;
            accepted += 1;
        }
        Ok(accepted)
    }
}

impl ScoringStrategy for Game {
    fn score(&mut self, pins: i32) -> Result<(), ScoreError> {
        Game::score(self, pins)
    }

    fn is_resolved(&self) -> bool {
        Game::is_resolved(self)
    }

    fn cumulative_scores(&self) -> Vec<Option<u32>> {
        Game::cumulative_scores(self).to_vec()
    }

    fn current_score(&self) -> Option<u32> {
        Game::current_score(self)
    }

    fn rolls_per_frame(&self) -> Vec<Vec<u8>> {
        Game::rolls_per_frame(self)
    }

    fn pins_standing(&self) -> Option<u8> {
        Game::pins_standing(self)
    }
}
