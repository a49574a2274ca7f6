//! Simulated bowler that plays legal games.
//!
//! Used to exercise the engine with many realistic games, and as a
//! stand-in player for anything that drives a `ScoringStrategy`.

use tracing::debug;

use super::config::BowlerConfig;
use super::rng::RollRng;
use crate::core::{ScoreError, MAX_PINS};
use crate::game::Game;
use crate::rules::ScoringStrategy;

/// A bowler that picks pin counts at random.
#[derive(Clone, Debug)]
pub struct Bowler {
    config: BowlerConfig,
    rng: RollRng,
}

impl Bowler {
    /// Create a bowler seeded from its config.
    #[must_use]
    pub fn new(config: BowlerConfig) -> Self {
        let rng = RollRng::new(config.seed);
        Self { config, rng }
    }

    /// Create a bowler with an explicit RNG stream.
    #[must_use]
    pub fn with_rng(config: BowlerConfig, rng: RollRng) -> Self {
        Self { config, rng }
    }

    #[must_use]
    pub fn config(&self) -> &BowlerConfig {
        &self.config
    }

    /// Pick a pin count for a roll with `standing` pins up.
    ///
    /// Never exceeds `standing`.
    pub fn next_roll(&mut self, standing: u8) -> u8 {
        if standing == 0 {
            return 0;
        }

        let chance = if standing == MAX_PINS {
            self.config.strike_chance
        } else {
            self.config.spare_chance
        };

        if self.rng.gen_bool(chance) {
            standing
        } else {
            self.rng.pins_up_to(standing - 1)
        }
    }

    /// Roll until the game is over and return the final score.
    pub fn play<S: ScoringStrategy>(&mut self, game: &mut S) -> Result<u32, ScoreError> {
        while let Some(standing) = game.pins_standing() {
            let pins = self.next_roll(standing);
            game.score(i32::from(pins))?;
        }

        // Every frame of a resolved game is scorable.
        Ok(game.current_score().unwrap_or_default())
    }
}

/// Play `count` fresh games, each on its own forked RNG stream.
///
/// Returns the final scores in order.
pub fn simulate_games(config: &BowlerConfig, count: usize) -> Result<Vec<u32>, ScoreError> {
    let mut master = RollRng::new(config.seed);
    let mut scores = Vec::with_capacity(count);

    for index in 0..count {
        let mut bowler = Bowler::with_rng(config.clone(), master.fork());
        let mut game = Game::new();
        let score = bowler.play(&mut game)?;
        debug!(game = index, score, "simulated game");
        scores.push(score);
    }

    Ok(scores)
}
