//! Simulated bowler configuration.

use serde::{Deserialize, Serialize};

/// How a simulated bowler rolls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BowlerConfig {
    /// Random seed. Same seed produces the same games.
    pub seed: u64,

    /// Chance of knocking down a full rack in one roll (0.0 - 1.0).
    pub strike_chance: f64,

    /// Chance of clearing the pins left standing after a first roll (0.0 - 1.0).
    pub spare_chance: f64,
}

impl Default for BowlerConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            strike_chance: 0.2,
            spare_chance: 0.3,
        }
    }
}

impl BowlerConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom strike chance, clamped to `[0, 1]`.
    pub fn with_strike_chance(mut self, chance: f64) -> Self {
        self.strike_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Create a new config with custom spare chance, clamped to `[0, 1]`.
    pub fn with_spare_chance(mut self, chance: f64) -> Self {
        self.spare_chance = chance.clamp(0.0, 1.0);
        self
    }
}
