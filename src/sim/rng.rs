//! Deterministic random number generation for simulated bowlers.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Forkable**: Independent streams per simulated game
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use rust_bowling::sim::RollRng;
//!
//! let mut rng = RollRng::new(42);
//! let mut game_rng = rng.fork();
//!
//! let mut rng2 = RollRng::new(42);
//! let mut game_rng2 = rng2.fork();
//!
//! assert_eq!(game_rng.pins_up_to(10), game_rng2.pins_up_to(10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG with forking.
#[derive(Clone, Debug)]
pub struct RollRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl RollRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent, deterministic stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Uniform pin count in `0..=max`.
    pub fn pins_up_to(&mut self, max: u8) -> u8 {
        self.inner.gen_range(0..=max)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> RollRngState {
        RollRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &RollRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRngState {
    /// Seed the stream started from
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
