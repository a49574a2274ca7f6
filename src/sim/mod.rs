//! Simulated bowlers for exercising the engine.
//!
//! - `RollRng`: deterministic, forkable roll source
//! - `BowlerConfig`: strike and spare tendencies
//! - `Bowler`: plays legal games against any `ScoringStrategy`

mod bowler;
mod config;
mod rng;

pub use bowler::{simulate_games, Bowler};
pub use config::BowlerConfig;
pub use rng::{RollRng, RollRngState};
