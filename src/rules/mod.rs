//! Scoring strategy trait for code that drives a game.
//!
//! Scoreboards and simulated bowlers talk to `ScoringStrategy` rather than
//! to `Game` directly, so they never reach into frame internals.

mod strategy;

pub use strategy::ScoringStrategy;
