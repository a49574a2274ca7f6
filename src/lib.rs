//! # rust-bowling
//!
//! A ten-pin bowling scoring engine.
//!
//! Rolls come in one at a time as pin counts. The engine routes each roll to
//! the current frame, pays strike and spare bonuses back to earlier frames as
//! later rolls arrive, and reports per-frame cumulative scores as soon as they
//! are known.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: a rejected roll leaves the game untouched,
//!    so the caller can retry with a corrected count.
//!
//! 2. **Index-linked frames**: frames live in a fixed array and refer to
//!    their predecessor by index. Bonus notifications walk back through
//!    that index chain.
//!
//! 3. **Tagged last frame**: the tenth frame differs only in its resolution
//!    and bonus-roll rules, expressed as `FrameKind::Last`.
//!
//! ## Modules
//!
//! - `core`: Frame IDs, fixed game dimensions, errors
//! - `frames`: Frames and the bonus relay between them
//! - `game`: Game orchestration and snapshots
//! - `rules`: `ScoringStrategy` trait for scoreboards and simulators
//! - `sim`: Seeded simulated bowlers
//!
//! ## Example
//!
//! ```
//! use rust_bowling::Game;
//!
//! let rolls = [1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 1, 7, 3, 6, 4, 10, 2, 8, 6];
//! let game = Game::from_rolls(rolls).unwrap();
//!
//! assert!(game.is_resolved());
//! assert_eq!(game.final_score(), Some(133));
//! ```

pub mod core;
pub mod frames;
pub mod game;
pub mod rules;
pub mod sim;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    FrameId, InvalidRoll, ScoreError,
    FRAME_COUNT, MAX_PINS, MAX_ROLLS,
};

pub use crate::frames::{Frame, FrameChain, FrameKind};

pub use crate::game::{Game, GameSnapshot};

pub use crate::rules::ScoringStrategy;

pub use crate::sim::{simulate_games, Bowler, BowlerConfig, RollRng, RollRngState};
