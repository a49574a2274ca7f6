//! Python bindings for the rust-bowling scoring engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_bowling as bowling
//!
//! game = bowling.Game()
//! for pins in [10, 7, 3, 9, 0]:
//!     game.score(pins)
//!
//! game.cumulative_scores()  # [20, 39, 48, None, ...]
//!
//! # Play a whole game with a simulated bowler
//! finished = bowling.Bowler(seed=7).play_game()
//! finished.current_score()
//! ```

use pyo3::prelude::*;

mod py_game;
mod py_sim;

pub use py_game::*;
pub use py_sim::*;

/// rust-bowling: ten-pin bowling scoring.
///
/// This module provides:
/// - Game: roll-by-roll scoring with strike and spare bonuses
/// - Bowler: a seeded simulated bowler
#[pymodule]
fn rust_bowling(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_class::<PyBowler>()?;

    Ok(())
}
