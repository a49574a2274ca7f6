//! Simulated bowler bindings for Python.

use pyo3::prelude::*;

use crate::game::Game;
use crate::sim::{Bowler, BowlerConfig};

use super::py_game::PyGame;

/// Python wrapper for Bowler.
#[pyclass(name = "Bowler")]
pub struct PyBowler(pub Bowler);

#[pymethods]
impl PyBowler {
    /// Create a simulated bowler.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games (default: 42)
    /// - strike_chance: Chance of a strike on a full rack (default: 0.2)
    /// - spare_chance: Chance of clearing a partial rack (default: 0.3)
    #[new]
    #[pyo3(signature = (seed = 42, strike_chance = 0.2, spare_chance = 0.3))]
    fn new(seed: u64, strike_chance: f64, spare_chance: f64) -> Self {
        let config = BowlerConfig::default()
            .with_seed(seed)
            .with_strike_chance(strike_chance)
            .with_spare_chance(spare_chance);
        Self(Bowler::new(config))
    }

    /// Play a fresh game to the end and return it.
    fn play_game(&mut self) -> PyResult<PyGame> {
        let mut game = Game::new();
        self.0.play(&mut game)?;
        Ok(PyGame(game))
    }

    fn __repr__(&self) -> String {
        let config = self.0.config();
        format!(
            "Bowler(seed={}, strike_chance={}, spare_chance={})",
            config.seed, config.strike_chance, config.spare_chance
        )
    }
}
