//! Game bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::ScoreError;
use crate::game::Game;

impl From<ScoreError> for PyErr {
    fn from(err: ScoreError) -> Self {
        match err {
            ScoreError::InvalidInput(_) => PyErr::new::<PyValueError, _>(err.to_string()),
            ScoreError::InvalidState { .. } | ScoreError::GameOver => {
                PyErr::new::<PyRuntimeError, _>(err.to_string())
            }
        }
    }
}

/// Python wrapper for Game.
///
/// A single player's ten-frame game.
#[pyclass(name = "Game")]
#[derive(Clone, Default)]
pub struct PyGame(pub Game);

#[pymethods]
impl PyGame {
    /// Create a new game with ten empty frames.
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Score one roll.
    ///
    /// Raises ValueError for an invalid pin count and RuntimeError once the
    /// game is over.
    fn score(&mut self, pins: i32) -> PyResult<()> {
        self.0.score(pins)?;
        Ok(())
    }

    /// Check if the game accepts no more rolls.
    #[getter]
    fn is_resolved(&self) -> bool {
        self.0.is_resolved()
    }

    /// Cumulative score through each frame, None where not yet known.
    fn cumulative_scores(&self) -> Vec<Option<u32>> {
        self.0.cumulative_scores().to_vec()
    }

    /// Cumulative score through the last scorable frame.
    fn current_score(&self) -> Option<u32> {
        self.0.current_score()
    }

    /// Rolls made in each frame.
    fn rolls_per_frame(&self) -> Vec<Vec<u8>> {
        self.0.rolls_per_frame()
    }

    /// The largest pin count the next roll may take, None once the game is over.
    fn pins_standing(&self) -> Option<u8> {
        self.0.pins_standing()
    }

    /// 1-based number of the frame under the cursor.
    #[getter]
    fn current_frame(&self) -> usize {
        self.0.current_frame().number()
    }

    fn __repr__(&self) -> String {
        let status = if self.0.is_resolved() {
            "finished"
        } else {
            "ongoing"
        };
        format!(
            "Game(frame={}, score={:?}, status={})",
            self.0.current_frame().number(),
            self.0.current_score(),
            status
        )
    }
}
