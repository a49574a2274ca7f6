//! A single player's game: the frame chain plus a cursor.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::snapshot::GameSnapshot;
use crate::core::{FrameId, ScoreError, FRAME_COUNT};
use crate::frames::{Frame, FrameChain};

/// A game of ten-pin bowling.
///
/// Rolls go to the frame under the cursor. Once that frame is resolved, the
/// next accepted roll moves the cursor forward; it never moves back.
///
/// ```
/// use rust_bowling::Game;
///
/// let mut game = Game::new();
/// game.score(10).unwrap();
/// game.score(3).unwrap();
/// game.score(4).unwrap();
///
/// assert_eq!(game.current_score(), Some(24));
/// assert!(!game.is_resolved());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    chain: FrameChain,
    cursor: FrameId,
}

impl Game {
    /// Create a game with ten empty frames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game and score every roll in order.
    ///
    /// Stops at the first rejected roll and returns its error.
    pub fn from_rolls(rolls: impl IntoIterator<Item = i32>) -> Result<Self, ScoreError> {
        let mut game = Self::new();
        for pins in rolls {
            game.score(pins)?;
        }
        Ok(game)
    }

    /// Score one roll.
    ///
    /// On error nothing changes, the cursor included, and the roll may be
    /// retried with a corrected pin count.
    pub fn score(&mut self, pins: i32) -> Result<(), ScoreError> {
        if self.is_resolved() {
            return Err(ScoreError::GameOver);
        }

        let target = if self.chain.frame(self.cursor).is_resolved() {
            self.cursor.next_bounded()
        } else {
            self.cursor
        };

        // The cursor only moves once the roll has been accepted.
        self.chain.hit_pins(target, pins)?;
        if target != self.cursor {
            self.cursor = target;
            debug!(frame = target.number(), "advanced to next frame");
        }

        if self.is_resolved() {
            debug!(final_score = ?self.current_score(), "game complete");
        }

        Ok(())
    }

    /// Check if every frame is resolved; no more rolls are accepted.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.chain.is_resolved()
    }

    /// Cumulative score through each frame, `None` where not yet known.
    #[must_use]
    pub fn cumulative_scores(&self) -> [Option<u32>; FRAME_COUNT] {
        std::array::from_fn(|index| self.chain.cumulative_score(FrameId::new(index as u8)))
    }

    /// Cumulative score through the last frame whose own score is known.
    #[must_use]
    pub fn current_score(&self) -> Option<u32> {
        let last_scored = self.chain.frames().iter().rev().find(|f| f.score().is_some())?;
        self.chain.cumulative_score(last_scored.id())
    }

    /// The final score, once the game is over.
    #[must_use]
    pub fn final_score(&self) -> Option<u32> {
        if !self.is_resolved() {
            return None;
        }
        self.chain.cumulative_score(FrameId::LAST)
    }

    /// Copies of the rolls made in each frame.
    #[must_use]
    pub fn rolls_per_frame(&self) -> Vec<Vec<u8>> {
        self.chain.frames().iter().map(|f| f.rolls().to_vec()).collect()
    }

    /// The largest pin count the next roll may take, or `None` once the game
    /// is over.
    #[must_use]
    pub fn pins_standing(&self) -> Option<u8> {
        if self.is_resolved() {
            return None;
        }

        let current = self.chain.frame(self.cursor);
        if current.is_resolved() {
            // Next roll opens the following frame on a full rack.
            self.chain.frame(self.cursor.next_bounded()).pins_standing()
        } else {
            current.pins_standing()
        }
    }

    /// The frame under the cursor.
    #[must_use]
    pub fn current_frame(&self) -> FrameId {
        self.cursor
    }

    /// Get a frame.
    #[must_use]
    pub fn frame(&self, id: FrameId) -> &Frame {
        self.chain.frame(id)
    }

    /// All frames in order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        self.chain.frames()
    }

    /// Capture everything a scoreboard needs in one serializable value.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rolls_per_frame: self.rolls_per_frame(),
            cumulative_scores: self.cumulative_scores().to_vec(),
            current_score: self.current_score(),
            current_frame: self.cursor,
            resolved: self.is_resolved(),
        }
    }
}
