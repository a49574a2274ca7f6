//! Errors returned when a roll cannot be recorded.
//!
//! Every error is caller misuse; the engine has no transient failures.
//! A call that returns an error has left the game unchanged.

use thiserror::Error;

use super::frame_id::FrameId;

/// Why a pin count was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidRoll {
    #[error("attempted to hit {pins} pins, but hitting a negative number of pins is impossible")]
    Negative { pins: i32 },

    #[error("attempted to hit {pins} pins, but hitting more than 10 pins is impossible")]
    AboveMax { pins: i32 },

    #[error(
        "attempted to hit {pins} pins, but {already_hit} pins were already hit in this frame \
         and a regular frame only has 10"
    )]
    FrameOverflow { pins: u8, already_hit: u8 },
}

/// Failure to score a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Pin count out of range, or more than a full rack within one frame.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidRoll),

    /// The frame cannot accept any more rolls.
    #[error("attempted to hit pins in {frame}, which is already resolved")]
    InvalidState { frame: FrameId },

    /// All ten frames are resolved.
    #[error("attempted to score a game which has ended")]
    GameOver,
}

impl ScoreError {
    /// True for errors the caller can fix by retrying with another pin count.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ScoreError::InvalidInput(_))
    }
}
