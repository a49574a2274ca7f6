//! The ten frames of a game and the bonus relay between them.
//!
//! Frames are stored in a fixed array and refer to their predecessor by
//! index. A roll in frame `k` is reported to frame `k - 1`, which passes it
//! further back while its own predecessor is still owed a bonus. That reaches
//! at most two frames back (two strikes in a row), which is all a roll can
//! ever complete.
//!
//! ## Usage
//!
//! ```
//! use rust_bowling::core::FrameId;
//! use rust_bowling::frames::FrameChain;
//!
//! let mut chain = FrameChain::new();
//! chain.hit_pins(FrameId::new(0), 10).unwrap();
//! chain.hit_pins(FrameId::new(1), 3).unwrap();
//! chain.hit_pins(FrameId::new(1), 4).unwrap();
//!
//! assert_eq!(chain.score(FrameId::new(0)), Some(17));
//! assert_eq!(chain.cumulative_score(FrameId::new(1)), Some(24));
//! ```

use serde::{Deserialize, Serialize};

use super::frame::{Frame, FrameKind, RollDisposition};
use crate::core::{FrameId, ScoreError, FRAME_COUNT};

/// Nine regular frames followed by the last frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameChain {
    frames: [Frame; FRAME_COUNT],
}

impl Default for FrameChain {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameChain {
    /// Create a chain of ten empty frames.
    #[must_use]
    pub fn new() -> Self {
        let frames = std::array::from_fn(|index| {
            let id = FrameId::new(index as u8);
            let kind = if id.is_last() {
                FrameKind::Last
            } else {
                FrameKind::Regular
            };
            Frame::new(id, kind)
        });

        Self { frames }
    }

    /// Get a frame.
    #[must_use]
    pub fn frame(&self, id: FrameId) -> &Frame {
        &self.frames[id.index()]
    }

    /// All frames in order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Record a roll in a frame and relay it to any frame owed a bonus.
    ///
    /// Fails without changing anything if the frame is resolved or the pin
    /// count is invalid for it.
    pub fn hit_pins(&mut self, id: FrameId, pins: i32) -> Result<(), ScoreError> {
        let frame = &mut self.frames[id.index()];
        let pins = frame.validate_roll(pins)?;

        match frame.record(pins) {
            RollDisposition::Own => {
                // Always relayed: a predecessor owed nothing simply ignores it.
                if let Some(previous) = frame.previous() {
                    self.resolve_bonus(previous, pins);
                }
            }
            RollDisposition::Bonus => self.resolve_bonus(id, pins),
        }

        Ok(())
    }

    /// Fold a roll into the bonus of `id` and, first, of any earlier frame
    /// still waiting on it.
    pub fn resolve_bonus(&mut self, id: FrameId, pins: u8) {
        if let Some(previous) = id.previous() {
            if self.frames[previous.index()].has_bonus() {
                self.resolve_bonus(previous, pins);
            }
        }

        self.frames[id.index()].absorb_bonus(pins);
    }

    /// A frame's own score, if known.
    #[must_use]
    pub fn score(&self, id: FrameId) -> Option<u32> {
        self.frame(id).score()
    }

    /// Sum of scores from the first frame through `id`, or `None` if any of
    /// them is not yet known.
    #[must_use]
    pub fn cumulative_score(&self, id: FrameId) -> Option<u32> {
        self.frames[..=id.index()].iter().map(Frame::score).sum()
    }

    /// Check if every frame is resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.frames.iter().all(Frame::is_resolved)
    }
}
