//! Frame identification.
//!
//! Frames live in a fixed array owned by the chain. A `FrameId` is the
//! 0-based index into that array; the predecessor link is simply
//! `index - 1`, so no frame ever holds a reference to another.
//!
//! ```
//! use rust_bowling::core::FrameId;
//!
//! let first = FrameId::new(0);
//! assert_eq!(first.number(), 1);
//! assert_eq!(first.previous(), None);
//!
//! let tenth = FrameId::LAST;
//! assert!(tenth.is_last());
//! assert_eq!(tenth.previous(), Some(FrameId::new(8)));
//! ```

use serde::{Deserialize, Serialize};

use super::pins::FRAME_COUNT;

/// Index of a frame within a game (0..=9). Defaults to the first frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FrameId(pub u8);

impl FrameId {
    /// The first frame.
    pub const FIRST: FrameId = FrameId(0);

    /// The tenth frame.
    pub const LAST: FrameId = FrameId(FRAME_COUNT as u8 - 1);

    /// Create a frame ID from a 0-based index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the 1-based frame number, as a player would call it.
    #[must_use]
    pub const fn number(self) -> usize {
        self.0 as usize + 1
    }

    /// The chronologically preceding frame, or `None` for the first frame.
    #[must_use]
    pub const fn previous(self) -> Option<FrameId> {
        if self.0 == 0 {
            None
        } else {
            Some(FrameId(self.0 - 1))
        }
    }

    /// The following frame, bounded at the tenth.
    #[must_use]
    pub const fn next_bounded(self) -> FrameId {
        if self.0 >= Self::LAST.0 {
            Self::LAST
        } else {
            FrameId(self.0 + 1)
        }
    }

    /// Check if this is the tenth frame.
    #[must_use]
    pub const fn is_last(self) -> bool {
        self.0 == Self::LAST.0
    }

    /// Iterate over all ten frame IDs in order.
    pub fn all() -> impl Iterator<Item = FrameId> {
        (0..FRAME_COUNT as u8).map(FrameId)
    }
}

impl std::fmt::Display for FrameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frame({})", self.number())
    }
}
