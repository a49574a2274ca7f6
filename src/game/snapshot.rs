//! Read-only view of a game for scoreboards.

use serde::{Deserialize, Serialize};

use crate::core::FrameId;

/// Everything a scoreboard renders, captured at one point in time.
///
/// Owns its data; changing it has no effect on the game it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Rolls made in each frame, last-frame bonus rolls included.
    pub rolls_per_frame: Vec<Vec<u8>>,
    /// Cumulative score through each frame, `None` where not yet known.
    pub cumulative_scores: Vec<Option<u32>>,
    /// Cumulative score through the last scorable frame.
    pub current_score: Option<u32>,
    /// Frame under the cursor.
    pub current_frame: FrameId,
    /// True once the game accepts no more rolls.
    pub resolved: bool,
}
