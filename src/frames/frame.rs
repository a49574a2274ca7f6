//! A single frame and its own bookkeeping.
//!
//! A frame tracks the rolls it was given, the pins those rolls knocked down,
//! and the bonus it is still owed from later rolls after a strike or spare.
//! It never touches another frame; `FrameChain` relays bonus notifications
//! between neighbours.
//!
//! ## Regular vs. last
//!
//! The tenth frame is the only frame that is its own bonus recipient. It
//! stays open while a bonus is owed, and rolls made in that state are fed to
//! its own bonus instead of counting toward its pin total. `FrameKind` is the
//! tag that switches between the two rule sets.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{validate_pins, FrameId, InvalidRoll, ScoreError, MAX_PINS, MAX_ROLLS};

/// Which rule set a frame follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    /// Frames 1-9: at most two rolls, bonus paid by later frames.
    Regular,
    /// Frame 10: up to three rolls, bonus paid by its own extra rolls.
    Last,
}

/// Where a recorded roll has to be reported for bonus resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RollDisposition {
    /// Counted toward this frame; the predecessor may be owed it.
    Own,
    /// A last-frame bonus roll; this frame (and possibly its predecessor) is owed it.
    Bonus,
}

/// One of the ten scoring units of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    id: FrameId,
    kind: FrameKind,
    /// Every roll made in this frame, bonus rolls of the last frame included.
    rolls: SmallVec<[u8; 3]>,
    /// Rolls counted toward `pins_hit`.
    roll_count: u8,
    pins_hit: u8,
    bonus_points: u16,
    bonus_rolls_owed: u8,
}

impl Frame {
    /// Create an empty frame.
    #[must_use]
    pub fn new(id: FrameId, kind: FrameKind) -> Self {
        Self {
            id,
            kind,
            rolls: SmallVec::new(),
            roll_count: 0,
            pins_hit: 0,
            bonus_points: 0,
            bonus_rolls_owed: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> FrameId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    /// The frame this one relays bonus notifications to.
    #[must_use]
    pub fn previous(&self) -> Option<FrameId> {
        self.id.previous()
    }

    /// Rolls made in this frame, in order.
    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Rolls counted toward this frame's own pin total.
    #[must_use]
    pub fn roll_count(&self) -> u8 {
        self.roll_count
    }

    #[must_use]
    pub fn pins_hit(&self) -> u8 {
        self.pins_hit
    }

    #[must_use]
    pub fn bonus_points(&self) -> u16 {
        self.bonus_points
    }

    #[must_use]
    pub fn bonus_rolls_owed(&self) -> u8 {
        self.bonus_rolls_owed
    }

    /// Check if later rolls still have to be folded into this frame's score.
    #[must_use]
    pub fn has_bonus(&self) -> bool {
        self.bonus_rolls_owed > 0
    }

    /// Check if the frame can accept no more rolls.
    ///
    /// A regular frame is resolved after a full rack or two rolls. The last
    /// frame additionally waits until it is owed no bonus rolls.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        let base = self.pins_hit == MAX_PINS || self.roll_count == MAX_ROLLS;
        match self.kind {
            FrameKind::Regular => base,
            FrameKind::Last => base && !self.has_bonus(),
        }
    }

    /// Check if the frame's final value is known.
    #[must_use]
    pub fn is_scorable(&self) -> bool {
        self.is_resolved() && !self.has_bonus()
    }

    /// The frame's own score, or `None` while it is still open or owed a bonus.
    #[must_use]
    pub fn score(&self) -> Option<u32> {
        if !self.is_scorable() {
            return None;
        }

        Some(u32::from(self.pins_hit) + u32::from(self.bonus_points))
    }

    /// All pins down on the first roll.
    #[must_use]
    pub fn is_strike(&self) -> bool {
        self.rolls.first() == Some(&MAX_PINS)
    }

    /// All pins down across the first two rolls, without a strike.
    #[must_use]
    pub fn is_spare(&self) -> bool {
        !self.is_strike()
            && self.roll_count >= MAX_ROLLS
            && self.rolls[0] + self.rolls[1] == MAX_PINS
    }

    /// The largest pin count the next roll may take, or `None` if resolved.
    #[must_use]
    pub fn pins_standing(&self) -> Option<u8> {
        if self.is_resolved() {
            return None;
        }

        if self.absorbs_bonus_roll() {
            Some(MAX_PINS)
        } else {
            Some(MAX_PINS - self.pins_hit)
        }
    }

    /// Check a roll against this frame without changing anything.
    ///
    /// Order: resolved, negative, above 10, then the per-frame total (skipped
    /// for last-frame bonus rolls, which each get a fresh rack).
    pub fn validate_roll(&self, pins: i32) -> Result<u8, ScoreError> {
        if self.is_resolved() {
            return Err(ScoreError::InvalidState { frame: self.id });
        }

        let pins = validate_pins(pins)?;

        if !self.absorbs_bonus_roll() && pins + self.pins_hit > MAX_PINS {
            return Err(InvalidRoll::FrameOverflow {
                pins,
                already_hit: self.pins_hit,
            }
            .into());
        }

        Ok(pins)
    }

    /// Record a validated roll.
    ///
    /// Callers must have passed `pins` through `validate_roll` first.
    pub(crate) fn record(&mut self, pins: u8) -> RollDisposition {
        self.rolls.push(pins);

        if self.absorbs_bonus_roll() {
            return RollDisposition::Bonus;
        }

        self.pins_hit += pins;
        self.roll_count += 1;

        if self.pins_hit == MAX_PINS {
            self.bonus_rolls_owed = MAX_ROLLS + 1 - self.roll_count;
        }

        RollDisposition::Own
    }

    /// Fold one later roll into the bonus, if one is still owed.
    ///
    /// Returns whether the roll was taken.
    pub(crate) fn absorb_bonus(&mut self, pins: u8) -> bool {
        if self.bonus_rolls_owed == 0 {
            return false;
        }

        self.bonus_points += u16::from(pins);
        self.bonus_rolls_owed -= 1;
        trace!(
            frame = self.id.number(),
            pins,
            remaining = self.bonus_rolls_owed,
            "bonus roll absorbed"
        );
        true
    }

    fn absorbs_bonus_roll(&self) -> bool {
        self.kind == FrameKind::Last && self.has_bonus()
    }
}
