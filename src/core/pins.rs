//! Fixed dimensions of a ten-pin game and pin-count validation.
//!
//! The engine only supports the standard game: ten pins, ten frames,
//! two rolls per regular frame. These are constants, not configuration.

use super::error::InvalidRoll;

/// Pins standing in a full rack.
pub const MAX_PINS: u8 = 10;

/// Rolls a frame may use before it is resolved (bonus rolls excluded).
pub const MAX_ROLLS: u8 = 2;

/// Frames in a game.
pub const FRAME_COUNT: usize = 10;

/// Check that a raw pin count is within `0..=MAX_PINS`.
///
/// Returns the count narrowed to `u8`. The per-frame total is checked
/// separately by the frame, since it depends on what was already hit.
///
/// ```
/// use rust_bowling::core::{validate_pins, InvalidRoll};
///
/// assert_eq!(validate_pins(7), Ok(7));
/// assert_eq!(validate_pins(-1), Err(InvalidRoll::Negative { pins: -1 }));
/// assert_eq!(validate_pins(11), Err(InvalidRoll::AboveMax { pins: 11 }));
/// ```
pub fn validate_pins(pins: i32) -> Result<u8, InvalidRoll> {
    if pins < 0 {
        return Err(InvalidRoll::Negative { pins });
    }

    if pins > i32::from(MAX_PINS) {
        return Err(InvalidRoll::AboveMax { pins });
    }

    Ok(pins as u8)
}
