//! Core engine types: frame IDs, fixed game dimensions, errors.
//!
//! Nothing here knows about bonus propagation; that lives in `frames`.

pub mod error;
pub mod frame_id;
pub mod pins;

pub use error::{InvalidRoll, ScoreError};
pub use frame_id::FrameId;
pub use pins::{validate_pins, FRAME_COUNT, MAX_PINS, MAX_ROLLS};
