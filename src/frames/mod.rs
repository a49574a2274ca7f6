//! Frames and the chain that relays strike and spare bonuses between them.
//!
//! - `Frame`: one frame's rolls, pin total and outstanding bonus
//! - `FrameChain`: the ten frames of a game, linked by index

mod chain;
mod frame;

pub use chain::FrameChain;
pub use frame::{Frame, FrameKind};
