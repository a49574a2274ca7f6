//! Game orchestration: routing rolls to frames and aggregating scores.

mod game;
mod snapshot;

pub use game::Game;
pub use snapshot::GameSnapshot;
