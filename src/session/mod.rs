//! Game sessions: the environment surface agents play against.
//!
//! A `GameSession` owns the state, the rules and the replay record for one
//! episode. Observations and renders are read-only projections of it.

mod game;
pub mod observation;
pub mod render;
pub mod replay;

pub use game::GameSession;
pub use observation::{BoardView, Observation, SnakeView, TurnInfo, TurnResult};
pub use replay::GameRecord;
