//! Core engine types: agents, coordinates, moves, RNG, configuration,
//! errors and the game state.

pub mod agent;
pub mod coord;
pub mod action;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use agent::{AgentId, AgentMap};
pub use coord::Coord;
pub use action::{Direction, Moves};
pub use rng::{GameRng, GameRngState};
pub use config::{FoodSpawnPolicy, GameMap, GameOptions, GameType, RewardConfig, RulesSettings};
pub use error::GameError;
pub use state::GameState;
