//! # battlesnake-engine
//!
//! A simultaneous-move snake game engine for multi-agent RL.
//!
//! ## Design Principles
//!
//! 1. **N-Agent First**: Every API is keyed by `AgentId`. Solo play is just
//!    a one-agent game with an elimination threshold of 0.
//!
//! 2. **Compute, then Commit**: A turn is resolved on working copies of the
//!    snakes and committed at the end, so agent order never matters and a
//!    rejected turn leaves the state untouched.
//!
//! 3. **Deterministic**: All randomness flows through one seeded `GameRng`
//!    per session. Options, seed and moves reproduce a game exactly.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Snake bodies are `im::Vector`, so
//!   forking a session for a rollout is cheap.
//!
//! - **Rules Behind a Trait**: `RulesEngine` resolves turns and detects the
//!   end of the game; `StandardRules` covers every game type.
//!
//! ## Modules
//!
//! - `core`: Agent ids, coordinates, moves, RNG, configuration, errors, state
//! - `board`: Cell occupancy, food and hazards
//! - `snake`: Snake bodies, health and eliminations
//! - `rules`: Turn resolution, start layouts and food spawning
//! - `session`: Reset/step/observe/render and replay records

pub mod core;
pub mod board;
pub mod snake;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    AgentId, AgentMap, Coord, Direction, Moves,
    GameRng, GameRngState,
    FoodSpawnPolicy, GameMap, GameOptions, GameType, RewardConfig, RulesSettings,
    GameError, GameState,
};

pub use crate::board::{Board, Occupant};

pub use crate::snake::{DeathCause, Elimination, Snake};

pub use crate::rules::{GameResult, RulesEngine, StandardRules, TurnReport};

pub use crate::session::{
    GameRecord, GameSession, Observation, SnakeView, BoardView, TurnInfo, TurnResult,
};
