//! Engine error type.

use thiserror::Error;

use super::agent::AgentId;
use super::coord::Coord;

/// Errors surfaced by the board, the rules engine and the session.
///
/// `InvalidCoordinate` and `NoVacantCell` are recovered inside the engine;
/// the remaining variants reach the caller of `reset`/`step`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("coordinate {coord} is outside the {width}x{height} board")]
    InvalidCoordinate { coord: Coord, width: u32, height: u32 },

    #[error("no move supplied for living agent {0}")]
    MissingMove(AgentId),

    #[error("unknown agent {0}")]
    UnknownAgent(AgentId),

    #[error("no vacant cell left on the board")]
    NoVacantCell,

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("the episode is over; reset before stepping again")]
    EpisodeOver,

    #[error("replay record error: {0}")]
    Replay(String),
}

impl GameError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        GameError::InvalidConfiguration(msg.into())
    }
}
