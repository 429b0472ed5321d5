//! Replay records.
//!
//! A game is fully determined by its options, its seed and the moves played,
//! so that is all a record keeps. Records are stored with bincode.

use serde::{Deserialize, Serialize};

use super::game::GameSession;
use crate::core::{GameError, GameOptions, Moves};

/// Everything needed to reproduce a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub options: GameOptions,
    /// Effective seed, also when the options asked for entropy.
    pub seed: u64,
    /// Moves of the agents living at each resolved turn.
    pub turns: Vec<Moves>,
}

impl GameRecord {
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            seed,
            turns: Vec::new(),
        }
    }

    /// Number of resolved turns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        bincode::serialize(self).map_err(|err| GameError::Replay(err.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        bincode::deserialize(bytes).map_err(|err| GameError::Replay(err.to_string()))
    }

    /// Rebuild the session and play every recorded turn.
    pub fn replay(&self) -> Result<GameSession, GameError> {
        let options = self.options.clone().with_seed(self.seed);
        let mut session = GameSession::new(options)?;
        for (index, moves) in self.turns.iter().enumerate() {
            session
                .step(moves)
                .map_err(|err| GameError::Replay(format!("turn {}: {err}", index + 1)))?;
        }
        Ok(session)
    }
}
