//! Game state: the board, every snake, the turn counter and the RNG.
//!
//! `GameState` is the single authoritative copy of a game. Only the rules
//! engine mutates it during play; the session reads it to build
//! observations and renders.
//!
//! Eliminated snakes stay in the snake map with their elimination record so
//! that agent ids remain stable for the whole episode.

use super::agent::{AgentId, AgentMap};
use super::error::GameError;
use super::rng::GameRng;
use crate::board::{Board, Occupant};
use crate::snake::Snake;

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,

    snakes: AgentMap<Snake>,

    /// Turns resolved so far (0 right after reset).
    pub turn: u32,

    /// Session-owned deterministic RNG.
    pub rng: GameRng,
}

impl GameState {
    /// Assemble a state from its parts.
    ///
    /// Snakes must be given in agent order (`snakes[i].id == AgentId(i)`)
    /// with every living body on the board. Snake occupancy is written to
    /// the board; food and hazards already on it are kept unless a snake
    /// covers them.
    pub fn new(board: Board, snakes: Vec<Snake>, rng: GameRng) -> Result<Self, GameError> {
        if snakes.is_empty() || snakes.len() > 255 {
            return Err(GameError::config(format!(
                "a game needs 1-255 snakes, got {}",
                snakes.len()
            )));
        }
        for (index, snake) in snakes.iter().enumerate() {
            if snake.id.index() != index {
                return Err(GameError::config(format!(
                    "snake {} given at position {index}",
                    snake.id
                )));
            }
        }

        let mut state = Self {
            board,
            snakes: AgentMap::from_vec(snakes),
            turn: 0,
            rng,
        };
        state.sync_board()?;
        Ok(state)
    }

    /// Number of agents, living or not.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.snakes.agent_count()
    }

    #[must_use]
    pub fn snakes(&self) -> &AgentMap<Snake> {
        &self.snakes
    }

    #[must_use]
    pub fn snake(&self, agent: AgentId) -> Option<&Snake> {
        self.snakes.get(agent)
    }

    pub(crate) fn snake_mut(&mut self, agent: AgentId) -> Option<&mut Snake> {
        self.snakes.get_mut(agent)
    }

    /// Agents whose snakes are still alive, in agent order.
    pub fn living_agents(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.snakes
            .iter()
            .filter(|(_, snake)| snake.is_alive())
            .map(|(id, _)| id)
    }

    #[must_use]
    pub fn living_count(&self) -> usize {
        self.snakes.values().filter(|snake| snake.is_alive()).count()
    }

    #[must_use]
    pub fn is_alive(&self, agent: AgentId) -> bool {
        self.snakes.get(agent).is_some_and(Snake::is_alive)
    }

    /// Rewrite snake occupancy from the living snakes' bodies.
    ///
    /// Segments are written tail first so that on a stacked cell the
    /// segment nearest the head wins.
    pub fn sync_board(&mut self) -> Result<(), GameError> {
        self.board.clear_snakes();
        for (owner, snake) in self.snakes.iter() {
            if !snake.is_alive() {
                continue;
            }
            for (segment, &coord) in snake.body().iter().enumerate().rev() {
                self.board.place(coord, Occupant::Snake { owner, segment })?;
            }
        }
        Ok(())
    }

    /// Clone the state for an independent rollout.
    ///
    /// Takes `&mut self` because forking the RNG advances the fork counter.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            board: self.board.clone(),
            snakes: self.snakes.clone(),
            turn: self.turn,
            rng: self.rng.fork(),
        }
    }
}
