//! Per-agent observations and step results.
//!
//! Everything here is derived from the session state on demand and owns its
//! data, so callers can keep observations after the session moves on.

use serde::{Deserialize, Serialize};

use crate::core::{AgentId, Coord, GameError, GameState};
use crate::snake::{Elimination, Snake};

/// One snake as seen by an agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnakeView {
    pub id: AgentId,
    pub name: String,
    pub health: i32,
    pub length: usize,
    /// Head first.
    pub body: Vec<Coord>,
}

impl SnakeView {
    #[must_use]
    pub fn new(snake: &Snake, name: &str) -> Self {
        Self {
            id: snake.id,
            name: name.to_string(),
            health: snake.health(),
            length: snake.len(),
            body: snake.body().iter().copied().collect(),
        }
    }
}

/// The shared part of every observation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub width: u32,
    pub height: u32,
    pub food: Vec<Coord>,
    pub hazards: Vec<Coord>,
    /// Living snakes, in agent order.
    pub snakes: Vec<SnakeView>,
}

impl BoardView {
    #[must_use]
    pub fn new(state: &GameState, names: &[String]) -> Self {
        let snakes = state
            .snakes()
            .values()
            .filter(|snake| snake.is_alive())
            .map(|snake| SnakeView::new(snake, name_of(names, snake.id)))
            .collect();
        Self {
            width: state.board.width(),
            height: state.board.height(),
            food: state.board.food(),
            hazards: state.board.hazards(),
            snakes,
        }
    }
}

/// What one agent sees after reset or a step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub turn: u32,
    pub you: SnakeView,
    pub board: BoardView,
}

impl Observation {
    /// Build the observation for `agent` around an already built board view.
    pub fn new(state: &GameState, names: &[String], board: BoardView, agent: AgentId) -> Result<Self, GameError> {
        let snake = state.snake(agent).ok_or(GameError::UnknownAgent(agent))?;
        Ok(Self {
            turn: state.turn,
            you: SnakeView::new(snake, name_of(names, agent)),
            board,
        })
    }
}

/// Extra per-agent detail for one step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnInfo {
    pub turn: u32,
    pub health: i32,
    pub length: usize,
    pub ate_food: bool,
    /// Set on the turn the agent was eliminated.
    pub elimination: Option<Elimination>,
}

/// Outcome of one step for one agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    pub observation: Observation,
    pub reward: f32,
    /// The agent is out, or the whole episode is.
    pub done: bool,
    pub info: TurnInfo,
}

fn name_of(names: &[String], agent: AgentId) -> &str {
    names.get(agent.index()).map_or("", String::as_str)
}
