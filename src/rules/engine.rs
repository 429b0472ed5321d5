//! Rules engine trait.
//!
//! A rules engine resolves one simultaneous turn and decides when the game
//! is over:
//! - `resolve_turn`: apply one move per living snake to the state
//! - `is_terminal`: report the outcome once the game has ended
//! - `legal_moves` / `safe_moves`: move enumeration for callers that pick
//!   moves (random rollouts, tests)

use smallvec::SmallVec;

use crate::core::{AgentId, Coord, Direction, GameState, GameType, Moves, RulesSettings};
use crate::core::GameError;
use crate::snake::Elimination;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single surviving snake.
    Winner(AgentId),
    /// Every snake was eliminated (always the case for a finished solo game).
    NoSurvivors,
    /// Several snakes left when the elimination threshold is above 1.
    Survivors(Vec<AgentId>),
}

impl GameResult {
    /// Check if an agent won.
    #[must_use]
    pub fn is_winner(&self, agent: AgentId) -> bool {
        match self {
            GameResult::Winner(a) => *a == agent,
            GameResult::Survivors(agents) => agents.contains(&agent),
            GameResult::NoSurvivors => false,
        }
    }
}

/// What happened during one resolved turn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TurnReport {
    /// Turn number after resolution.
    pub turn: u32,
    /// Snakes eliminated this turn, in agent order.
    pub eliminated: SmallVec<[(AgentId, Elimination); 4]>,
    /// Snakes that ate this turn, in agent order.
    pub fed: SmallVec<[AgentId; 4]>,
    /// Food placed after the turn.
    pub spawned_food: SmallVec<[Coord; 2]>,
}

impl TurnReport {
    #[must_use]
    pub fn elimination_of(&self, agent: AgentId) -> Option<&Elimination> {
        self.eliminated
            .iter()
            .find(|(id, _)| *id == agent)
            .map(|(_, elimination)| elimination)
    }

    #[must_use]
    pub fn ate(&self, agent: AgentId) -> bool {
        self.fed.contains(&agent)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `resolve_turn` must validate the moves before mutating anything, so a
///   rejected turn leaves the state untouched
/// - `resolve_turn` must be deterministic given the state (including its
///   RNG) and the moves
/// - moves for eliminated agents are ignored, never required
pub trait RulesEngine {
    /// Rule variant in play.
    fn game_type(&self) -> GameType;

    /// Tunable rule parameters.
    fn settings(&self) -> &RulesSettings;

    /// Resolve one simultaneous turn.
    fn resolve_turn(&self, state: &mut GameState, moves: &Moves) -> Result<TurnReport, GameError>;

    // === Convenience Methods ===

    /// Living count at or below which the game is over.
    fn elimination_threshold(&self) -> usize {
        self.settings().threshold_for(self.game_type())
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        let living: Vec<AgentId> = state.living_agents().collect();
        if living.len() > self.elimination_threshold() {
            return None;
        }
        Some(match living.as_slice() {
            [] => GameResult::NoSurvivors,
            [winner] => GameResult::Winner(*winner),
            _ => GameResult::Survivors(living),
        })
    }

    /// Moves an agent may submit: all four for a living snake, none otherwise.
    fn legal_moves(&self, state: &GameState, agent: AgentId) -> Vec<Direction> {
        if state.is_alive(agent) {
            Direction::ALL.to_vec()
        } else {
            Vec::new()
        }
    }

    /// Legal moves that do not run into a wall or into a body segment that
    /// is certain to still be there next turn.
    ///
    /// Tails count as free only when they are not stacked; head-to-head
    /// risk is ignored.
    fn safe_moves(&self, state: &GameState, agent: AgentId) -> Vec<Direction> {
        let Some(snake) = state.snake(agent).filter(|s| s.is_alive()) else {
            return Vec::new();
        };
        let wraps = self.game_type().wraps();
        let width = state.board.width();
        let height = state.board.height();

        Direction::ALL
            .into_iter()
            .filter(|&direction| {
                let mut target = snake.advance(direction);
                if wraps {
                    target = target.wrapped(width, height);
                } else if !target.in_bounds(width, height) {
                    return false;
                }
                !state.snakes().values().filter(|s| s.is_alive()).any(|other| {
                    let body = other.body();
                    let len = body.len();
                    body.iter().enumerate().any(|(i, &segment)| {
                        let vacating_tail = i == len - 1 && len > 1 && body[len - 2] != segment;
                        segment == target && !vacating_tail
                    })
                })
            })
            .collect()
    }
}
