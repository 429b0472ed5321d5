//! The game session: reset, step, observe, render.

use std::collections::BTreeMap;
use std::io;

use smallvec::SmallVec;

use super::observation::{BoardView, Observation, TurnInfo, TurnResult};
use super::render;
use super::replay::GameRecord;
use crate::core::{AgentId, AgentMap, GameError, GameOptions, GameRng, GameState, Moves};
use crate::rules::{maps, GameResult, RulesEngine, StandardRules};

/// One episode of play.
///
/// ```
/// use battlesnake_engine::core::{Direction, GameOptions, Moves};
/// use battlesnake_engine::session::GameSession;
///
/// let mut session = GameSession::new(GameOptions::solo(7, 7).with_seed(42)).unwrap();
/// let agent = session.living_agents()[0];
///
/// let moves: Moves = [(agent, Some(Direction::Up))].into_iter().collect();
/// let results = session.step(&moves).unwrap();
/// assert_eq!(results[&agent].info.turn, 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    options: GameOptions,
    rules: StandardRules,
    state: GameState,
    names: Vec<String>,
    /// `None` for forked sessions, whose RNG no longer follows the seed.
    record: Option<GameRecord>,
}

impl GameSession {
    /// Start a session. Fails if `options` do not describe a playable game.
    pub fn new(options: GameOptions) -> Result<Self, GameError> {
        let rng = match options.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let seed = rng.seed();
        let state = maps::initial_state(&options, rng)?;

        tracing::info!(
            width = options.width,
            height = options.height,
            agents = options.num_agents,
            game_type = %options.game_type,
            game_map = %options.game_map,
            seed,
            "session reset"
        );

        Ok(Self {
            rules: StandardRules::from_options(&options),
            names: options.agent_names(),
            record: Some(GameRecord::new(options.clone(), seed)),
            options,
            state,
        })
    }

    /// Start a new episode, replacing the current one.
    ///
    /// On error the current episode is left as it was.
    pub fn reset(&mut self, options: GameOptions) -> Result<AgentMap<Observation>, GameError> {
        *self = Self::new(options)?;
        self.observations()
    }

    /// Resolve one turn.
    ///
    /// `moves` needs a direction for every living agent; entries for
    /// eliminated agents are ignored. Returns one result per agent that was
    /// alive when the turn started.
    pub fn step(&mut self, moves: &Moves) -> Result<BTreeMap<AgentId, TurnResult>, GameError> {
        if self.is_done() {
            return Err(GameError::EpisodeOver);
        }
        let acting: SmallVec<[AgentId; 8]> = self.state.living_agents().collect();

        let report = self.rules.resolve_turn(&mut self.state, moves)?;

        if let Some(record) = &mut self.record {
            let played: Moves = acting
                .iter()
                .map(|&agent| (agent, moves.get(&agent).copied().flatten()))
                .collect();
            record.turns.push(played);
        }

        let outcome = self.rules.is_terminal(&self.state);
        let episode_over = outcome.is_some();
        let victor = match outcome {
            Some(GameResult::Winner(agent)) if self.state.agent_count() > 1 => Some(agent),
            _ => None,
        };
        if let Some(result) = &outcome {
            tracing::info!(turn = self.state.turn, ?result, "episode finished");
        }

        let rewards = self.options.rewards;
        let board = BoardView::new(&self.state, &self.names);
        acting
            .into_iter()
            .map(|agent| {
                let snake = self.state.snake(agent).ok_or(GameError::UnknownAgent(agent))?;
                let ate_food = report.ate(agent);

                let mut reward = if snake.is_alive() { rewards.survive } else { rewards.death };
                if ate_food {
                    reward += rewards.food;
                }
                if victor == Some(agent) {
                    reward += rewards.victory;
                }

                let info = TurnInfo {
                    turn: self.state.turn,
                    health: snake.health(),
                    length: snake.len(),
                    ate_food,
                    elimination: report.elimination_of(agent).copied(),
                };
                let result = TurnResult {
                    observation: Observation::new(&self.state, &self.names, board.clone(), agent)?,
                    reward,
                    done: episode_over || !snake.is_alive(),
                    info,
                };
                Ok::<_, GameError>((agent, result))
            })
            .collect()
    }

    /// Whether the living count has reached the elimination threshold.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.rules.is_terminal(&self.state).is_some()
    }

    /// Final outcome, once the episode is done.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// Observation for one agent, living or not.
    pub fn observe(&self, agent: AgentId) -> Result<Observation, GameError> {
        Observation::new(&self.state, &self.names, BoardView::new(&self.state, &self.names), agent)
    }

    /// Observations for every agent.
    pub fn observations(&self) -> Result<AgentMap<Observation>, GameError> {
        let board = BoardView::new(&self.state, &self.names);
        let observations = self
            .state
            .snakes()
            .agent_ids()
            .map(|agent| Observation::new(&self.state, &self.names, board.clone(), agent))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(AgentMap::from_vec(observations))
    }

    #[must_use]
    pub fn render(&self, colorized: bool) -> String {
        render::render(&self.state, &self.names, colorized)
    }

    pub fn render_to<W: io::Write>(&self, writer: &mut W, colorized: bool) -> io::Result<()> {
        render::render_to(writer, &self.state, &self.names, colorized)
    }

    #[must_use]
    pub fn living_agents(&self) -> Vec<AgentId> {
        self.state.living_agents().collect()
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.state.turn
    }

    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.state.agent_count()
    }

    #[must_use]
    pub fn agent_by_name(&self, name: &str) -> Option<AgentId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|index| AgentId::new(index as u8))
    }

    #[must_use]
    pub fn name_of(&self, agent: AgentId) -> Option<&str> {
        self.names.get(agent.index()).map(String::as_str)
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    #[must_use]
    pub fn rules(&self) -> &StandardRules {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Replay record of this episode; `None` for forked sessions.
    #[must_use]
    pub fn record(&self) -> Option<&GameRecord> {
        self.record.as_ref()
    }

    /// Branch off an independent rollout.
    ///
    /// The fork gets its own RNG stream, so future food differs from what
    /// the parent would see. Use `clone` for an exact copy.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            options: self.options.clone(),
            rules: self.rules.clone(),
            state: self.state.fork(),
            names: self.names.clone(),
            record: None,
        }
    }
}
