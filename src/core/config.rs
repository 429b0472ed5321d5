//! Game configuration types.
//!
//! A session is configured by one [`GameOptions`] value:
//! - board size and agent count
//! - `GameMap`: how snakes and food are laid out at reset
//! - `GameType`: which rule variant resolves turns
//! - `RulesSettings`: health, hazards, food spawning, end condition
//! - `RewardConfig`: per-turn reward shaping reported to the RL adapter
//!
//! Options are validated once, at reset. Nothing here is hardcoded in the
//! rules engine.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Board layout used at reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMap {
    /// Symmetric starts, food next to every snake and in the centre,
    /// food spawning every turn.
    #[default]
    Standard,
    /// Symmetric starts and no food at all.
    Empty,
}

impl GameMap {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GameMap::Standard => "standard",
            GameMap::Empty => "empty",
        }
    }

    /// Whether the map places and spawns food.
    #[must_use]
    pub fn has_food(self) -> bool {
        matches!(self, GameMap::Standard)
    }
}

impl FromStr for GameMap {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(GameMap::Standard),
            "empty" => Ok(GameMap::Empty),
            other => Err(GameError::config(format!("unknown game map '{other}'"))),
        }
    }
}

impl std::fmt::Display for GameMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule variant used to resolve turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    /// Last snake standing.
    #[default]
    Standard,
    /// Single-player survival; the episode ends when no snake is left.
    Solo,
    /// No food; every snake grows each turn and never starves.
    Constrictor,
    /// Board edges wrap around instead of killing.
    Wrapped,
}

impl GameType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GameType::Standard => "standard",
            GameType::Solo => "solo",
            GameType::Constrictor => "constrictor",
            GameType::Wrapped => "wrapped",
        }
    }

    /// Default number of living snakes at or below which the game ends.
    #[must_use]
    pub fn default_elimination_threshold(self) -> usize {
        match self {
            GameType::Solo => 0,
            _ => 1,
        }
    }

    #[must_use]
    pub fn wraps(self) -> bool {
        matches!(self, GameType::Wrapped)
    }

    #[must_use]
    pub fn is_constrictor(self) -> bool {
        matches!(self, GameType::Constrictor)
    }
}

impl FromStr for GameType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(GameType::Standard),
            "solo" => Ok(GameType::Solo),
            "constrictor" => Ok(GameType::Constrictor),
            "wrapped" => Ok(GameType::Wrapped),
            other => Err(GameError::config(format!("unknown game type '{other}'"))),
        }
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When new food appears after a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodSpawnPolicy {
    /// Top up to `minimum`; otherwise spawn one food with `chance_percent`.
    Probabilistic { minimum: usize, chance_percent: u32 },
    /// Top up to exactly `count` food items.
    Refill { count: usize },
    /// Never spawn food after reset.
    Disabled,
}

impl Default for FoodSpawnPolicy {
    fn default() -> Self {
        FoodSpawnPolicy::Probabilistic {
            minimum: 1,
            chance_percent: 15,
        }
    }
}

/// Tunable rule parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RulesSettings {
    /// Health every snake starts with.
    pub initial_health: i32,
    /// Health restored by eating.
    pub max_health: i32,
    /// Body length at spawn. Extra segments are stacked on the head cell.
    pub start_length: usize,
    /// Extra damage for ending a turn with the head on a hazard.
    pub hazard_damage: i32,
    pub food_spawn: FoodSpawnPolicy,
    /// Living count at or below which the episode ends.
    /// `None` uses the game type's default.
    pub elimination_threshold: Option<usize>,
}

impl Default for RulesSettings {
    fn default() -> Self {
        Self {
            initial_health: 100,
            max_health: 100,
            start_length: 1,
            hazard_damage: 14,
            food_spawn: FoodSpawnPolicy::default(),
            elimination_threshold: None,
        }
    }
}

impl RulesSettings {
    #[must_use]
    pub fn with_food_spawn(mut self, policy: FoodSpawnPolicy) -> Self {
        self.food_spawn = policy;
        self
    }

    #[must_use]
    pub fn with_elimination_threshold(mut self, threshold: usize) -> Self {
        self.elimination_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn with_hazard_damage(mut self, damage: i32) -> Self {
        self.hazard_damage = damage;
        self
    }

    #[must_use]
    pub fn with_start_length(mut self, length: usize) -> Self {
        self.start_length = length;
        self
    }

    /// Effective elimination threshold for `game_type`.
    #[must_use]
    pub fn threshold_for(&self, game_type: GameType) -> usize {
        self.elimination_threshold
            .unwrap_or_else(|| game_type.default_elimination_threshold())
    }
}

/// Reward shaping reported with each turn result.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Granted every turn a snake survives.
    pub survive: f32,
    /// Granted for each food eaten.
    pub food: f32,
    /// Granted on elimination.
    pub death: f32,
    /// Granted to the sole survivor when a multi-agent episode ends.
    pub victory: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            survive: 0.0,
            food: 0.0,
            death: -1.0,
            victory: 1.0,
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameOptions {
    pub width: u32,
    pub height: u32,
    pub num_agents: usize,
    pub game_map: GameMap,
    pub game_type: GameType,
    /// `None` draws a fresh seed from entropy at reset.
    pub seed: Option<u64>,
    /// Agent names; empty means `agent_0`, `agent_1`, ...
    pub names: Vec<String>,
    pub rules: RulesSettings,
    pub rewards: RewardConfig,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            width: 11,
            height: 11,
            num_agents: 4,
            game_map: GameMap::Standard,
            game_type: GameType::Standard,
            seed: None,
            names: Vec::new(),
            rules: RulesSettings::default(),
            rewards: RewardConfig::default(),
        }
    }
}

impl GameOptions {
    /// Options for a board of the given size with `num_agents` snakes.
    pub fn new(width: u32, height: u32, num_agents: usize) -> Self {
        Self {
            width,
            height,
            num_agents,
            ..Self::default()
        }
    }

    /// Single-snake survival game.
    pub fn solo(width: u32, height: u32) -> Self {
        Self::new(width, height, 1).with_game_type(GameType::Solo)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_game_map(mut self, map: GameMap) -> Self {
        self.game_map = map;
        self
    }

    #[must_use]
    pub fn with_game_type(mut self, game_type: GameType) -> Self {
        self.game_type = game_type;
        self
    }

    #[must_use]
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RulesSettings) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_rewards(mut self, rewards: RewardConfig) -> Self {
        self.rewards = rewards;
        self
    }

    /// Agent names in agent order.
    #[must_use]
    pub fn agent_names(&self) -> Vec<String> {
        if self.names.is_empty() {
            super::AgentId::all(self.num_agents)
                .map(|a| a.default_name())
                .collect()
        } else {
            self.names.clone()
        }
    }

    /// Effective elimination threshold.
    #[must_use]
    pub fn elimination_threshold(&self) -> usize {
        self.rules.threshold_for(self.game_type)
    }

    /// Check everything that does not depend on the map layout.
    ///
    /// Map capacity is checked when start positions are assigned.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::config(format!(
                "board dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(GameError::config("board dimensions are too large"));
        }
        if self.num_agents == 0 || self.num_agents > 255 {
            return Err(GameError::config(format!(
                "num_agents must be between 1 and 255, got {}",
                self.num_agents
            )));
        }
        if !self.names.is_empty() {
            if self.names.len() != self.num_agents {
                return Err(GameError::config(format!(
                    "{} names given for {} agents",
                    self.names.len(),
                    self.num_agents
                )));
            }
            let mut sorted = self.names.clone();
            sorted.sort();
            sorted.dedup();
            if sorted.len() != self.names.len() {
                return Err(GameError::config("agent names must be unique"));
            }
        }

        let rules = &self.rules;
        if rules.max_health < 1 {
            return Err(GameError::config("max_health must be at least 1"));
        }
        if rules.initial_health < 1 || rules.initial_health > rules.max_health {
            return Err(GameError::config(format!(
                "initial_health must be in 1..={}, got {}",
                rules.max_health, rules.initial_health
            )));
        }
        if rules.start_length == 0 {
            return Err(GameError::config("start_length must be at least 1"));
        }
        if rules.hazard_damage < 0 {
            return Err(GameError::config("hazard_damage must not be negative"));
        }
        if let FoodSpawnPolicy::Probabilistic { chance_percent, .. } = rules.food_spawn {
            if chance_percent > 100 {
                return Err(GameError::config(format!(
                    "food spawn chance must be a percentage, got {chance_percent}"
                )));
            }
        }

        let threshold = self.elimination_threshold();
        if threshold >= self.num_agents {
            return Err(GameError::config(format!(
                "{} agents cannot play a {} game that ends at {} living snakes",
                self.num_agents, self.game_type, threshold
            )));
        }

        Ok(())
    }
}
