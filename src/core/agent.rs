//! Agent identification and per-agent data storage.
//!
//! ## AgentId
//!
//! Type-safe agent identifier supporting 1-255 snakes. The id is the
//! agent's index and stays stable for the whole session, including after
//! the snake has been eliminated.
//!
//! ## AgentMap
//!
//! Dense per-agent storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `AgentId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Agent identifier supporting 1-255 agents.
///
/// Agent indices are 0-based: the first agent is `AgentId(0)`, displayed
/// as `agent_0` to match the environment's default agent names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u8);

impl AgentId {
    /// Create a new agent ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw agent index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all agent IDs for a game with `agent_count` agents.
    ///
    /// ```
    /// use battlesnake_engine::core::AgentId;
    ///
    /// let agents: Vec<_> = AgentId::all(4).collect();
    /// assert_eq!(agents.len(), 4);
    /// assert_eq!(agents[3], AgentId::new(3));
    /// ```
    pub fn all(agent_count: usize) -> impl Iterator<Item = AgentId> {
        (0..agent_count as u8).map(AgentId)
    }

    /// Default environment name for this agent.
    #[must_use]
    pub fn default_name(self) -> String {
        format!("agent_{}", self.0)
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "agent_{}", self.0)
    }
}

/// Per-agent data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per agent.
///
/// ```
/// use battlesnake_engine::core::{AgentId, AgentMap};
///
/// let mut health: AgentMap<i32> = AgentMap::new(4, |_| 100);
/// health[AgentId::new(1)] = 42;
/// assert_eq!(health[AgentId::new(0)], 100);
/// assert_eq!(health[AgentId::new(1)], 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentMap<T> {
    data: Vec<T>,
}

impl<T> AgentMap<T> {
    /// Create a new AgentMap with values from a factory function.
    ///
    /// Callers validate `agent_count` beforehand; the session rejects
    /// configurations outside 1-255 agents.
    pub fn new(agent_count: usize, factory: impl FnMut(AgentId) -> T) -> Self {
        debug_assert!(agent_count <= 255, "At most 255 agents supported");

        let data = (0..agent_count as u8).map(AgentId).map(factory).collect();

        Self { data }
    }

    /// Create a new AgentMap with all entries set to the same value.
    pub fn with_value(agent_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(agent_count, |_| value.clone())
    }

    /// Build from per-agent values in agent order.
    pub fn from_vec(data: Vec<T>) -> Self {
        debug_assert!(data.len() <= 255, "At most 255 agents supported");
        Self { data }
    }

    /// Get the number of agents.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to an agent's data, if the agent exists.
    #[must_use]
    pub fn get(&self, agent: AgentId) -> Option<&T> {
        self.data.get(agent.index())
    }

    /// Get a mutable reference to an agent's data, if the agent exists.
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut T> {
        self.data.get_mut(agent.index())
    }

    /// Check whether `agent` belongs to this map.
    #[must_use]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.data.len()
    }

    /// Iterate over (AgentId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (AgentId(i as u8), v))
    }

    /// Iterate over (AgentId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AgentId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (AgentId(i as u8), v))
    }

    /// Iterate over the values in agent order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all agent IDs.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> {
        (0..self.data.len() as u8).map(AgentId)
    }
}

impl<T> Index<AgentId> for AgentMap<T> {
    type Output = T;

    fn index(&self, agent: AgentId) -> &Self::Output {
        &self.data[agent.index()]
    }
}

impl<T> IndexMut<AgentId> for AgentMap<T> {
    fn index_mut(&mut self, agent: AgentId) -> &mut Self::Output {
        &mut self.data[agent.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_id_basics() {
        let a0 = AgentId::new(0);
        let a1 = AgentId::new(1);

        assert_eq!(a0.index(), 0);
        assert_eq!(a1.index(), 1);
        assert_eq!(format!("{}", a1), "agent_1");
        assert_eq!(a1.default_name(), "agent_1");
        assert!(a0 < a1);
    }

    #[test]
    fn test_agent_map_new() {
        let map: AgentMap<i32> = AgentMap::new(3, |a| a.index() as i32 * 10);

        assert_eq!(map[AgentId::new(0)], 0);
        assert_eq!(map[AgentId::new(2)], 20);
        assert_eq!(map.agent_count(), 3);
    }

    #[test]
    fn test_agent_map_get_out_of_range() {
        let map: AgentMap<i32> = AgentMap::with_value(2, 7);

        assert_eq!(map.get(AgentId::new(1)), Some(&7));
        assert_eq!(map.get(AgentId::new(2)), None);
        assert!(map.contains(AgentId::new(1)));
        assert!(!map.contains(AgentId::new(5)));
    }

    #[test]
    fn test_agent_map_iter() {
        let mut map: AgentMap<i32> = AgentMap::from_vec(vec![1, 2, 3]);
        for (_, v) in map.iter_mut() {
            *v += 1;
        }

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (AgentId::new(0), &2));
        assert_eq!(pairs[2], (AgentId::new(2), &4));
        assert_eq!(map.agent_ids().count(), 3);
    }

    #[test]
    fn test_agent_map_serialization() {
        let map: AgentMap<i32> = AgentMap::new(2, |a| a.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: AgentMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
