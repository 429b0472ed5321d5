//! A single snake: body, health and elimination record.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{AgentId, Coord, Direction, GameError};

/// Why a snake was eliminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeathCause {
    /// Head left the board.
    WallCollision,
    /// Head ran into a body segment, its own or another snake's.
    #[serde(rename = "self-or-body-collision")]
    BodyCollision,
    /// Lost a head-to-head meeting.
    HeadCollision,
    /// Health ran out.
    Starvation,
}

impl DeathCause {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DeathCause::WallCollision => "wall-collision",
            DeathCause::BodyCollision => "self-or-body-collision",
            DeathCause::HeadCollision => "head-collision",
            DeathCause::Starvation => "starvation",
        }
    }
}

impl std::fmt::Display for DeathCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of a snake's elimination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elimination {
    pub cause: DeathCause,
    /// Turn number on which the snake died.
    pub turn: u32,
    /// The snake whose body or head caused the death, if any.
    pub by: Option<AgentId>,
}

/// One agent's snake.
///
/// The body is ordered head first, tail last. It is an `im::Vector` so that
/// cloning a whole game state for a rollout is cheap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    pub id: AgentId,
    body: Vector<Coord>,
    health: i32,
    elimination: Option<Elimination>,
}

impl Snake {
    /// Spawn a snake on `head` with `start_length` segments.
    ///
    /// Segments beyond the head are stacked on the head cell and unfurl as
    /// the snake moves.
    #[must_use]
    pub fn new(id: AgentId, head: Coord, start_length: usize, health: i32) -> Self {
        let mut snake = Self {
            id,
            body: Vector::unit(head),
            health,
            elimination: None,
        };
        for _ in 1..start_length {
            snake.grow();
        }
        snake
    }

    /// Build a snake from an explicit body, head first.
    pub fn from_body(
        id: AgentId,
        body: impl IntoIterator<Item = Coord>,
        health: i32,
    ) -> Result<Self, GameError> {
        let body: Vector<Coord> = body.into_iter().collect();
        if body.is_empty() {
            return Err(GameError::config(format!("snake {id} needs at least one segment")));
        }
        Ok(Self {
            id,
            body,
            health,
            elimination: None,
        })
    }

    // === Queries ===

    #[must_use]
    pub fn head(&self) -> Coord {
        self.body[0]
    }

    #[must_use]
    pub fn body(&self) -> &Vector<Coord> {
        &self.body
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false: a snake has at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.elimination.is_none()
    }

    #[must_use]
    pub fn elimination(&self) -> Option<&Elimination> {
        self.elimination.as_ref()
    }

    /// Whether health has run out.
    #[must_use]
    pub fn is_starved(&self) -> bool {
        self.health <= 0
    }

    // === Movement ===

    /// Candidate head position for `direction`. Does not move the snake.
    #[must_use]
    pub fn advance(&self, direction: Direction) -> Coord {
        self.head().step(direction)
    }

    /// Prepend a new head segment.
    pub fn move_head(&mut self, head: Coord) {
        self.body.push_front(head);
    }

    /// Append a tail segment duplicating the current tail.
    pub fn grow(&mut self) {
        if let Some(tail) = self.body.back().copied() {
            self.body.push_back(tail);
        }
    }

    /// Remove the tail segment. The head is never removed.
    pub fn shrink(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }

    // === Health ===

    /// Reduce health, clamped at 0.
    pub fn damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Restore health to `max_health`.
    pub fn feed(&mut self, max_health: i32) {
        self.health = max_health;
    }

    /// Mark the snake dead. The first recorded elimination wins.
    pub fn kill(&mut self, cause: DeathCause, turn: u32, by: Option<AgentId>) {
        if self.elimination.is_none() {
            self.elimination = Some(Elimination { cause, turn, by });
        }
    }
}
