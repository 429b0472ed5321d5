//! Board coordinates.
//!
//! Coordinates follow the Battlesnake orientation: the origin is the
//! bottom-left cell and `y` grows upwards. They are signed so that a head
//! stepping off the board is still representable (and detectable).

use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A cell position on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Check if the coordinate lies inside a `width` x `height` board.
    #[must_use]
    pub fn in_bounds(self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as i64) < width as i64 && (self.y as i64) < height as i64
    }

    /// Wrap the coordinate around the edges of a `width` x `height` board.
    #[must_use]
    pub fn wrapped(self, width: u32, height: u32) -> Self {
        Self::new(self.x.rem_euclid(width as i32), self.y.rem_euclid(height as i32))
    }

    #[must_use]
    pub fn manhattan_distance(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The four diagonal neighbours.
    #[must_use]
    pub fn diagonals(self) -> [Coord; 4] {
        [
            Coord::new(self.x - 1, self.y - 1),
            Coord::new(self.x - 1, self.y + 1),
            Coord::new(self.x + 1, self.y - 1),
            Coord::new(self.x + 1, self.y + 1),
        ]
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
