//! Sparse occupancy map for the game board.
//!
//! The `Board` tracks what sits on each cell and validates coordinates. It
//! never applies game rules: collisions, feeding and elimination are the
//! rules engine's business.
//!
//! Hazards live in a separate overlay so that food or a snake can occupy a
//! hazard cell; `occupant_at` only reports `Hazard` for an otherwise empty
//! cell.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::core::{AgentId, Coord, GameError, GameRng};

/// What occupies a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    Empty,
    Food,
    Hazard,
    /// A body segment; `segment` 0 is the head.
    Snake { owner: AgentId, segment: usize },
}

/// Fixed-size board with sparse occupancy.
///
/// ```
/// use battlesnake_engine::board::{Board, Occupant};
/// use battlesnake_engine::core::Coord;
///
/// let mut board = Board::new(7, 7).unwrap();
/// board.place(Coord::new(3, 3), Occupant::Food).unwrap();
///
/// assert_eq!(board.occupant_at(Coord::new(3, 3)), Occupant::Food);
/// assert!(board.place(Coord::new(7, 0), Occupant::Food).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    width: u32,
    height: u32,
    /// Food and snake segments, at most one per cell.
    cells: FxHashMap<Coord, Occupant>,
    hazards: FxHashSet<Coord>,
}

impl Board {
    /// Create an empty board.
    pub fn new(width: u32, height: u32) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::config(format!(
                "board dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            cells: FxHashMap::default(),
            hazards: FxHashSet::default(),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if a coordinate lies on the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds(self.width, self.height)
    }

    /// Wrap a coordinate around the board edges.
    #[must_use]
    pub fn wrap(&self, coord: Coord) -> Coord {
        coord.wrapped(self.width, self.height)
    }

    /// The centre cell (rounded down on even sides).
    #[must_use]
    pub fn center(&self) -> Coord {
        Coord::new(((self.width - 1) / 2) as i32, ((self.height - 1) / 2) as i32)
    }

    fn check(&self, coord: Coord) -> Result<(), GameError> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(GameError::InvalidCoordinate {
                coord,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Put `occupant` on a cell, replacing whatever was there.
    ///
    /// `Empty` clears the cell's occupant; `Hazard` marks the hazard
    /// overlay and leaves the occupant alone.
    pub fn place(&mut self, coord: Coord, occupant: Occupant) -> Result<(), GameError> {
        self.check(coord)?;
        match occupant {
            Occupant::Empty => {
                self.cells.remove(&coord);
            }
            Occupant::Hazard => {
                self.hazards.insert(coord);
            }
            Occupant::Food | Occupant::Snake { .. } => {
                self.cells.insert(coord, occupant);
            }
        }
        Ok(())
    }

    /// Current occupant of a cell; `Empty` for vacant or off-board cells.
    #[must_use]
    pub fn occupant_at(&self, coord: Coord) -> Occupant {
        match self.cells.get(&coord) {
            Some(occupant) => *occupant,
            None if self.hazards.contains(&coord) => Occupant::Hazard,
            None => Occupant::Empty,
        }
    }

    #[must_use]
    pub fn is_food(&self, coord: Coord) -> bool {
        matches!(self.cells.get(&coord), Some(Occupant::Food))
    }

    #[must_use]
    pub fn is_hazard(&self, coord: Coord) -> bool {
        self.hazards.contains(&coord)
    }

    /// Remove a hazard marker.
    pub fn clear_hazard(&mut self, coord: Coord) {
        self.hazards.remove(&coord);
    }

    /// Remove food from a cell. Returns true if food was there.
    pub fn remove_food(&mut self, coord: Coord) -> bool {
        if self.is_food(coord) {
            self.cells.remove(&coord);
            true
        } else {
            false
        }
    }

    /// Remove every snake segment, keeping food and hazards.
    pub fn clear_snakes(&mut self) {
        self.cells.retain(|_, occupant| !matches!(occupant, Occupant::Snake { .. }));
    }

    /// Food cells in row-major order.
    #[must_use]
    pub fn food(&self) -> Vec<Coord> {
        let mut food: Vec<Coord> = self
            .cells
            .iter()
            .filter(|(_, occupant)| matches!(occupant, Occupant::Food))
            .map(|(coord, _)| *coord)
            .collect();
        food.sort_by_key(|c| (c.y, c.x));
        food
    }

    #[must_use]
    pub fn food_count(&self) -> usize {
        self.cells
            .values()
            .filter(|occupant| matches!(occupant, Occupant::Food))
            .count()
    }

    /// Hazard cells in row-major order.
    #[must_use]
    pub fn hazards(&self) -> Vec<Coord> {
        let mut hazards: Vec<Coord> = self.hazards.iter().copied().collect();
        hazards.sort_by_key(|c| (c.y, c.x));
        hazards
    }

    /// Every empty, non-hazard cell in row-major order.
    ///
    /// The order is fixed so that a seeded choice over it is reproducible
    /// regardless of hash map history.
    #[must_use]
    pub fn vacant_cells(&self) -> Vec<Coord> {
        let mut vacant = Vec::new();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let coord = Coord::new(x, y);
                if self.occupant_at(coord) == Occupant::Empty {
                    vacant.push(coord);
                }
            }
        }
        vacant
    }

    /// Put food on a vacant cell chosen by `rng`.
    pub fn spawn_food(&mut self, rng: &mut GameRng) -> Result<Coord, GameError> {
        let vacant = self.vacant_cells();
        let coord = *rng.choose(&vacant).ok_or(GameError::NoVacantCell)?;
        self.cells.insert(coord, Occupant::Food);
        Ok(coord)
    }
}
