//! Board occupancy: food, hazards and snake segments.
//!
//! The board is a pure occupancy map with bounds checking. Rules never
//! live here.

pub mod grid;

pub use grid::{Board, Occupant};
