//! Rules: turn resolution, end-of-game detection and map setup.
//!
//! `RulesEngine` is the seam the session drives; `StandardRules` implements
//! it for every game type. `maps` builds the initial state and `food`
//! implements the spawn policies.

pub mod engine;
pub mod food;
pub mod maps;
pub mod standard;

pub use engine::{GameResult, RulesEngine, TurnReport};
pub use standard::StandardRules;
