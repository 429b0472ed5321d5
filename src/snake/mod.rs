//! Snakes: per-agent body, health and elimination state.

mod instance;

pub use instance::{DeathCause, Elimination, Snake};
