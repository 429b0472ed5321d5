//! Food spawning after each turn.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Coord, FoodSpawnPolicy, GameRng};

/// Number of food items `policy` asks for on `board` this turn.
fn wanted(board: &Board, policy: FoodSpawnPolicy, rng: &mut GameRng) -> usize {
    match policy {
        FoodSpawnPolicy::Probabilistic {
            minimum,
            chance_percent,
        } => {
            let present = board.food_count();
            if present < minimum {
                minimum - present
            } else if rng.roll_percent(chance_percent) {
                1
            } else {
                0
            }
        }
        FoodSpawnPolicy::Refill { count } => count.saturating_sub(board.food_count()),
        FoodSpawnPolicy::Disabled => 0,
    }
}

/// Spawn food according to `policy`.
///
/// A full board is not an error: the spawn is skipped for this turn.
pub fn spawn_food(board: &mut Board, policy: FoodSpawnPolicy, rng: &mut GameRng) -> SmallVec<[Coord; 2]> {
    let mut spawned = SmallVec::new();
    for _ in 0..wanted(board, policy, rng) {
        match board.spawn_food(rng) {
            Ok(coord) => {
                tracing::trace!(%coord, "spawned food");
                spawned.push(coord);
            }
            Err(err) => {
                tracing::debug!(%err, "skipping food spawn");
                break;
            }
        }
    }
    spawned
}
