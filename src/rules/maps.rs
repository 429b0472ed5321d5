//! Game maps: where snakes start and where the first food goes.
//!
//! Boards with both sides of at least 7 cells and at most 8 snakes use a
//! fixed symmetric layout: the four corners inset by one cell, then the four
//! edge midpoints. Each group is shuffled with the session RNG so that no
//! agent index is tied to a particular corner. Other boards place snakes on
//! distinct random cells of even parity, which keeps every pair of snakes
//! able to meet head to head.

use crate::board::{Board, Occupant};
use crate::core::{AgentId, Coord, GameError, GameOptions, GameRng, GameState};
use crate::snake::Snake;

const FIXED_LAYOUT_MIN_SIDE: u32 = 7;
const FIXED_LAYOUT_SLOTS: usize = 8;

/// Build the state for a fresh episode.
///
/// Validates `options` first; nothing is returned on failure.
pub fn initial_state(options: &GameOptions, mut rng: GameRng) -> Result<GameState, GameError> {
    options.validate()?;

    let mut board = Board::new(options.width, options.height)?;
    let starts = start_positions(&board, options.num_agents, &mut rng)?;

    if options.game_map.has_food() && !options.game_type.is_constrictor() {
        place_initial_food(&mut board, &starts, &mut rng)?;
    }

    let snakes = starts
        .iter()
        .enumerate()
        .map(|(index, &head)| {
            Snake::new(
                AgentId::new(index as u8),
                head,
                options.rules.start_length,
                options.rules.initial_health,
            )
        })
        .collect();

    GameState::new(board, snakes, rng)
}

/// Start cells for `count` snakes.
pub fn start_positions(board: &Board, count: usize, rng: &mut GameRng) -> Result<Vec<Coord>, GameError> {
    let fixed = board.width() >= FIXED_LAYOUT_MIN_SIDE
        && board.height() >= FIXED_LAYOUT_MIN_SIDE
        && count <= FIXED_LAYOUT_SLOTS;
    if fixed {
        Ok(fixed_start_positions(board, count, rng))
    } else {
        random_start_positions(board, count, rng)
    }
}

fn fixed_start_positions(board: &Board, count: usize, rng: &mut GameRng) -> Vec<Coord> {
    let mn = 1;
    let max_x = board.width() as i32 - 2;
    let max_y = board.height() as i32 - 2;
    let mid_x = (board.width() as i32 - 1) / 2;
    let mid_y = (board.height() as i32 - 1) / 2;

    let mut corners = vec![
        Coord::new(mn, mn),
        Coord::new(mn, max_y),
        Coord::new(max_x, mn),
        Coord::new(max_x, max_y),
    ];
    let mut edges = vec![
        Coord::new(mn, mid_y),
        Coord::new(mid_x, mn),
        Coord::new(max_x, mid_y),
        Coord::new(mid_x, max_y),
    ];
    rng.shuffle(&mut corners);
    rng.shuffle(&mut edges);

    corners.into_iter().chain(edges).take(count).collect()
}

fn random_start_positions(board: &Board, count: usize, rng: &mut GameRng) -> Result<Vec<Coord>, GameError> {
    let mut cells: Vec<Coord> = board
        .vacant_cells()
        .into_iter()
        .filter(|c| (c.x + c.y) % 2 == 0)
        .collect();
    if cells.len() < count {
        return Err(GameError::config(format!(
            "a {}x{} board has room for {} snakes, {} requested",
            board.width(),
            board.height(),
            cells.len(),
            count
        )));
    }
    rng.shuffle(&mut cells);
    cells.truncate(count);
    Ok(cells)
}

/// One food diagonal to each start cell, pointing away from the centre,
/// plus one in the centre.
fn place_initial_food(board: &mut Board, starts: &[Coord], rng: &mut GameRng) -> Result<(), GameError> {
    let center = board.center();

    for &start in starts {
        let start_distance = start.manhattan_distance(center);
        let candidates: Vec<Coord> = start
            .diagonals()
            .into_iter()
            .filter(|&c| {
                board.contains(c)
                    && c != center
                    && !starts.contains(&c)
                    && board.occupant_at(c) == Occupant::Empty
                    && c.manhattan_distance(center) >= start_distance
            })
            .collect();

        let chosen = match rng.choose(&candidates) {
            Some(&c) => Some(c),
            None => {
                let vacant: Vec<Coord> = board
                    .vacant_cells()
                    .into_iter()
                    .filter(|c| !starts.contains(c))
                    .collect();
                rng.choose(&vacant).copied()
            }
        };
        match chosen {
            Some(coord) => board.place(coord, Occupant::Food)?,
            None => tracing::debug!(%start, "no room for starting food"),
        }
    }

    if !starts.contains(&center) && board.occupant_at(center) == Occupant::Empty {
        board.place(center, Occupant::Food)?;
    }
    Ok(())
}
