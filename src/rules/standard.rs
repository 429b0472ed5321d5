//! Standard turn resolution, shared by every game type.
//!
//! A turn is resolved in four phases, never mutating the shared state
//! before the last one:
//!
//! 1. **Snapshot**: validate the moves against the living set.
//! 2. **Candidate**: on working copies of the living snakes, compute new
//!    heads, decay health, apply hazard damage, move bodies and feed.
//! 3. **Conflict resolution**: decide every death from the post-move
//!    working copies. Decisions read only the working copies, so agent
//!    iteration order cannot change the outcome.
//! 4. **Commit**: write snakes back, remove eaten food, rebuild occupancy,
//!    spawn food and advance the turn counter.
//!
//! Game types only toggle steps: `Wrapped` wraps heads around the edges,
//! `Constrictor` never decays health and never drops the tail.

use smallvec::SmallVec;

use super::engine::{RulesEngine, TurnReport};
use super::food;
use crate::board::Board;
use crate::core::{AgentId, Coord, Direction, GameError, GameMap, GameOptions, GameState, GameType, Moves, RulesSettings};
use crate::snake::{DeathCause, Snake};

type Death = (DeathCause, Option<AgentId>);

/// The rules engine used by every session.
#[derive(Clone, Debug)]
pub struct StandardRules {
    game_type: GameType,
    game_map: GameMap,
    settings: RulesSettings,
}

impl StandardRules {
    #[must_use]
    pub fn new(game_type: GameType, game_map: GameMap, settings: RulesSettings) -> Self {
        Self {
            game_type,
            game_map,
            settings,
        }
    }

    #[must_use]
    pub fn from_options(options: &GameOptions) -> Self {
        Self::new(options.game_type, options.game_map, options.rules.clone())
    }

    #[must_use]
    pub fn game_map(&self) -> GameMap {
        self.game_map
    }

    fn spawns_food(&self) -> bool {
        self.game_map.has_food() && !self.game_type.is_constrictor()
    }

    /// Snapshot phase: one direction per living snake, in agent order.
    fn collect_moves(
        &self,
        state: &GameState,
        moves: &Moves,
    ) -> Result<SmallVec<[(AgentId, Direction); 8]>, GameError> {
        for (&agent, direction) in moves {
            if !state.snakes().contains(agent) {
                return Err(GameError::UnknownAgent(agent));
            }
            if direction.is_some() && !state.is_alive(agent) {
                tracing::debug!(%agent, "ignoring move for eliminated agent");
            }
        }

        state
            .living_agents()
            .map(|agent| match moves.get(&agent).copied().flatten() {
                Some(direction) => Ok((agent, direction)),
                None => Err(GameError::MissingMove(agent)),
            })
            .collect()
    }

    fn candidate_head(&self, board: &Board, snake: &Snake, direction: Direction) -> Coord {
        let head = snake.advance(direction);
        if self.game_type.wraps() {
            board.wrap(head)
        } else {
            head
        }
    }

    /// Candidate phase on working copies. Returns the eaten food cells.
    fn move_and_feed(&self, board: &Board, working: &mut [Snake], heads: &[Coord]) -> SmallVec<[Coord; 4]> {
        let max_health = self.settings.max_health;
        let constrictor = self.game_type.is_constrictor();

        // Health decay, before any collision check.
        for (snake, &head) in working.iter_mut().zip(heads) {
            if constrictor {
                snake.feed(max_health);
                continue;
            }
            snake.damage(1);
            if board.is_hazard(head) && !board.is_food(head) {
                snake.damage(self.settings.hazard_damage);
            }
        }

        // Body update. Feeding resets health before starvation is judged.
        let mut eaten: SmallVec<[Coord; 4]> = SmallVec::new();
        for (snake, &head) in working.iter_mut().zip(heads) {
            snake.move_head(head);
            if constrictor {
                continue;
            }
            if board.is_food(head) {
                snake.feed(max_health);
                if !eaten.contains(&head) {
                    eaten.push(head);
                }
            } else {
                snake.shrink();
            }
        }
        eaten
    }

    /// Conflict resolution on the post-move working copies.
    fn find_deaths(&self, board: &Board, working: &[Snake]) -> Vec<Option<Death>> {
        // Pass 1: walls and starvation. These snakes are off the board for
        // everyone else's collision checks.
        let mut deaths: Vec<Option<Death>> = working
            .iter()
            .map(|snake| {
                if !board.contains(snake.head()) {
                    Some((DeathCause::WallCollision, None))
                } else if snake.is_starved() {
                    Some((DeathCause::Starvation, None))
                } else {
                    None
                }
            })
            .collect();

        let survivors: SmallVec<[usize; 8]> = (0..working.len()).filter(|&i| deaths[i].is_none()).collect();

        // Pass 2: bodies and heads, judged against every pass-1 survivor.
        let mut collisions: SmallVec<[(usize, Death); 8]> = SmallVec::new();
        for &i in &survivors {
            let snake = &working[i];
            let head = snake.head();

            let body_hit = survivors
                .iter()
                .map(|&j| &working[j])
                .find(|other| other.body().iter().skip(1).any(|&segment| segment == head));
            if let Some(other) = body_hit {
                collisions.push((i, (DeathCause::BodyCollision, Some(other.id))));
                continue;
            }

            // Lose a head-to-head to any rival at least as long. With a
            // strictly longest snake at the cell only the others die; with
            // a tie for longest, everyone dies.
            let rival = survivors
                .iter()
                .filter(|&&j| j != i && working[j].head() == head)
                .map(|&j| &working[j])
                .filter(|other| other.len() >= snake.len())
                .max_by_key(|other| (other.len(), std::cmp::Reverse(other.id)));
            if let Some(other) = rival {
                collisions.push((i, (DeathCause::HeadCollision, Some(other.id))));
            }
        }

        for (i, death) in collisions {
            deaths[i] = Some(death);
        }
        deaths
    }
}

impl RulesEngine for StandardRules {
    fn game_type(&self) -> GameType {
        self.game_type
    }

    fn settings(&self) -> &RulesSettings {
        &self.settings
    }

    fn resolve_turn(&self, state: &mut GameState, moves: &Moves) -> Result<TurnReport, GameError> {
        let directions = self.collect_moves(state, moves)?;

        let mut working: Vec<Snake> = Vec::with_capacity(directions.len());
        let mut heads: Vec<Coord> = Vec::with_capacity(directions.len());
        for &(agent, direction) in &directions {
            let snake = state.snake(agent).ok_or(GameError::UnknownAgent(agent))?;
            heads.push(self.candidate_head(&state.board, snake, direction));
            working.push(snake.clone());
        }

        let eaten = self.move_and_feed(&state.board, &mut working, &heads);
        let deaths = self.find_deaths(&state.board, &working);

        // Commit.
        let turn = state.turn + 1;
        let mut report = TurnReport {
            turn,
            ..TurnReport::default()
        };
        for (mut snake, death) in working.into_iter().zip(deaths) {
            let agent = snake.id;
            if eaten.contains(&snake.head()) {
                report.fed.push(agent);
            }
            if let Some((cause, by)) = death {
                snake.kill(cause, turn, by);
                if let Some(elimination) = snake.elimination() {
                    tracing::debug!(%agent, cause = %elimination.cause, turn, "snake eliminated");
                    report.eliminated.push((agent, *elimination));
                }
            }
            if let Some(slot) = state.snake_mut(agent) {
                *slot = snake;
            }
        }

        state.turn = turn;
        for &coord in &eaten {
            state.board.remove_food(coord);
        }
        state.sync_board()?;

        if self.spawns_food() {
            report.spawned_food = food::spawn_food(&mut state.board, self.settings.food_spawn, &mut state.rng);
        }

        tracing::debug!(
            turn,
            living = state.living_count(),
            eaten = eaten.len(),
            "turn resolved"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Occupant;
    use crate::core::{FoodSpawnPolicy, GameRng};

    fn a(i: u8) -> AgentId {
        AgentId::new(i)
    }

    fn body(points: &[(i32, i32)]) -> Vec<Coord> {
        points.iter().map(|&(x, y)| Coord::new(x, y)).collect()
    }

    fn rules(game_type: GameType) -> StandardRules {
        let settings = RulesSettings::default().with_food_spawn(FoodSpawnPolicy::Disabled);
        StandardRules::new(game_type, GameMap::Standard, settings)
    }

    fn state(width: u32, height: u32, bodies: &[&[(i32, i32)]]) -> GameState {
        let board = Board::new(width, height).unwrap();
        let snakes = bodies
            .iter()
            .enumerate()
            .map(|(i, b)| Snake::from_body(a(i as u8), body(b), 100).unwrap())
            .collect();
        GameState::new(board, snakes, GameRng::new(42)).unwrap()
    }

    fn moves(list: &[(u8, Direction)]) -> Moves {
        list.iter().map(|&(i, d)| (a(i), Some(d))).collect()
    }

    #[test]
    fn test_simple_move() {
        let rules = rules(GameType::Standard);
        let mut state = state(7, 7, &[&[(1, 1), (1, 0)]]);

        let report = rules
            .resolve_turn(&mut state, &moves(&[(0, Direction::Up)]))
            .unwrap();

        let snake = state.snake(a(0)).unwrap();
        assert_eq!(snake.body().iter().copied().collect::<Vec<_>>(), body(&[(1, 2), (1, 1)]));
        assert_eq!(snake.health(), 99);
        assert_eq!(state.turn, 1);
        assert_eq!(report.turn, 1);
        assert!(report.eliminated.is_empty());
        assert_eq!(state.board.occupant_at(Coord::new(1, 0)), Occupant::Empty);
        assert_eq!(
            state.board.occupant_at(Coord::new(1, 2)),
            Occupant::Snake { owner: a(0), segment: 0 }
        );
    }

    #[test]
    fn test_missing_move_leaves_state_untouched() {
        let rules = rules(GameType::Standard);
        let mut state = state(7, 7, &[&[(1, 1)], &[(5, 5)]]);

        let err = rules
            .resolve_turn(&mut state, &moves(&[(0, Direction::Up)]))
            .unwrap_err();
        assert_eq!(err, GameError::MissingMove(a(1)));

        let mut none_move = moves(&[(0, Direction::Up)]);
        none_move.insert(a(1), None);
        assert_eq!(
            rules.resolve_turn(&mut state, &none_move),
            Err(GameError::MissingMove(a(1)))
        );

        assert_eq!(state.turn, 0);
        assert_eq!(state.snake(a(0)).unwrap().head(), Coord::new(1, 1));
        assert_eq!(state.snake(a(0)).unwrap().health(), 100);
    }

    #[test]
    fn test_unknown_agent() {
        let rules = rules(GameType::Solo);
        let mut state = state(7, 7, &[&[(1, 1)]]);

        let err = rules
            .resolve_turn(&mut state, &moves(&[(0, Direction::Up), (3, Direction::Up)]))
            .unwrap_err();
        assert_eq!(err, GameError::UnknownAgent(a(3)));
    }

    #[test]
    fn test_wall_collision() {
        let rules = rules(GameType::Solo);
        let mut state = state(7, 7, &[&[(0, 3)]]);

        let report = rules
            .resolve_turn(&mut state, &moves(&[(0, Direction::Left)]))
            .unwrap();

        assert_eq!(
            report.elimination_of(a(0)).map(|e| e.cause),
            Some(DeathCause::WallCollision)
        );
        assert_eq!(state.living_count(), 0);
    }

    #[test]
    fn test_self_collision() {
        let rules = rules(GameType::Solo);
        // A hook: moving down from (2,2) lands on (2,1), which stays part
        // of the body after the tail moves.
        let mut state = state(7, 7, &[&[(2, 2), (3, 2), (3, 1), (2, 1), (1, 1)]]);

        let report = rules
            .resolve_turn(&mut state, &moves(&[(0, Direction::Down)]))
            .unwrap();

        let elimination = report.elimination_of(a(0)).unwrap();
        assert_eq!(elimination.cause, DeathCause::BodyCollision);
        assert_eq!(elimination.by, Some(a(0)));
    }

    #[test]
    fn test_following_a_tail_is_safe() {
        let rules = rules(GameType::Standard);
        // Snake 0 moves into the cell snake 1's tail leaves this turn.
        let mut state = state(7, 7, &[&[(1, 3), (0, 3)], &[(3, 3), (2, 3)]]);

        let report = rules
            .resolve_turn(&mut state, &moves(&[(0, Direction::Right), (1, Direction::Right)]))
            .unwrap();

        assert!(report.eliminated.is_empty());
    }

    #[test]
    fn test_body_collision_with_other() {
        let rules = rules(GameType::Standard);
        let mut state = state(7, 7, &[&[(2, 2), (1, 2)], &[(3, 3), (3, 2), (3, 1)]]);

        let report = rules
            .resolve_turn(&mut state, &moves(&[(0, Direction::Right), (1, Direction::Up)]))
            .unwrap();

        let elimination = report.elimination_of(a(0)).unwrap();
        assert_eq!(elimination.cause, DeathCause::BodyCollision);
        assert_eq!(elimination.by, Some(a(1)));
        assert!(state.is_alive(a(1)));
    }

    #[test]
    fn test_head_to_head_equal_length() {
        let rules = rules(GameType::Standard);
        let mut state = state(7, 7, &[&[(2, 3), (1, 3)], &[(4, 3), (5, 3)]]);

        let report = rules
            .resolve_turn(&mut state, &moves(&[(0, Direction::Right), (1, Direction::Left)]))
            .unwrap();

        assert_eq!(report.eliminated.len(), 2);
        for (_, elimination) in &report.eliminated {
            assert_eq!(elimination.cause, DeathCause::HeadCollision);
        }
    }

    #[test]
    fn test_head_to_head_longer_survives() {
        let rules = rules(GameType::Standard);
        let mut state = state(
            9,
            9,
            &[
                &[(2, 4), (1, 4), (0, 4)],
                &[(4, 4), (5, 4), (6, 4), (7, 4), (8, 4)],
            ],
        );

        let report = rules
            .resolve_turn(&mut state, &moves(&[(0, Direction::Right), (1, Direction::Left)]))
            .unwrap();

        assert_eq!(report.eliminated.len(), 1);
        let elimination = report.elimination_of(a(0)).unwrap();
        assert_eq!(elimination.cause, DeathCause::HeadCollision);
        assert_eq!(elimination.by, Some(a(1)));
        assert!(state.is_alive(a(1)));
        assert_eq!(
            state.board.occupant_at(Coord::new(3, 4)),
            Occupant::Snake { owner: a(1), segment: 0 }
        );
    }

    #[test]
    fn test_three_way_tie_for_longest() {
        let rules = rules(GameType::Standard);
        // Lengths 3, 3, 2 meet at (3,3): no strictly longest snake.
        let mut state = state(
            7,
            7,
            &[
                &[(2, 3), (1, 3), (0, 3)],
                &[(4, 3), (5, 3), (6, 3)],
                &[(3, 4), (3, 5)],
            ],
        );

        let report = rules
            .resolve_turn(
                &mut state,
                &moves(&[(0, Direction::Right), (1, Direction::Left), (2, Direction::Down)]),
            )
            .unwrap();

        assert_eq!(report.eliminated.len(), 3);
        assert_eq!(state.living_count(), 0);
    }

    #[test]
    fn test_order_independence() {
        // Same geometry with agent indices swapped gives mirrored results.
        let rules = rules(GameType::Standard);
        let mut first = state(9, 9, &[&[(2, 4), (1, 4)], &[(4, 4), (5, 4), (6, 4)]]);
        let mut second = state(9, 9, &[&[(4, 4), (5, 4), (6, 4)], &[(2, 4), (1, 4)]]);

        rules
            .resolve_turn(&mut first, &moves(&[(0, Direction::Right), (1, Direction::Left)]))
            .unwrap();
        rules
            .resolve_turn(&mut second, &moves(&[(0, Direction::Left), (1, Direction::Right)]))
            .unwrap();

        assert!(!first.is_alive(a(0)) && first.is_alive(a(1)));
        assert!(second.is_alive(a(0)) && !second.is_alive(a(1)));
    }

    #[test]
    fn test_eating_grows_and_heals() {
        let rules = rules(GameType::Solo);
        let mut state = state(7, 7, &[&[(2, 2), (1, 2)]]);
        state.board.place(Coord::new(3, 2), Occupant::Food).unwrap();

        let report = rules
            .resolve_turn(&mut state, &moves(&[(0, Direction::Right)]))
            .unwrap();

        let snake = state.snake(a(0)).unwrap();
        assert_eq!(snake.body().iter().copied().collect::<Vec<_>>(), body(&[(3, 2), (2, 2), (1, 2)]));
        assert_eq!(snake.health(), 100);
        assert!(report.ate(a(0)));
        assert_eq!(state.board.food_count(), 0);
    }

    #[test]
    fn test_growth_beats_starvation() {
        let rules = rules(GameType::Solo);
        let board = Board::new(7, 7).unwrap();
        let snake = Snake::from_body(a(0), body(&[(2, 2)]), 1).unwrap();
        let mut state = GameState::new(board, vec![snake], GameRng::new(1)).unwrap();
        state.board.place(Coord::new(2, 3), Occupant::Food).unwrap();

        let report = rules.resolve_turn(&mut state, &moves(&[(0, Direction::Up)])).unwrap();

        assert!(report.eliminated.is_empty());
        assert_eq!(state.snake(a(0)).unwrap().health(), 100);
        assert_eq!(state.snake(a(0)).unwrap().len(), 2);
    }

    #[test]
    fn test_starvation() {
        let rules = rules(GameType::Solo);
        let board = Board::new(7, 7).unwrap();
        let snake = Snake::from_body(a(0), body(&[(2, 2)]), 1).unwrap();
        let mut state = GameState::new(board, vec![snake], GameRng::new(1)).unwrap();

        let report = rules.resolve_turn(&mut state, &moves(&[(0, Direction::Up)])).unwrap();

        assert_eq!(
            report.elimination_of(a(0)).map(|e| e.cause),
            Some(DeathCause::Starvation)
        );
    }

    #[test]
    fn test_starved_snake_is_not_an_obstacle() {
        let rules = rules(GameType::Standard);
        let board = Board::new(7, 7).unwrap();
        let starving = Snake::from_body(a(0), body(&[(3, 3), (3, 2), (3, 1)]), 1).unwrap();
        let hungry = Snake::from_body(a(1), body(&[(2, 2), (1, 2)]), 100).unwrap();
        let mut state = GameState::new(board, vec![starving, hungry], GameRng::new(1)).unwrap();

        // Snake 1 moves onto (3,2), part of the starving snake's new body.
        let report = rules
            .resolve_turn(&mut state, &moves(&[(0, Direction::Up), (1, Direction::Right)]))
            .unwrap();
        assert_eq!(report.eliminated.len(), 1);
        assert_eq!(
            report.elimination_of(a(0)).map(|e| e.cause),
            Some(DeathCause::Starvation)
        );
    }

    #[test]
    fn test_hazard_damage() {
        let rules = rules(GameType::Solo);
        let mut state = state(7, 7, &[&[(2, 2)]]);
        state.board.place(Coord::new(2, 3), Occupant::Hazard).unwrap();

        rules.resolve_turn(&mut state, &moves(&[(0, Direction::Up)])).unwrap();
        assert_eq!(state.snake(a(0)).unwrap().health(), 100 - 1 - 14);
    }

    #[test]
    fn test_food_on_hazard_skips_damage() {
        let rules = rules(GameType::Solo);
        let mut state = state(7, 7, &[&[(2, 2)]]);
        state.board.place(Coord::new(2, 3), Occupant::Hazard).unwrap();
        state.board.place(Coord::new(2, 3), Occupant::Food).unwrap();

        rules.resolve_turn(&mut state, &moves(&[(0, Direction::Up)])).unwrap();
        assert_eq!(state.snake(a(0)).unwrap().health(), 100);
    }

    #[test]
    fn test_two_snakes_share_food() {
        let rules = rules(GameType::Standard);
        let mut state = state(9, 9, &[&[(2, 4), (1, 4)], &[(4, 4), (5, 4), (6, 4)]]);
        state.board.place(Coord::new(3, 4), Occupant::Food).unwrap();

        let report = rules
            .resolve_turn(&mut state, &moves(&[(0, Direction::Right), (1, Direction::Left)]))
            .unwrap();

        assert!(report.ate(a(0)) && report.ate(a(1)));
        // Both grew; the longer one still wins the head-to-head.
        assert!(!state.is_alive(a(0)));
        assert_eq!(state.snake(a(1)).unwrap().len(), 4);
        assert_eq!(state.board.food_count(), 0);
    }

    #[test]
    fn test_dead_agent_move_ignored() {
        let rules = rules(GameType::Standard);
        let mut state = state(7, 7, &[&[(0, 0)], &[(3, 3)], &[(5, 5)]]);

        rules
            .resolve_turn(
                &mut state,
                &moves(&[(0, Direction::Left), (1, Direction::Up), (2, Direction::Up)]),
            )
            .unwrap();
        assert!(!state.is_alive(a(0)));

        // Agent 0 absent: fine.
        rules
            .resolve_turn(&mut state, &moves(&[(1, Direction::Up), (2, Direction::Down)]))
            .unwrap();
        // Agent 0 given a move anyway: ignored.
        rules
            .resolve_turn(
                &mut state,
                &moves(&[(0, Direction::Right), (1, Direction::Right), (2, Direction::Down)]),
            )
            .unwrap();

        assert_eq!(state.snake(a(0)).unwrap().head(), Coord::new(-1, 0));
        assert_eq!(state.turn, 3);
    }

    #[test]
    fn test_wrapped_edges() {
        let rules = rules(GameType::Wrapped);
        let mut state = state(7, 7, &[&[(0, 3), (1, 3)], &[(5, 5)]]);

        let report = rules
            .resolve_turn(&mut state, &moves(&[(0, Direction::Left), (1, Direction::Up)]))
            .unwrap();

        assert!(report.eliminated.is_empty());
        assert_eq!(state.snake(a(0)).unwrap().head(), Coord::new(6, 3));
        assert_eq!(state.snake(a(1)).unwrap().head(), Coord::new(5, 6));
    }

    #[test]
    fn test_constrictor_grows_every_turn() {
        let rules = rules(GameType::Constrictor);
        let mut state = state(9, 9, &[&[(1, 1)], &[(7, 7)]]);

        for _ in 0..3 {
            rules
                .resolve_turn(&mut state, &moves(&[(0, Direction::Up), (1, Direction::Down)]))
                .unwrap();
        }

        for snake in state.snakes().values() {
            assert_eq!(snake.len(), 4);
            assert_eq!(snake.health(), 100);
        }
    }

    #[test]
    fn test_food_spawn_uses_session_rng() {
        let settings = RulesSettings::default().with_food_spawn(FoodSpawnPolicy::Refill { count: 2 });
        let rules = StandardRules::new(GameType::Solo, GameMap::Standard, settings);
        let mut first = state(7, 7, &[&[(3, 3)]]);
        let mut second = state(7, 7, &[&[(3, 3)]]);

        let r1 = rules.resolve_turn(&mut first, &moves(&[(0, Direction::Up)])).unwrap();
        let r2 = rules.resolve_turn(&mut second, &moves(&[(0, Direction::Up)])).unwrap();

        assert_eq!(r1.spawned_food.len(), 2);
        assert_eq!(r1.spawned_food, r2.spawned_food);
        assert_eq!(first.board.food(), second.board.food());
    }

    #[test]
    fn test_empty_map_never_spawns() {
        let settings = RulesSettings::default().with_food_spawn(FoodSpawnPolicy::Refill { count: 2 });
        let rules = StandardRules::new(GameType::Solo, GameMap::Empty, settings);
        let mut state = state(7, 7, &[&[(3, 3)]]);

        rules.resolve_turn(&mut state, &moves(&[(0, Direction::Up)])).unwrap();
        assert_eq!(state.board.food_count(), 0);
    }

    #[test]
    fn test_safe_moves() {
        let rules = rules(GameType::Standard);
        let state = state(7, 7, &[&[(0, 0), (1, 0), (2, 0)], &[(0, 2), (0, 3)]]);

        // Left and down leave the board; right is the neck. Up is free.
        assert_eq!(rules.safe_moves(&state, a(0)), vec![Direction::Up]);
        assert_eq!(rules.legal_moves(&state, a(0)).len(), 4);
    }

    #[test]
    fn test_safe_moves_wrapped() {
        let rules = rules(GameType::Wrapped);
        let state = state(3, 3, &[&[(0, 0)]]);
        assert_eq!(rules.safe_moves(&state, a(0)).len(), 4);
    }

    #[test]
    fn test_is_terminal() {
        use crate::rules::GameResult;

        let standard = rules(GameType::Standard);
        let mut state = state(7, 7, &[&[(0, 0)], &[(3, 3)]]);
        assert!(standard.is_terminal(&state).is_none());

        standard
            .resolve_turn(&mut state, &moves(&[(0, Direction::Left), (1, Direction::Up)]))
            .unwrap();
        assert_eq!(standard.is_terminal(&state), Some(GameResult::Winner(a(1))));

        let solo = rules(GameType::Solo);
        let mut state = state_solo();
        assert!(solo.is_terminal(&state).is_none());
        solo.resolve_turn(&mut state, &moves(&[(0, Direction::Down)])).unwrap();
        assert_eq!(solo.is_terminal(&state), Some(GameResult::NoSurvivors));
    }

    fn state_solo() -> GameState {
        state(3, 3, &[&[(1, 0)]])
    }
}
