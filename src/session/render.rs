//! Text rendering of the board.
//!
//! Row `height - 1` is printed first so that up is up. Each cell is one
//! character:
//!
//! | char | meaning |
//! |------|---------|
//! | `.`  | empty |
//! | `*`  | food |
//! | `~`  | hazard |
//! | `A`  | head of agent 0 (`B` for agent 1, ...) |
//! | `a`  | body of agent 0 |

use std::fmt::Write as _;
use std::io;

use crate::board::Occupant;
use crate::core::{AgentId, Coord, GameState};

const RESET: &str = "\x1b[0m";
const FOOD_COLOR: &str = "\x1b[31m";
const HAZARD_COLOR: &str = "\x1b[90m";
const AGENT_COLORS: [&str; 6] = [
    "\x1b[32m", "\x1b[34m", "\x1b[33m", "\x1b[35m", "\x1b[36m", "\x1b[37m",
];

fn agent_letter(agent: AgentId, head: bool) -> char {
    let letter = (b'a' + (agent.0 % 26)) as char;
    if head {
        letter.to_ascii_uppercase()
    } else {
        letter
    }
}

fn cell(occupant: Occupant) -> (char, Option<&'static str>) {
    match occupant {
        Occupant::Empty => ('.', None),
        Occupant::Food => ('*', Some(FOOD_COLOR)),
        Occupant::Hazard => ('~', Some(HAZARD_COLOR)),
        Occupant::Snake { owner, segment } => (
            agent_letter(owner, segment == 0),
            Some(AGENT_COLORS[owner.index() % AGENT_COLORS.len()]),
        ),
    }
}

/// Render `state` as text, one line per row plus a header and a legend.
#[must_use]
pub fn render(state: &GameState, names: &[String], colorized: bool) -> String {
    let board = &state.board;
    let mut out = String::new();
    let _ = writeln!(out, "turn {}", state.turn);

    for y in (0..board.height() as i32).rev() {
        for x in 0..board.width() as i32 {
            if x > 0 {
                out.push(' ');
            }
            let (ch, color) = cell(board.occupant_at(Coord::new(x, y)));
            match color.filter(|_| colorized) {
                Some(color) => {
                    out.push_str(color);
                    out.push(ch);
                    out.push_str(RESET);
                }
                None => out.push(ch),
            }
        }
        out.push('\n');
    }

    for (agent, snake) in state.snakes().iter() {
        let name = names.get(agent.index()).map_or("", String::as_str);
        let status = match snake.elimination() {
            None => format!("health {} length {}", snake.health(), snake.len()),
            Some(elimination) => format!("out on turn {} ({})", elimination.turn, elimination.cause),
        };
        let _ = writeln!(out, "{} {}: {}", agent_letter(agent, true), name, status);
    }
    out
}

/// Write the rendering of `state` to `writer`.
pub fn render_to<W: io::Write>(
    writer: &mut W,
    state: &GameState,
    names: &[String],
    colorized: bool,
) -> io::Result<()> {
    writer.write_all(render(state, names, colorized).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::GameRng;
    use crate::snake::Snake;

    fn state() -> GameState {
        let mut board = Board::new(3, 3).unwrap();
        board.place(Coord::new(2, 2), Occupant::Food).unwrap();
        board.place(Coord::new(0, 2), Occupant::Hazard).unwrap();
        let snakes = vec![Snake::from_body(AgentId::new(0), [Coord::new(0, 0), Coord::new(1, 0)], 100).unwrap()];
        GameState::new(board, snakes, GameRng::new(1)).unwrap()
    }

    #[test]
    fn test_plain_render() {
        let text = render(&state(), &["solo".to_string()], false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "turn 0");
        assert_eq!(lines[1], "~ . *");
        assert_eq!(lines[2], ". . .");
        assert_eq!(lines[3], "A a .");
        assert_eq!(lines[4], "A solo: health 100 length 2");
    }

    #[test]
    fn test_colorized_render() {
        let text = render(&state(), &[], true);
        assert!(text.contains(FOOD_COLOR));
        assert!(text.contains(AGENT_COLORS[0]));
        assert!(!render(&state(), &[], false).contains('\x1b'));
    }

    #[test]
    fn test_render_to_writer() {
        let mut buf = Vec::new();
        render_to(&mut buf, &state(), &[], false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render(&state(), &[], false));
    }
}
