//! Multi-agent environment bindings for Python.

use std::collections::{BTreeMap, HashMap};

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Direction, GameError, GameMap, GameOptions, GameType, Moves};
use crate::session::GameSession;

fn value_error(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|err| PyValueError::new_err(err.to_string()))
}

/// Python wrapper around a `GameSession`, keyed by agent name.
///
/// Observations and infos are JSON strings.
#[pyclass(name = "BattlesnakeEnv")]
pub struct PyBattlesnakeEnv {
    options: GameOptions,
    session: GameSession,
}

#[pymethods]
impl PyBattlesnakeEnv {
    /// Create an environment.
    ///
    /// # Arguments
    /// - width, height: Board size
    /// - num_agents: Number of snakes
    /// - game_map: "standard" or "empty"
    /// - game_type: "standard", "solo", "constrictor" or "wrapped"
    /// - names: Agent names (default agent_0, agent_1, ...)
    /// - seed: RNG seed; fresh entropy for every reset when omitted
    #[new]
    #[pyo3(signature = (
        width = 11,
        height = 11,
        num_agents = 4,
        game_map = "standard",
        game_type = "standard",
        names = None,
        seed = None
    ))]
    fn new(
        width: u32,
        height: u32,
        num_agents: usize,
        game_map: &str,
        game_type: &str,
        names: Option<Vec<String>>,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let game_map: GameMap = game_map.parse().map_err(value_error)?;
        let game_type: GameType = game_type.parse().map_err(value_error)?;

        let mut options = GameOptions::new(width, height, num_agents)
            .with_game_map(game_map)
            .with_game_type(game_type);
        if let Some(names) = names {
            options = options.with_names(names);
        }
        if let Some(seed) = seed {
            options = options.with_seed(seed);
        }

        let session = GameSession::new(options.clone()).map_err(value_error)?;
        Ok(Self { options, session })
    }

    /// Every agent name, in agent order.
    #[getter]
    fn possible_agents(&self) -> Vec<String> {
        self.session.names().to_vec()
    }

    /// Names of the agents still alive.
    #[getter]
    fn agents(&self) -> Vec<String> {
        self.session
            .living_agents()
            .into_iter()
            .filter_map(|agent| self.session.name_of(agent).map(str::to_string))
            .collect()
    }

    #[getter]
    fn turn(&self) -> u32 {
        self.session.turn()
    }

    /// Start a new episode. Returns {name: observation_json}.
    #[pyo3(signature = (seed = None))]
    fn reset(&mut self, seed: Option<u64>) -> PyResult<BTreeMap<String, String>> {
        let mut options = self.options.clone();
        if let Some(seed) = seed {
            options = options.with_seed(seed);
        }
        let observations = self.session.reset(options).map_err(value_error)?;

        observations
            .iter()
            .map(|(agent, obs)| {
                let name = self.session.name_of(agent).unwrap_or_default().to_string();
                Ok::<_, PyErr>((name, to_json(obs)?))
            })
            .collect()
    }

    /// Resolve one turn.
    ///
    /// `moves` maps agent name to a move index (0 up, 1 down, 2 left,
    /// 3 right). Returns {name: (observation_json, reward, done, info_json)}
    /// for every agent alive at the start of the turn.
    fn step(
        &mut self,
        moves: HashMap<String, Option<usize>>,
    ) -> PyResult<BTreeMap<String, (String, f32, bool, String)>> {
        let mut parsed = Moves::new();
        for (name, index) in moves {
            let agent = self
                .session
                .agent_by_name(&name)
                .ok_or_else(|| PyValueError::new_err(format!("unknown agent {name:?}")))?;
            let direction = match index {
                Some(index) => Some(
                    Direction::from_index(index)
                        .ok_or_else(|| PyValueError::new_err(format!("invalid move {index} for {name:?}")))?,
                ),
                None => None,
            };
            parsed.insert(agent, direction);
        }

        let results = self.session.step(&parsed).map_err(value_error)?;
        results
            .into_iter()
            .map(|(agent, result)| {
                let name = self.session.name_of(agent).unwrap_or_default().to_string();
                let entry = (
                    to_json(&result.observation)?,
                    result.reward,
                    result.done,
                    to_json(&result.info)?,
                );
                Ok::<_, PyErr>((name, entry))
            })
            .collect()
    }

    /// Whether the episode is over.
    fn done(&self) -> bool {
        self.session.is_done()
    }

    /// Print the board to `sys.stdout`. Modes: "color", "ascii", "human".
    #[pyo3(signature = (mode = "color"))]
    fn render(&self, py: Python<'_>, mode: &str) -> PyResult<()> {
        let text = self.render_text(mode)?;
        py.import_bound("sys")?
            .getattr("stdout")?
            .call_method1("write", (text,))?;
        Ok(())
    }

    /// The board as text, without printing it.
    #[pyo3(signature = (mode = "ascii"))]
    fn render_text(&self, mode: &str) -> PyResult<String> {
        let colorized = match mode {
            "color" => true,
            "ascii" | "human" => false,
            other => {
                return Err(PyValueError::new_err(format!(
                    "valid render modes are 'ascii' and 'color', got {other:?}"
                )))
            }
        };
        Ok(self.session.render(colorized))
    }

    fn __repr__(&self) -> String {
        format!(
            "BattlesnakeEnv({}x{}, agents={}, map={}, type={})",
            self.options.width,
            self.options.height,
            self.options.num_agents,
            self.options.game_map,
            self.options.game_type
        )
    }
}
