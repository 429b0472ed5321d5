//! Python bindings for the battlesnake engine.
//!
//! # Quick Start
//!
//! ```python
//! import json
//! import random
//! import battlesnake_engine as bs
//!
//! env = bs.BattlesnakeEnv(width=7, height=7, num_agents=1, game_type="solo")
//! observations = env.reset(seed=42)
//!
//! while not env.done():
//!     moves = {name: random.randrange(4) for name in env.agents}
//!     results = env.step(moves)
//!     env.render("ascii")
//! ```

use pyo3::prelude::*;

mod py_env;

pub use py_env::*;

/// battlesnake_engine: simultaneous-move snake games for multi-agent RL.
#[pymodule]
fn battlesnake_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBattlesnakeEnv>()?;
    Ok(())
}
