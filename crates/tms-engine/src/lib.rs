//! `tms-engine` — the fixed-timestep train management simulation engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`engine`]   | `Tms` driver: two-pass step loop, Movement Authority    |
//! | [`proposal`] | Kinematic proposal priority ladder                      |
//! | [`io`]       | JSON input/output records                               |
//! | [`error`]    | `EngineError`, `EngineResult<T>`                        |
//!
//! # The step loop
//!
//! The simulation advances in fixed timesteps.  Each step has two passes:
//!
//! 1. **Safety pass** — every service computes its minimal Movement
//!    Authority (MA): the track ahead it physically needs to stop, i.e. its
//!    braking distance.  The results are frozen for the step.
//! 2. **Motion pass** — every service, in input order, proposes its desired
//!    movement, has that proposal trimmed by the frozen MA record and edge
//!    speed limits, then updates its position, velocity, and state.
//!
//! The sweep is strictly sequential and uses no clock, threads, or
//! randomness: identical input produces byte-identical output.
//!
//! # Entry point
//!
//! [`run_json`] is the single outward contract, shared by the CLI and WASM
//! wrappers: JSON in, JSON out.

pub mod engine;
pub mod error;
pub mod io;

mod proposal;


pub use engine::Tms;
pub use error::{EngineError, EngineResult};
pub use io::{
    PositionLog, ServiceLog, SimulationInput, SimulationLog, SimulationLogRow, SimulationMeta,
};

/// Run a complete simulation from a JSON-encoded [`SimulationInput`],
/// returning the JSON-encoded [`SimulationLog`].
pub fn run_json(input: &str) -> EngineResult<String> {
    let input: SimulationInput = serde_json::from_str(input).map_err(EngineError::Parse)?;
    let mut tms = Tms::new(input)?;
    let log = tms.run()?;
    serde_json::to_string(&log).map_err(EngineError::Encode)
}
