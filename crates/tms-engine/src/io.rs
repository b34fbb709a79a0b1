//! JSON input and output records.
//!
//! These types define the entire outward contract of the engine: a
//! [`SimulationInput`] goes in, a [`SimulationLog`] comes out.  The
//! `simulation_meta` block is echoed to the output verbatim so downstream
//! tooling can pair logs with the run that produced them.

use serde::{Deserialize, Serialize};

use tms_graph::GraphData;
use tms_service::{ServiceData, ServiceState};

// ── Input ─────────────────────────────────────────────────────────────────────

/// Identity and timing parameters for a simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationMeta {
    pub simulation_id: String,
    /// Total simulated time, seconds.
    pub run_time: f64,
    /// Step size, seconds.  Must be positive.
    pub time_step: f64,
}

/// The complete, self-contained input to the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    pub simulation_meta: SimulationMeta,
    pub graph_data: GraphData,
    pub service_list: Vec<ServiceData>,
}

// ── Output ────────────────────────────────────────────────────────────────────

/// A service's position in output form, with the edge id resolved back to
/// its input string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionLog {
    pub edge: String,
    /// Metres.
    pub distance_along_edge: f64,
}

/// A point-in-time snapshot of one service's observable state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceLog {
    pub service_id: String,
    pub current_position: PositionLog,
    pub state: ServiceState,
    /// m/s.
    pub velocity: f64,
    /// Seconds.
    pub remaining_dwell: f64,
    pub next_stop: String,
}

/// The state of all services at a single timestep.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationLogRow {
    /// Seconds.
    pub timestamp: f64,
    pub service_logs: Vec<ServiceLog>,
}

/// The complete output of a simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationLog {
    pub simulation_meta: SimulationMeta,
    pub output: Vec<SimulationLogRow>,
}
