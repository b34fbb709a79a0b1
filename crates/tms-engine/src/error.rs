//! Engine error type.

use thiserror::Error;

use tms_graph::GraphError;
use tms_service::ServiceError;

/// Errors produced while parsing, constructing, or running a simulation.
///
/// Every error aborts the run; the engine never recovers or retries.
/// Runtime errors carry the simulation time and service id needed to locate
/// the fault.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid input JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("encoding output: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("simulation {id:?}: time_step must be positive, got {got}")]
    InvalidTimeStep { id: String, got: f64 },

    #[error("building graph: {0}")]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("at t={time:.2}: service {service:?}: {source}")]
    Runtime {
        time: f64,
        service: String,
        #[source]
        source: GraphError,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
