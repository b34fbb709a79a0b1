//! Service-subsystem error type.

use thiserror::Error;

use tms_graph::GraphError;

/// Errors raised while constructing a service or resolving its route.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("service {0:?} has no route stops")]
    EmptyRoute(String),

    #[error("service {0:?}: initial position is the only stop")]
    SingleStopRoute(String),

    #[error("service {service:?}: {source}")]
    Graph {
        service: String,
        #[source]
        source: GraphError,
    },
}

pub type ServiceResult<T> = Result<T, ServiceError>;
