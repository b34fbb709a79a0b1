//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `tms-graph`.
///
/// Construction errors (`Duplicate*`, `EndpointNotFound`) surface invalid
/// input; lookup errors surface references to ids that were never inserted;
/// `NoPath` covers disconnected node pairs.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0:?} already exists")]
    DuplicateNode(String),

    #[error("edge {0:?} already exists")]
    DuplicateEdge(String),

    #[error("edge {edge:?}: endpoint node {node:?} not found")]
    EndpointNotFound { edge: String, node: String },

    #[error("node {0:?} not found")]
    NodeNotFound(String),

    #[error("edge {0:?} not found")]
    EdgeNotFound(String),

    #[error("no edge from {u:?} to {v:?}")]
    NoEdge { u: String, v: String },

    #[error("no path from {from:?} to {to:?}")]
    NoPath { from: String, to: String },

    #[error("already at destination {0:?}")]
    AlreadyAtDestination(String),

    #[error("no edges on path from {u:?} to {v:?}")]
    EmptyPath { u: String, v: String },
}

pub type GraphResult<T> = Result<T, GraphError>;
