//! `tms-graph` — the transport network graph and its shortest-path service.
//!
//! # Crate layout
//!
//! | Module            | Contents                                            |
//! |-------------------|-----------------------------------------------------|
//! | [`network`]       | `Network`, `Node`, `Edge`, `Position`, input records|
//! | [`shortest_path`] | Floyd–Warshall tables, `PathInfo`                   |
//! | [`error`]         | `GraphError`, `GraphResult<T>`                      |
//!
//! # Design
//!
//! Node and edge ids are opaque strings in the input; [`Network`] interns
//! them into dense [`NodeIdx`]/[`EdgeIdx`] indices at insertion time, so all
//! queries past the boundary are `Vec` lookups.  All-pairs shortest paths
//! are computed lazily (Floyd–Warshall, `O(|V|³)`) on the first query and
//! memoized per `(start, end)` pair; both caches are invalidated whenever
//! the topology changes.  The networks this engine targets are small (tens
//! to low hundreds of nodes), and the same pairs are queried every timestep
//! by every service, which is what makes the dense all-pairs table the
//! right trade.
//!
//! [`NodeIdx`]: tms_core::NodeIdx
//! [`EdgeIdx`]: tms_core::EdgeIdx

pub mod error;
pub mod network;
pub mod shortest_path;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use network::{Edge, EdgeData, GraphData, Network, Node, NodeData, NodeKind, Position};
pub use shortest_path::PathInfo;
