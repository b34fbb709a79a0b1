//! Network representation: nodes, directed weighted edges, and positions.

use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use tms_core::{Coordinate, EdgeIdx, NodeIdx};

use crate::error::{GraphError, GraphResult};
use crate::shortest_path::{PathInfo, PathTables};

// ── Input records ─────────────────────────────────────────────────────────────

/// Classification tag for a node.  Informational only; the engine never
/// branches on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Main,
    Station,
    Side,
}

/// Serialisable form of a node, as it appears in `graph_data.nodes[]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub node_id: String,
    #[serde(default)]
    pub loc: Coordinate,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,
}

/// Serialisable form of a directed edge, as it appears in
/// `graph_data.edges[]`.  `speed_limit` is optional: `None` means the edge
/// imposes no cap and the vehicle's own maximum applies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    pub edge_id: String,
    pub u: String,
    pub v: String,
    /// Metres.
    pub length: f64,
    /// m/s.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_limit: Option<f64>,
}

/// The serialisable input representation of a network graph.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<NodeData>,
    pub edges: Vec<EdgeData>,
}

// ── Built graph ───────────────────────────────────────────────────────────────

/// A node as stored in the built network.
#[derive(Clone, Debug)]
pub struct Node {
    pub id: String,
    pub loc: Coordinate,
    pub kind: Option<NodeKind>,
}

/// A directed edge with endpoint ids resolved to interned indices.
#[derive(Clone, Debug)]
pub struct Edge {
    pub id: String,
    pub u: NodeIdx,
    pub v: NodeIdx,
    /// Metres.
    pub length: f64,
    /// m/s; `None` = no restriction.
    pub speed_limit: Option<f64>,
}

/// A point along a directed edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    pub edge: EdgeIdx,
    /// Metres from the edge's U endpoint, in `[0, edge.length]`.
    pub distance_along_edge: f64,
}

/// Directed weighted graph with cached all-pairs shortest paths.
///
/// Build with [`Network::from_data`] (or incrementally via
/// [`add_node`](Self::add_node)/[`add_edge`](Self::add_edge)), then share
/// read-only for the duration of a simulation run.  Any topology change
/// invalidates the shortest-path tables and the per-pair path cache.
pub struct Network {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_ids: HashMap<String, NodeIdx>,
    edge_ids: HashMap<String, EdgeIdx>,
    edge_by_nodes: HashMap<(NodeIdx, NodeIdx), EdgeIdx>,
    /// Floyd–Warshall tables; empty until the first shortest-path query.
    paths: OnceCell<PathTables>,
    /// Memoized `PathInfo` per (start, end) pair.
    path_cache: RefCell<HashMap<(NodeIdx, NodeIdx), PathInfo>>,
}

impl Network {
    /// An empty network with no nodes or edges.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            node_ids: HashMap::new(),
            edge_ids: HashMap::new(),
            edge_by_nodes: HashMap::new(),
            paths: OnceCell::new(),
            path_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Build a network from its input representation, inserting nodes and
    /// edges in input order.  Fails on duplicate ids and dangling endpoints.
    pub fn from_data(data: GraphData) -> GraphResult<Self> {
        let mut net = Network::new();
        for n in data.nodes {
            net.add_node(n)?;
        }
        for e in data.edges {
            net.add_edge(e)?;
        }
        log::debug!(
            "network built: {} nodes, {} edges",
            net.node_count(),
            net.edge_count()
        );
        Ok(net)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert a node.  Fails if the id is already taken.
    pub fn add_node(&mut self, data: NodeData) -> GraphResult<NodeIdx> {
        if self.node_ids.contains_key(&data.node_id) {
            return Err(GraphError::DuplicateNode(data.node_id));
        }
        let idx = NodeIdx::new(self.nodes.len());
        self.node_ids.insert(data.node_id.clone(), idx);
        self.nodes.push(Node {
            id: data.node_id,
            loc: data.loc,
            kind: data.kind,
        });
        self.invalidate_paths();
        Ok(idx)
    }

    /// Insert a directed edge.  Fails if the id is already taken or either
    /// endpoint node is missing.
    pub fn add_edge(&mut self, data: EdgeData) -> GraphResult<EdgeIdx> {
        if self.edge_ids.contains_key(&data.edge_id) {
            return Err(GraphError::DuplicateEdge(data.edge_id));
        }
        let u = self.resolve_endpoint(&data.edge_id, &data.u)?;
        let v = self.resolve_endpoint(&data.edge_id, &data.v)?;

        let idx = EdgeIdx::new(self.edges.len());
        self.edge_ids.insert(data.edge_id.clone(), idx);
        self.edge_by_nodes.insert((u, v), idx);
        self.edges.push(Edge {
            id: data.edge_id,
            u,
            v,
            length: data.length,
            speed_limit: data.speed_limit,
        });
        self.invalidate_paths();
        Ok(idx)
    }

    fn resolve_endpoint(&self, edge: &str, node: &str) -> GraphResult<NodeIdx> {
        self.node_ids
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::EndpointNotFound {
                edge: edge.to_owned(),
                node: node.to_owned(),
            })
    }

    fn invalidate_paths(&mut self) {
        self.paths.take();
        self.path_cache.borrow_mut().clear();
    }

    // ── Dimensions and direct lookups ─────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The node at an interned index.  Indices are only produced by this
    /// network, so direct indexing is safe.
    #[inline]
    pub fn node(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.index()]
    }

    /// The edge at an interned index.
    #[inline]
    pub fn edge(&self, idx: EdgeIdx) -> &Edge {
        &self.edges[idx.index()]
    }

    /// Intern lookup: node id string to index.
    pub fn node_idx(&self, id: &str) -> GraphResult<NodeIdx> {
        self.node_ids
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(id.to_owned()))
    }

    /// Intern lookup: edge id string to index.
    pub fn edge_idx(&self, id: &str) -> GraphResult<EdgeIdx> {
        self.edge_ids
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::EdgeNotFound(id.to_owned()))
    }

    /// The directed edge from `u` to `v`, if one exists.
    pub fn edge_between(&self, u: NodeIdx, v: NodeIdx) -> GraphResult<EdgeIdx> {
        self.edge_by_nodes
            .get(&(u, v))
            .copied()
            .ok_or_else(|| GraphError::NoEdge {
                u: self.node(u).id.clone(),
                v: self.node(v).id.clone(),
            })
    }

    // ── Shortest-path queries ─────────────────────────────────────────────

    /// The shortest path from `start` to `end`.
    ///
    /// The trivial self-path is a zero-length route containing only `start`.
    /// Results are memoized per pair until the topology changes.
    pub fn shortest_path(&self, start: NodeIdx, end: NodeIdx) -> GraphResult<PathInfo> {
        if start == end {
            return Ok(PathInfo {
                key: path_key(&self.node(start).id, &self.node(end).id),
                route: vec![start],
                length: 0.0,
            });
        }

        if let Some(p) = self.path_cache.borrow().get(&(start, end)) {
            return Ok(p.clone());
        }

        let tables = self.tables();
        let length = tables.dist(start, end);
        let route = tables.reconstruct(start, end);
        let (length, route) = match route {
            Some(route) if length.is_finite() => (length, route),
            _ => {
                return Err(GraphError::NoPath {
                    from: self.node(start).id.clone(),
                    to: self.node(end).id.clone(),
                })
            }
        };

        let info = PathInfo {
            key: path_key(&self.node(start).id, &self.node(end).id),
            route,
            length,
        };
        self.path_cache
            .borrow_mut()
            .insert((start, end), info.clone());
        Ok(info)
    }

    /// The first edge on the shortest path from `u` toward `dest`.
    ///
    /// Fails with [`GraphError::AlreadyAtDestination`] when `u == dest`.
    pub fn next_edge(&self, u: NodeIdx, dest: NodeIdx) -> GraphResult<EdgeIdx> {
        let path = self.shortest_path(u, dest)?;
        if path.route.len() < 2 {
            return Err(GraphError::AlreadyAtDestination(self.node(dest).id.clone()));
        }
        self.edge_between(path.route[0], path.route[1])
    }

    /// A [`Position`] at distance 0 on the first edge of the shortest path
    /// from `u` to `v`.  Used to place a service at its initial node.
    pub fn path_start_position(&self, u: NodeIdx, v: NodeIdx) -> GraphResult<Position> {
        let path = self.shortest_path(u, v)?;
        if path.route.len() < 2 {
            return Err(GraphError::EmptyPath {
                u: self.node(u).id.clone(),
                v: self.node(v).id.clone(),
            });
        }
        let edge = self.edge_between(path.route[0], path.route[1])?;
        Ok(Position {
            edge,
            distance_along_edge: 0.0,
        })
    }

    fn tables(&self) -> &PathTables {
        self.paths.get_or_init(|| {
            log::debug!(
                "computing all-pairs shortest paths over {} nodes",
                self.nodes.len()
            );
            PathTables::compute(self.nodes.len(), &self.edges)
        })
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical cache key for a start→end pair.
fn path_key(start: &str, end: &str) -> String {
    format!("{start}->{end}")
}
