//! Unit tests for tms-graph.
//!
//! All tests use small hand-crafted networks built through the same input
//! records the JSON layer produces.

#[cfg(test)]
mod helpers {
    use crate::{EdgeData, GraphData, Network, NodeData};

    pub fn node(id: &str) -> NodeData {
        NodeData {
            node_id: id.to_owned(),
            loc: Default::default(),
            kind: None,
        }
    }

    pub fn edge(id: &str, u: &str, v: &str, length: f64) -> EdgeData {
        EdgeData {
            edge_id: id.to_owned(),
            u: u.to_owned(),
            v: v.to_owned(),
            length,
            speed_limit: None,
        }
    }

    /// A diamond network with two routes from A to D:
    ///
    ///   A→B→D  (100 + 100 = 200)
    ///   A→C→D  (50 + 500  = 550)
    ///
    /// Shortest A→D is always via B.
    pub fn diamond() -> Network {
        Network::from_data(GraphData {
            nodes: ["A", "B", "C", "D"].iter().map(|n| node(n)).collect(),
            edges: vec![
                edge("AB", "A", "B", 100.0),
                edge("BD", "B", "D", 100.0),
                edge("AC", "A", "C", 50.0),
                edge("CD", "C", "D", 500.0),
            ],
        })
        .unwrap()
    }
}

// ── Construction and validation ───────────────────────────────────────────────

#[cfg(test)]
mod build {
    use super::helpers::{diamond, edge, node};
    use crate::{GraphError, Network};

    #[test]
    fn empty_network() {
        let net = Network::new();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let net = diamond();
        assert_eq!(net.node_count(), 4);
        assert_eq!(net.edge_count(), 4);
        let a = net.node_idx("A").unwrap();
        assert_eq!(net.node(a).id, "A");
        let ab = net.edge_idx("AB").unwrap();
        assert_eq!(net.edge(ab).length, 100.0);
    }

    #[test]
    fn duplicate_node_rejected() {
        let mut net = Network::new();
        net.add_node(node("A")).unwrap();
        let err = net.add_node(node("A")).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateNode(id) if id == "A"));
    }

    #[test]
    fn duplicate_edge_rejected() {
        let mut net = Network::new();
        net.add_node(node("A")).unwrap();
        net.add_node(node("B")).unwrap();
        net.add_edge(edge("AB", "A", "B", 1.0)).unwrap();
        let err = net.add_edge(edge("AB", "B", "A", 1.0)).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateEdge(id) if id == "AB"));
    }

    #[test]
    fn dangling_endpoint_rejected() {
        let mut net = Network::new();
        net.add_node(node("A")).unwrap();
        let err = net.add_edge(edge("AX", "A", "X", 1.0)).unwrap_err();
        assert!(
            matches!(err, GraphError::EndpointNotFound { edge, node } if edge == "AX" && node == "X")
        );
    }

    #[test]
    fn unknown_lookups_fail() {
        let net = diamond();
        assert!(matches!(
            net.node_idx("Z"),
            Err(GraphError::NodeNotFound(_))
        ));
        assert!(matches!(
            net.edge_idx("ZZ"),
            Err(GraphError::EdgeNotFound(_))
        ));
    }

    #[test]
    fn edge_between_directed() {
        let net = diamond();
        let a = net.node_idx("A").unwrap();
        let b = net.node_idx("B").unwrap();
        let ab = net.edge_between(a, b).unwrap();
        assert_eq!(net.edge(ab).id, "AB");
        // No reverse edge was added.
        assert!(matches!(
            net.edge_between(b, a),
            Err(GraphError::NoEdge { .. })
        ));
    }
}

// ── Shortest paths ────────────────────────────────────────────────────────────

#[cfg(test)]
mod shortest_paths {
    use super::helpers::{diamond, edge, node};
    use crate::{GraphData, GraphError, Network};

    #[test]
    fn picks_the_shorter_route() {
        let net = diamond();
        let a = net.node_idx("A").unwrap();
        let d = net.node_idx("D").unwrap();
        let b = net.node_idx("B").unwrap();

        let path = net.shortest_path(a, d).unwrap();
        assert_eq!(path.length, 200.0);
        assert_eq!(path.route, vec![a, b, d]);
        assert_eq!(path.key, "A->D");
    }

    #[test]
    fn trivial_self_path() {
        let net = diamond();
        let a = net.node_idx("A").unwrap();
        let path = net.shortest_path(a, a).unwrap();
        assert_eq!(path.length, 0.0);
        assert_eq!(path.route, vec![a]);
    }

    #[test]
    fn repeated_queries_are_stable() {
        let net = diamond();
        let a = net.node_idx("A").unwrap();
        let d = net.node_idx("D").unwrap();
        let first = net.shortest_path(a, d).unwrap();
        let second = net.shortest_path(a, d).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn no_path_between_components() {
        let net = Network::from_data(GraphData {
            nodes: vec![node("A"), node("B"), node("C"), node("D")],
            edges: vec![edge("AB", "A", "B", 1.0), edge("CD", "C", "D", 1.0)],
        })
        .unwrap();
        let a = net.node_idx("A").unwrap();
        let c = net.node_idx("C").unwrap();
        assert!(matches!(
            net.shortest_path(a, c),
            Err(GraphError::NoPath { .. })
        ));
    }

    #[test]
    fn directed_edges_block_the_return_leg() {
        let net = Network::from_data(GraphData {
            nodes: vec![node("A"), node("B")],
            edges: vec![edge("AB", "A", "B", 1.0)],
        })
        .unwrap();
        let a = net.node_idx("A").unwrap();
        let b = net.node_idx("B").unwrap();
        assert!(net.shortest_path(a, b).is_ok());
        assert!(net.shortest_path(b, a).is_err());
    }

    #[test]
    fn topology_change_invalidates_cached_paths() {
        let mut net = diamond();
        let a = net.node_idx("A").unwrap();
        let d = net.node_idx("D").unwrap();
        assert_eq!(net.shortest_path(a, d).unwrap().length, 200.0);

        // A direct shortcut must displace the cached 200 m route.
        net.add_edge(edge("AD", "A", "D", 10.0)).unwrap();
        let path = net.shortest_path(a, d).unwrap();
        assert_eq!(path.length, 10.0);
        assert_eq!(path.route, vec![a, d]);
    }

    #[test]
    fn next_edge_takes_the_first_hop() {
        let net = diamond();
        let a = net.node_idx("A").unwrap();
        let d = net.node_idx("D").unwrap();
        let first = net.next_edge(a, d).unwrap();
        assert_eq!(net.edge(first).id, "AB");
    }

    #[test]
    fn next_edge_at_destination_fails() {
        let net = diamond();
        let a = net.node_idx("A").unwrap();
        assert!(matches!(
            net.next_edge(a, a),
            Err(GraphError::AlreadyAtDestination(_))
        ));
    }

    #[test]
    fn path_start_position_is_edge_origin() {
        let net = diamond();
        let a = net.node_idx("A").unwrap();
        let d = net.node_idx("D").unwrap();
        let pos = net.path_start_position(a, d).unwrap();
        assert_eq!(pos.edge, net.edge_idx("AB").unwrap());
        assert_eq!(pos.distance_along_edge, 0.0);
    }

    #[test]
    fn path_start_position_to_self_fails() {
        let net = diamond();
        let a = net.node_idx("A").unwrap();
        assert!(matches!(
            net.path_start_position(a, a),
            Err(GraphError::EmptyPath { .. })
        ));
    }
}

// ── Input record serde ────────────────────────────────────────────────────────

#[cfg(test)]
mod records {
    use crate::{GraphData, NodeKind};

    #[test]
    fn graph_data_from_json() {
        let json = r#"{
            "nodes": [
                {"node_id": "A", "loc": {"x": 0.0, "y": 0.0}, "type": "station"},
                {"node_id": "B"}
            ],
            "edges": [
                {"edge_id": "AB", "u": "A", "v": "B", "length": 1000.0, "speed_limit": 25.0},
                {"edge_id": "BA", "u": "B", "v": "A", "length": 1000.0}
            ]
        }"#;
        let data: GraphData = serde_json::from_str(json).unwrap();
        assert_eq!(data.nodes[0].kind, Some(NodeKind::Station));
        assert_eq!(data.nodes[1].kind, None);
        assert_eq!(data.edges[0].speed_limit, Some(25.0));
        assert_eq!(data.edges[1].speed_limit, None);
    }
}
