// Test-only helpers for `searoute-lib` unit tests
#![allow(dead_code)]

use crate::graph::{Graph, NodeId};
use crate::network::fixture_network;

/// The canonical five-port lane network.
pub fn fixture_graph() -> Graph {
    fixture_network().build().expect("fixture network is valid")
}

/// Identifier of a node that must exist in `graph`.
pub fn id(graph: &Graph, name: &str) -> NodeId {
    graph
        .node_id(name)
        .unwrap_or_else(|| panic!("node {name} present in fixture"))
}
