//! searoute library entry points.
//!
//! This crate models shipping lanes as an undirected multigraph, estimates
//! remaining distance with pluggable heuristics, and runs a fuel-constrained
//! A* search over the graph. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod heuristic;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use error::{Error, Result};
pub use graph::{Edge, EdgeSpec, Graph, Node, NodeId, Weather};
pub use heuristic::{Heuristic, HeuristicKind, InitialLetterHeuristic, ZeroHeuristic};
pub use network::{fixture_network, load_network, EdgeRecord, NetworkSpec, FIXTURE_DETOUR};
pub use output::{RouteRenderMode, RouteSummary};
pub use path::{
    find_route_a_star, reconstruct_path, CostPropagation, FuelAccounting, LegRecord, Predecessors,
    SearchConstraints, SearchOutcome,
};
pub use routing::{find_path, plan_route, RouteLeg, RouteOptions, RoutePlan, RouteRequest};
