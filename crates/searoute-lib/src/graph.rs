use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Dense identifier assigned to nodes in insertion order.
pub type NodeId = usize;

/// Minimum Jaro-Winkler similarity for a node name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Sea state along a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Good,
    #[default]
    Moderate,
    Bad,
}

impl Weather {
    /// Multiplier applied to heuristic estimates.
    pub fn heuristic_factor(self) -> f64 {
        match self {
            Weather::Good => 0.8,
            Weather::Moderate => 1.0,
            Weather::Bad => 3.5,
        }
    }

    /// Multiplier applied to route cost when traversing a lane.
    pub fn cost_factor(self) -> f64 {
        match self {
            Weather::Good => 0.8,
            Weather::Moderate => 1.0,
            Weather::Bad => 3.5,
        }
    }

    /// Multiplier applied to travel time when traversing a lane.
    pub fn time_factor(self) -> f64 {
        match self {
            Weather::Good => 0.8,
            Weather::Moderate => 1.0,
            Weather::Bad => 1.5,
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Weather::Good => "good",
            Weather::Moderate => "moderate",
            Weather::Bad => "bad",
        };
        f.write_str(value)
    }
}

/// Attributes of a lane supplied when connecting two nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSpec {
    pub distance: f64,
    /// Distance units covered per unit of fuel.
    pub fuel_efficiency: f64,
    pub weather: Weather,
    /// Distance units covered per hour. Lanes without a speed contribute no
    /// travel time.
    pub speed: Option<f64>,
}

impl EdgeSpec {
    /// Lane with moderate weather and no speed information.
    pub fn new(distance: f64, fuel_efficiency: f64) -> Self {
        Self {
            distance,
            fuel_efficiency,
            weather: Weather::default(),
            speed: None,
        }
    }

    pub fn weather(mut self, weather: Weather) -> Self {
        self.weather = weather;
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Reject non-finite or non-positive attributes.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("distance", self.distance)?;
        ensure_positive("fuel_efficiency", self.fuel_efficiency)?;
        if let Some(speed) = self.speed {
            ensure_positive("speed", speed)?;
        }
        Ok(())
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidEdge { field, value })
    }
}

/// Directed half of a lane, stored on the adjacency list of its source.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub distance: f64,
    pub fuel_efficiency: f64,
    pub weather: Weather,
    pub speed: Option<f64>,
}

impl Edge {
    fn from_spec(target: NodeId, spec: &EdgeSpec) -> Self {
        Self {
            target,
            distance: spec.distance,
            fuel_efficiency: spec.fuel_efficiency,
            weather: spec.weather,
            speed: spec.speed,
        }
    }

    /// Fuel consumed by this lane alone.
    pub fn fuel_required(&self) -> f64 {
        self.distance / self.fuel_efficiency
    }

    /// Weather-adjusted hours needed to sail this lane.
    pub fn travel_time(&self) -> f64 {
        match self.speed {
            Some(speed) => self.distance / speed * self.weather.time_factor(),
            None => 0.0,
        }
    }
}

/// Named location together with its outgoing lanes.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    edges: Vec<Edge>,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Undirected multigraph of shipping lanes.
///
/// Nodes are kept in insertion order so iteration is deterministic. Lanes are
/// never deduplicated: connecting the same pair twice leaves two parallel
/// edges that the search evaluates independently.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its identifier.
    ///
    /// Adding a name that already exists is a no-op returning the existing
    /// identifier; the node keeps its lanes.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let name = name.into();
        if let Some(&id) = self.index.get(&name) {
            tracing::debug!(node = %name, "node already present, keeping existing lanes");
            return id;
        }

        let id = self.nodes.len();
        self.index.insert(name.clone(), id);
        self.nodes.push(Node {
            name,
            edges: Vec::new(),
        });
        id
    }

    /// Connect two existing nodes with a lane in both directions.
    ///
    /// One record is appended to each endpoint's list, so a self-loop leaves
    /// two records on the same node.
    pub fn add_edge(&mut self, a: &str, b: &str, spec: EdgeSpec) -> Result<()> {
        spec.validate()?;
        let a_id = self.resolve(a)?;
        let b_id = self.resolve(b)?;

        self.nodes[a_id].edges.push(Edge::from_spec(b_id, &spec));
        self.nodes[b_id].edges.push(Edge::from_spec(a_id, &spec));

        tracing::debug!(
            from = a,
            to = b,
            distance = spec.distance,
            fuel_efficiency = spec.fuel_efficiency,
            weather = %spec.weather,
            "lane added"
        );
        Ok(())
    }

    /// Look up a node by name.
    pub fn node(&self, name: &str) -> Result<&Node> {
        let id = self.resolve(name)?;
        Ok(&self.nodes[id])
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn node_by_id(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Name of the node with the given identifier.
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(Node::name)
    }

    /// Return the outgoing lanes for a node identifier.
    pub fn neighbours(&self, id: NodeId) -> &[Edge] {
        self.nodes.get(id).map(Node::edges).unwrap_or(&[])
    }

    /// Iterate over nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected lanes, counting parallel lanes separately.
    pub fn edge_count(&self) -> usize {
        let records: usize = self.nodes.iter().map(|node| node.edges.len()).sum();
        records / 2
    }

    /// Resolve a node name, attaching suggestions when it is unknown.
    pub fn resolve(&self, name: &str) -> Result<NodeId> {
        self.node_id(name).ok_or_else(|| Error::UnknownNode {
            name: name.to_string(),
            suggestions: self.fuzzy_node_matches(name, 3),
        })
    }

    /// Return up to `limit` node names similar to `name`, best match first.
    pub fn fuzzy_node_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .nodes
            .iter()
            .map(|node| (strsim::jaro_winkler(name, &node.name), node.name.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}
