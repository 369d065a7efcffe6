//! Lane network descriptions.
//!
//! Networks are described as JSON documents listing port names and the lanes
//! between them:
//!
//! ```json
//! {
//!   "nodes": ["A", "B"],
//!   "edges": [
//!     { "from": "A", "to": "B", "distance": 800, "fuel_efficiency": 15,
//!       "weather": "bad", "speed": 10 }
//!   ]
//! }
//! ```
//!
//! `weather` defaults to `moderate` and `speed` may be omitted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{EdgeSpec, Graph, Weather};

/// Serializable description of a lane network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// One undirected lane in a [`NetworkSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub fuel_efficiency: f64,
    #[serde(default)]
    pub weather: Weather,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl EdgeRecord {
    pub fn spec(&self) -> EdgeSpec {
        EdgeSpec {
            distance: self.distance,
            fuel_efficiency: self.fuel_efficiency,
            weather: self.weather,
            speed: self.speed,
        }
    }
}

impl NetworkSpec {
    /// Parse a network from a JSON document.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Build a [`Graph`], adding nodes first and lanes in listed order.
    pub fn build(&self) -> Result<Graph> {
        let mut graph = Graph::new();
        for name in &self.nodes {
            graph.add_node(name.as_str());
        }
        for edge in &self.edges {
            graph.add_edge(&edge.from, &edge.to, edge.spec())?;
        }

        tracing::debug!(
            nodes = graph.node_count(),
            lanes = graph.edge_count(),
            "network built"
        );
        Ok(graph)
    }
}

/// Load and build a network from a JSON file.
pub fn load_network(path: &Path) -> Result<Graph> {
    let contents = fs::read_to_string(path).map_err(|source| Error::NetworkRead {
        path: path.to_path_buf(),
        source,
    })?;
    NetworkSpec::from_json(&contents)?.build()
}

/// Lane added by the demonstration scenario between the two queries.
pub const FIXTURE_DETOUR: (&str, &str, EdgeSpec) = (
    "B",
    "A",
    EdgeSpec {
        distance: 200.0,
        fuel_efficiency: 12.0,
        weather: Weather::Good,
        speed: Some(20.0),
    },
);

/// The canonical five-port network used by the demonstration and tests.
pub fn fixture_network() -> NetworkSpec {
    let lane = |from: &str, to: &str, distance, fuel_efficiency, weather, speed| EdgeRecord {
        from: from.to_string(),
        to: to.to_string(),
        distance,
        fuel_efficiency,
        weather,
        speed: Some(speed),
    };

    NetworkSpec {
        nodes: ["A", "B", "C", "D", "E"]
            .into_iter()
            .map(String::from)
            .collect(),
        edges: vec![
            lane("A", "B", 800.0, 15.0, Weather::Bad, 10.0),
            lane("A", "C", 200.0, 18.0, Weather::Moderate, 60.0),
            lane("B", "D", 150.0, 10.0, Weather::Bad, 40.0),
            lane("C", "D", 100.0, 20.0, Weather::Good, 55.0),
            lane("D", "E", 507.0, 12.0, Weather::Moderate, 50.0),
            lane("B", "E", 300.0, 14.0, Weather::Bad, 45.0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_builds() {
        let graph = fixture_network().build().unwrap();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 6);
        let names: Vec<_> = graph.nodes().map(|(_, node)| node.name()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn parses_defaults() {
        let spec = NetworkSpec::from_json(
            r#"{
                "nodes": ["P", "Q"],
                "edges": [{ "from": "P", "to": "Q", "distance": 10, "fuel_efficiency": 2 }]
            }"#,
        )
        .unwrap();

        let edge = &spec.edges[0];
        assert_eq!(edge.weather, Weather::Moderate);
        assert_eq!(edge.speed, None);
        assert_eq!(spec.build().unwrap().edge_count(), 1);
    }

    #[test]
    fn rejects_lane_to_unknown_port() {
        let spec = NetworkSpec::from_json(
            r#"{ "nodes": ["P"], "edges": [{ "from": "P", "to": "Q", "distance": 1, "fuel_efficiency": 1 }] }"#,
        )
        .unwrap();
        assert!(matches!(spec.build(), Err(Error::UnknownNode { .. })));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            NetworkSpec::from_json("{ \"nodes\": 3 }"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn load_network_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = load_network(&path).unwrap_err();
        assert!(matches!(err, Error::NetworkRead { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn load_network_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lanes.json");
        let json = serde_json::to_string(&fixture_network()).unwrap();
        std::fs::write(&path, json).unwrap();

        let graph = load_network(&path).unwrap();
        assert_eq!(graph.edge_count(), 6);
    }
}
