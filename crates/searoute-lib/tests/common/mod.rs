//! Common test utilities and fixture helpers.
//!
//! This module provides shared test infrastructure for integration tests,
//! including the canonical lane network and temporary network files.

use std::fs;
use std::path::PathBuf;

use searoute_lib::{fixture_network, Graph, NetworkSpec, FIXTURE_DETOUR};
use tempfile::TempDir;

/// The canonical five-port network (A-E).
#[allow(dead_code)]
pub fn fixture_graph() -> Graph {
    fixture_network().build().expect("fixture network builds")
}

/// Fixture network after the demonstration added the B-A detour lane.
#[allow(dead_code)]
pub fn fixture_graph_with_detour() -> Graph {
    let mut graph = fixture_graph();
    let (from, to, spec) = FIXTURE_DETOUR;
    graph
        .add_edge(from, to, spec)
        .expect("detour lane is valid");
    graph
}

/// Temporary directory holding a serialized network.
#[allow(dead_code)]
pub struct NetworkFile {
    /// Temp directory (dropped on struct drop)
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl NetworkFile {
    /// Serialize `spec` into `network.json` inside a fresh temp directory.
    pub fn new(spec: &NetworkSpec) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("network.json");
        let json = serde_json::to_string_pretty(spec).expect("serialize network");
        fs::write(&path, json).expect("write network file");

        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    /// Write raw contents, useful for malformed-input tests.
    pub fn raw(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("network.json");
        fs::write(&path, contents).expect("write network file");

        Self {
            _temp_dir: temp_dir,
            path,
        }
    }
}
