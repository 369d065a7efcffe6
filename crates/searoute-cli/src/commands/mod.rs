// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod demo;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use searoute_lib::{fixture_network, load_network, Graph};

/// Load the network file, or the built-in five-port fixture when none is given.
pub fn load_graph(network: Option<&Path>) -> Result<Graph> {
    match network {
        Some(path) => load_network(path)
            .with_context(|| format!("failed to load network from {}", path.display())),
        None => {
            tracing::debug!("no network file given, using the built-in fixture");
            fixture_network()
                .build()
                .context("failed to build the built-in network")
        }
    }
}
