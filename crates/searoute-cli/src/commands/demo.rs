//! Demo command: the canonical two-query scenario on a mutating network.

use std::path::Path;

use anyhow::{Context, Result};

use searoute_cli::output::OutputFormat;
use searoute_lib::{find_path, FIXTURE_DETOUR};

use super::load_graph;

pub const DEMO_START: &str = "B";
pub const DEMO_GOAL: &str = "D";

/// Plan B -> D, add the B-A detour lane, then plan again.
pub fn handle_demo_command(
    network: Option<&Path>,
    format: OutputFormat,
    fuel_budget: f64,
) -> Result<()> {
    let mut graph = load_graph(network)?;

    let initial = find_path(&graph, DEMO_START, DEMO_GOAL, fuel_budget)
        .context("initial route could not be planned")?;
    println!("Initial route considering fuel, speed and weather:");
    print!("{}", format.render(&initial)?);

    let (from, to, spec) = FIXTURE_DETOUR;
    graph
        .add_edge(from, to, spec)
        .with_context(|| format!("failed to add the {from}-{to} lane"))?;
    tracing::info!(from, to, "added detour lane");

    let updated = find_path(&graph, DEMO_START, DEMO_GOAL, fuel_budget)
        .context("updated route could not be planned")?;
    println!("Updated route considering fuel, speed and weather:");
    print!("{}", format.render(&updated)?);

    Ok(())
}
