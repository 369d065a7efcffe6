//! Route command handler for computing lanes between two ports.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use searoute_cli::output::OutputFormat;
use searoute_lib::{
    plan_route, CostPropagation, FuelAccounting, HeuristicKind, RouteOptions, RouteRequest,
};

use super::load_graph;

/// Heuristic selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HeuristicArg {
    /// Difference of the first letters of the port names (not admissible).
    #[default]
    InitialLetter,
    /// No estimate; uniform-cost search.
    Zero,
}

impl From<HeuristicArg> for HeuristicKind {
    fn from(value: HeuristicArg) -> Self {
        match value {
            HeuristicArg::InitialLetter => HeuristicKind::InitialLetter,
            HeuristicArg::Zero => HeuristicKind::Zero,
        }
    }
}

/// Fuel accounting policy selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FuelAccountingArg {
    /// Budget caps each lane; reported fuel is the last lane's.
    #[default]
    LastLeg,
    /// Budget caps the running total along the route.
    Cumulative,
}

impl From<FuelAccountingArg> for FuelAccounting {
    fn from(value: FuelAccountingArg) -> Self {
        match value {
            FuelAccountingArg::LastLeg => FuelAccounting::LastLeg,
            FuelAccountingArg::Cumulative => FuelAccounting::Cumulative,
        }
    }
}

/// Cost propagation policy selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CostArg {
    /// Lane weather scales the whole accumulated cost.
    #[default]
    Compounding,
    /// Lane weather scales only that lane's distance.
    Additive,
}

impl From<CostArg> for CostPropagation {
    fn from(value: CostArg) -> Self {
        match value {
            CostArg::Compounding => CostPropagation::Compounding,
            CostArg::Additive => CostPropagation::Additive,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub from: String,
    pub to: String,
    pub fuel_budget: f64,
    pub heuristic: HeuristicArg,
    pub fuel_accounting: FuelAccountingArg,
    pub cost: CostArg,
    pub max_expansions: Option<usize>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(&self.from, &self.to, self.fuel_budget).with_options(RouteOptions {
            heuristic: self.heuristic.into(),
            fuel_accounting: self.fuel_accounting.into(),
            cost_propagation: self.cost.into(),
            max_expansions: self.max_expansions,
        })
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    network: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let graph = load_graph(network)?;
    let plan = plan_route(&graph, &args.to_request())
        .with_context(|| format!("failed to plan a route from {} to {}", args.from, args.to))?;

    print!("{}", format.render(&plan)?);
    Ok(())
}
