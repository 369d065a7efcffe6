//! Name-level route planning on top of [`find_route_a_star`].
//!
//! ```
//! use searoute_lib::{find_path, fixture_network};
//!
//! let graph = fixture_network().build()?;
//! let plan = find_path(&graph, "B", "D", 20.0)?;
//! assert_eq!(plan.path, vec!["B", "D"]);
//! assert_eq!(plan.total_time, 5);
//! # Ok::<(), searoute_lib::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{Graph, Weather};
use crate::heuristic::HeuristicKind;
use crate::path::{
    find_route_a_star, CostPropagation, FuelAccounting, SearchConstraints, SearchOutcome,
};

/// Search policies applied to a route request. Defaults reproduce the
/// reference lane planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    pub heuristic: HeuristicKind,
    pub fuel_accounting: FuelAccounting,
    pub cost_propagation: CostPropagation,
    pub max_expansions: Option<usize>,
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub fuel_budget: f64,
    pub options: RouteOptions,
}

impl RouteRequest {
    /// Request with default search options.
    pub fn new(start: impl Into<String>, goal: impl Into<String>, fuel_budget: f64) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            fuel_budget,
            options: RouteOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RouteOptions) -> Self {
        self.options = options;
        self
    }

    fn constraints(&self) -> SearchConstraints {
        SearchConstraints {
            fuel_budget: self.fuel_budget,
            fuel_accounting: self.options.fuel_accounting,
            cost_propagation: self.options.cost_propagation,
            max_expansions: self.options.max_expansions,
        }
    }
}

/// One lane of a planned route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub fuel: f64,
    pub hours: f64,
    pub weather: Weather,
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub path: Vec<String>,
    /// Fuel score at the destination: the last lane's fuel, or the route total
    /// with cumulative accounting.
    pub total_fuel: f64,
    /// Travel time in whole hours, rounded down.
    pub total_time: u64,
    pub elapsed_hours: f64,
    pub total_cost: f64,
    pub legs: Vec<RouteLeg>,
}

impl RoutePlan {
    /// Number of lanes in the route.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Fuel burnt across every lane, independent of the accounting policy.
    pub fn fuel_burnt(&self) -> f64 {
        self.legs.iter().map(|leg| leg.fuel).sum()
    }

    fn from_outcome(graph: &Graph, outcome: &SearchOutcome) -> Result<Self> {
        let name = |id| {
            graph
                .node_name(id)
                .map(str::to_string)
                .ok_or_else(|| Error::InconsistentPredecessors {
                    node: format!("#{id}"),
                })
        };

        let path = outcome
            .steps
            .iter()
            .map(|&id| name(id))
            .collect::<Result<Vec<_>>>()?;

        let legs = outcome
            .legs
            .iter()
            .map(|leg| -> Result<RouteLeg> {
                let Some(edge) = graph.neighbours(leg.from).get(leg.edge_index) else {
                    return Err(Error::InconsistentPredecessors {
                        node: name(leg.to).unwrap_or_else(|_| format!("#{}", leg.to)),
                    });
                };
                Ok(RouteLeg {
                    from: name(leg.from)?,
                    to: name(leg.to)?,
                    distance: edge.distance,
                    fuel: edge.fuel_required(),
                    hours: edge.travel_time(),
                    weather: edge.weather,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            path,
            total_fuel: outcome.total_fuel,
            total_time: outcome.elapsed_hours.floor() as u64,
            elapsed_hours: outcome.elapsed_hours,
            total_cost: outcome.total_cost,
            legs,
        })
    }
}

/// Compute a route for the request against the current state of `graph`.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    if request.fuel_budget.is_nan() || request.fuel_budget < 0.0 {
        return Err(Error::InvalidFuelBudget {
            value: request.fuel_budget,
        });
    }

    let start = graph.resolve(&request.start)?;
    let goal = graph.resolve(&request.goal)?;

    tracing::debug!(
        start = %request.start,
        goal = %request.goal,
        fuel_budget = request.fuel_budget,
        heuristic = %request.options.heuristic,
        "planning route"
    );

    let outcome = find_route_a_star(
        graph,
        request.options.heuristic.as_heuristic(),
        start,
        goal,
        &request.constraints(),
    )?;

    RoutePlan::from_outcome(graph, &outcome)
}

/// Find a route from `start` to `goal` using the default search options.
pub fn find_path(graph: &Graph, start: &str, goal: &str, fuel_budget: f64) -> Result<RoutePlan> {
    plan_route(graph, &RouteRequest::new(start, goal, fuel_budget))
}
