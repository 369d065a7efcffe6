use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Node, NodeId, Weather};
use crate::heuristic::Heuristic;

/// Predecessor map produced by the search: node -> (previous node, index of
/// the lane in the previous node's adjacency list).
pub type Predecessors = HashMap<NodeId, (NodeId, usize)>;

/// How fuel is tracked along a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FuelAccounting {
    /// Each node remembers only the fuel burnt on the lane that reached it and
    /// the budget caps every lane individually.
    #[default]
    LastLeg,
    /// Fuel is summed along the route and the budget also caps the running
    /// total. Nodes keep a single label, so a cheaper but thirstier route can
    /// shadow a feasible one.
    Cumulative,
}

/// How lane cost is folded into the accumulated route cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostPropagation {
    /// `(g + distance) * weather` - the weather factor of every lane scales
    /// the whole route cost accumulated so far.
    #[default]
    Compounding,
    /// `g + distance * weather` - each lane contributes independently.
    Additive,
}

impl CostPropagation {
    fn apply(self, accumulated: f64, edge: &Edge) -> f64 {
        let factor = edge.weather.cost_factor();
        match self {
            CostPropagation::Compounding => (accumulated + edge.distance) * factor,
            CostPropagation::Additive => accumulated + edge.distance * factor,
        }
    }
}

/// Constraints and policies applied during a single search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConstraints {
    /// Maximum fuel any lane (or, with cumulative accounting, the route) may burn.
    pub fuel_budget: f64,
    pub fuel_accounting: FuelAccounting,
    pub cost_propagation: CostPropagation,
    /// Abort after expanding this many nodes.
    pub max_expansions: Option<usize>,
}

impl SearchConstraints {
    /// Default policies with the given fuel budget.
    pub fn with_budget(fuel_budget: f64) -> Self {
        Self {
            fuel_budget,
            fuel_accounting: FuelAccounting::default(),
            cost_propagation: CostPropagation::default(),
            max_expansions: None,
        }
    }

    /// Fuel recorded on arrival over `edge`, or `None` when the lane breaks
    /// the budget.
    fn arrival_fuel(&self, departure_fuel: f64, edge: &Edge) -> Option<f64> {
        let lane_fuel = edge.fuel_required();
        if lane_fuel > self.fuel_budget {
            return None;
        }

        match self.fuel_accounting {
            FuelAccounting::LastLeg => Some(lane_fuel),
            FuelAccounting::Cumulative => {
                let total = departure_fuel + lane_fuel;
                (total <= self.fuel_budget).then_some(total)
            }
        }
    }
}

/// Lane taken between two consecutive steps of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegRecord {
    pub from: NodeId,
    pub to: NodeId,
    /// Index of the lane within the adjacency list of `from`.
    pub edge_index: usize,
}

/// Ordered route recovered from a predecessor map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructedPath {
    pub steps: Vec<NodeId>,
    pub legs: Vec<LegRecord>,
}

/// Result of a successful constrained search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub steps: Vec<NodeId>,
    pub legs: Vec<LegRecord>,
    pub total_cost: f64,
    /// Fuel score of the goal under the active [`FuelAccounting`].
    pub total_fuel: f64,
    pub elapsed_hours: f64,
    /// Number of nodes expanded before the goal was reached.
    pub expansions: usize,
}

#[derive(Debug, Clone, Copy)]
struct Label {
    cost: f64,
    fuel: f64,
    time: f64,
}

/// Run A* from `start` to `goal`, rejecting lanes that break the fuel budget.
///
/// The frontier is ordered by `cost + heuristic`; ties are broken by node
/// identifier, which is an implementation detail rather than a guarantee.
/// The goal is accepted the first time it is popped, so the returned route is
/// only optimal when the heuristic is admissible and the cost model is
/// monotone (see [`CostPropagation::Additive`] with
/// [`ZeroHeuristic`](crate::heuristic::ZeroHeuristic)).
///
/// A relaxation that would make a node its own ancestor is skipped. Under
/// compounding costs a good-weather lane can lower the cost of a node that
/// was reached expensively, and accepting it would close a loop in the
/// predecessor map.
pub fn find_route_a_star(
    graph: &Graph,
    heuristic: &dyn Heuristic,
    start: NodeId,
    goal: NodeId,
    constraints: &SearchConstraints,
) -> Result<SearchOutcome> {
    let start_node = node_or_error(graph, start)?;
    let goal_node = node_or_error(graph, goal)?;

    let mut scores: HashMap<NodeId, Label> = HashMap::new();
    let mut came_from: Predecessors = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut expansions = 0usize;

    scores.insert(
        start,
        Label {
            cost: 0.0,
            fuel: 0.0,
            time: 0.0,
        },
    );
    let start_estimate = heuristic.estimate(start_node, goal_node, Weather::Moderate);
    queue.push(SearchEntry::new(start, 0.0, start_estimate));

    while let Some(entry) = queue.pop() {
        let Some(current) = scores.get(&entry.node).copied() else {
            continue;
        };
        if current.cost < entry.cost.0 {
            continue;
        }

        if entry.node == goal {
            let path = reconstruct_path(graph, &came_from, start, goal)?;
            tracing::debug!(
                start = start_node.name(),
                goal = goal_node.name(),
                hops = path.legs.len(),
                cost = current.cost,
                expansions,
                "route found"
            );
            return Ok(SearchOutcome {
                steps: path.steps,
                legs: path.legs,
                total_cost: current.cost,
                total_fuel: current.fuel,
                elapsed_hours: current.time,
                expansions,
            });
        }

        expansions += 1;
        if let Some(limit) = constraints.max_expansions {
            if expansions > limit {
                tracing::warn!(limit, "search expansion limit reached");
                return Err(Error::SearchLimitExceeded { limit });
            }
        }
        tracing::trace!(node = entry.node, cost = current.cost, "expanding");

        for (edge_index, edge) in graph.neighbours(entry.node).iter().enumerate() {
            let next = edge.target;
            let Some(fuel) = constraints.arrival_fuel(current.fuel, edge) else {
                continue;
            };

            let tentative = constraints.cost_propagation.apply(current.cost, edge);
            let improves = scores
                .get(&next)
                .map_or(true, |known| tentative < known.cost);
            if !improves || is_ancestor(&came_from, start, next, entry.node) {
                continue;
            }

            scores.insert(
                next,
                Label {
                    cost: tentative,
                    fuel,
                    time: current.time + edge.travel_time(),
                },
            );
            came_from.insert(next, (entry.node, edge_index));

            let next_node = node_or_error(graph, next)?;
            let estimate = heuristic.estimate(next_node, goal_node, edge.weather);
            queue.push(SearchEntry::new(next, tentative, tentative + estimate));
        }
    }

    tracing::debug!(
        start = start_node.name(),
        goal = goal_node.name(),
        expansions,
        "frontier exhausted"
    );
    Err(Error::PathNotFound {
        start: start_node.name().to_string(),
        goal: goal_node.name().to_string(),
    })
}

/// Walk predecessor links from `goal` back to `start` and return the route in
/// travel order.
pub fn reconstruct_path(
    graph: &Graph,
    came_from: &Predecessors,
    start: NodeId,
    goal: NodeId,
) -> Result<ReconstructedPath> {
    let mut steps = vec![goal];
    let mut legs = Vec::new();
    let mut current = goal;

    while current != start {
        let broken = || Error::InconsistentPredecessors {
            node: graph
                .node_name(current)
                .map_or_else(|| format!("#{current}"), str::to_string),
        };

        let &(previous, edge_index) = came_from.get(&current).ok_or_else(broken)?;
        if legs.len() >= came_from.len() {
            return Err(broken());
        }

        legs.push(LegRecord {
            from: previous,
            to: current,
            edge_index,
        });
        steps.push(previous);
        current = previous;
    }

    steps.reverse();
    legs.reverse();
    Ok(ReconstructedPath { steps, legs })
}

/// Whether `candidate` already lies on the predecessor chain of `node`.
fn is_ancestor(came_from: &Predecessors, start: NodeId, candidate: NodeId, node: NodeId) -> bool {
    let mut current = node;
    loop {
        if current == candidate {
            return true;
        }
        if current == start {
            return false;
        }
        match came_from.get(&current) {
            Some(&(previous, _)) => current = previous,
            None => return false,
        }
    }
}

fn node_or_error(graph: &Graph, id: NodeId) -> Result<&Node> {
    graph.node_by_id(id).ok_or_else(|| Error::UnknownNode {
        name: format!("#{id}"),
        suggestions: Vec::new(),
    })
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct SearchEntry {
    node: NodeId,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl SearchEntry {
    fn new(node: NodeId, cost: f64, estimate: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(estimate),
        }
    }
}

impl Ord for SearchEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for SearchEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
