//! Distance estimates that guide the A* frontier.
//!
//! The default [`InitialLetterHeuristic`] compares the first characters of two
//! node names. It is a weak structural proxy inherited from the original lane
//! planner and is **not admissible** for arbitrary graphs, so A* may settle on
//! a sub-optimal route. Callers that need provably optimal routes should pick
//! [`ZeroHeuristic`] (uniform-cost search) or supply their own estimate via a
//! closure.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::{Node, Weather};

/// Strategy used to estimate the remaining cost between two nodes.
pub trait Heuristic {
    /// Weather-independent estimate between `from` and `to`.
    fn base_estimate(&self, from: &Node, to: &Node) -> f64;

    /// Estimate scaled by the weather factor of the lane that reached `from`.
    fn estimate(&self, from: &Node, to: &Node, weather: Weather) -> f64 {
        self.base_estimate(from, to) * weather.heuristic_factor()
    }
}

impl<F> Heuristic for F
where
    F: Fn(&Node, &Node) -> f64,
{
    fn base_estimate(&self, from: &Node, to: &Node) -> f64 {
        self(from, to)
    }
}

/// Absolute difference between the first UTF-16 code units of the node names.
///
/// Names starting outside the Basic Multilingual Plane compare by their high
/// surrogate. An empty name counts as 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitialLetterHeuristic;

impl Heuristic for InitialLetterHeuristic {
    fn base_estimate(&self, from: &Node, to: &Node) -> f64 {
        let code = |node: &Node| node.name().encode_utf16().next().unwrap_or(0);
        f64::from(code(from).abs_diff(code(to)))
    }
}

/// Always estimates zero, turning A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn base_estimate(&self, _from: &Node, _to: &Node) -> f64 {
        0.0
    }
}

/// Built-in heuristics selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicKind {
    #[default]
    InitialLetter,
    Zero,
}

impl HeuristicKind {
    pub fn as_heuristic(self) -> &'static dyn Heuristic {
        match self {
            HeuristicKind::InitialLetter => &InitialLetterHeuristic,
            HeuristicKind::Zero => &ZeroHeuristic,
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            HeuristicKind::InitialLetter => "initial-letter",
            HeuristicKind::Zero => "zero",
        };
        f.write_str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn graph() -> Graph {
        let mut graph = Graph::new();
        for name in ["B", "D", "Empty", ""] {
            graph.add_node(name);
        }
        graph
    }

    #[test]
    fn initial_letter_scales_by_weather() {
        let graph = graph();
        let b = graph.node("B").unwrap();
        let d = graph.node("D").unwrap();
        let h = InitialLetterHeuristic;

        assert_eq!(h.estimate(b, d, Weather::Moderate), 2.0);
        assert_eq!(h.estimate(d, b, Weather::Moderate), 2.0);
        assert!((h.estimate(b, d, Weather::Good) - 1.6).abs() < 1e-9);
        assert_eq!(h.estimate(b, d, Weather::Bad), 7.0);
    }

    #[test]
    fn initial_letter_is_zero_for_same_initial() {
        let graph = graph();
        let d = graph.node("D").unwrap();
        let h = InitialLetterHeuristic;
        assert_eq!(h.estimate(d, d, Weather::Bad), 0.0);
    }

    #[test]
    fn empty_name_uses_zero_code() {
        let graph = graph();
        let empty = graph.node("").unwrap();
        let e = graph.node("Empty").unwrap();
        assert_eq!(InitialLetterHeuristic.base_estimate(empty, e), 69.0);
    }

    #[test]
    fn astral_initials_compare_by_high_surrogate() {
        let mut graph = Graph::new();
        graph.add_node("\u{1F6A2} Dock");
        graph.add_node("A");
        let ship = graph.node("\u{1F6A2} Dock").unwrap();
        let a = graph.node("A").unwrap();

        // U+1F6A2 encodes as 0xD83D 0xDEA2.
        assert_eq!(
            InitialLetterHeuristic.base_estimate(ship, a),
            f64::from(0xD83D_u16 - 65)
        );
    }

    #[test]
    fn zero_heuristic_ignores_weather() {
        let graph = graph();
        let b = graph.node("B").unwrap();
        let d = graph.node("D").unwrap();
        assert_eq!(ZeroHeuristic.estimate(b, d, Weather::Bad), 0.0);
    }

    #[test]
    fn closures_act_as_heuristics() {
        let graph = graph();
        let b = graph.node("B").unwrap();
        let d = graph.node("D").unwrap();
        let constant = |_: &Node, _: &Node| 10.0;
        assert_eq!(constant.estimate(b, d, Weather::Bad), 35.0);
    }

    #[test]
    fn kind_round_trips_through_serde() {
        let kind: HeuristicKind = serde_json::from_str("\"zero\"").unwrap();
        assert_eq!(kind, HeuristicKind::Zero);
        assert_eq!(HeuristicKind::default().to_string(), "initial-letter");
    }
}
