use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the searoute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a query or edge references a node name that was never added.
    #[error("unknown node name: {name}{}", format_suggestions(.suggestions))]
    UnknownNode {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when the frontier is exhausted before reaching the goal. This
    /// covers both unreachable destinations and routes where every viable
    /// lane exceeds the fuel budget.
    #[error("no route found between {start} and {goal} within the fuel budget")]
    PathNotFound { start: String, goal: String },

    /// Raised when an edge attribute is not a finite positive number.
    #[error("invalid edge: {field} must be a finite positive number, got {value}")]
    InvalidEdge { field: &'static str, value: f64 },

    /// Raised when a fuel budget is negative or not a number.
    #[error("invalid fuel budget: {value}")]
    InvalidFuelBudget { value: f64 },

    /// Raised when a search expands more nodes than its configured limit.
    #[error("search aborted after expanding {limit} nodes")]
    SearchLimitExceeded { limit: usize },

    /// Raised when the predecessor map does not lead back to the start node.
    #[error("predecessor chain is broken at node {node}")]
    InconsistentPredecessors { node: String },

    /// Raised when a network description could not be read.
    #[error("failed to read network from {path}: {source}")]
    NetworkRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_node_without_suggestions() {
        let err = Error::UnknownNode {
            name: "Z".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown node name: Z");
    }

    #[test]
    fn unknown_node_lists_suggestions() {
        let err = Error::UnknownNode {
            name: "Rotterdm".to_string(),
            suggestions: vec!["Rotterdam".to_string(), "Rostock".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown node name: Rotterdm. Did you mean one of: 'Rotterdam', 'Rostock'?"
        );
    }
}
