//! Output formatting for route rendering.

use anyhow::{Context, Result};
use clap::ValueEnum;

use searoute_lib::{RoutePlan, RouteRenderMode, RouteSummary};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per lane followed by fuel and time totals.
    #[default]
    Text,
    /// Single line: `A -> B -> C (hours, fuel)`.
    Compact,
    /// Pretty-printed JSON of the full route plan.
    Json,
}

impl OutputFormat {
    /// Render a planned route in this format.
    pub fn render(self, plan: &RoutePlan) -> Result<String> {
        match self {
            OutputFormat::Json => {
                let mut json =
                    serde_json::to_string_pretty(plan).context("failed to serialize route")?;
                json.push('\n');
                Ok(json)
            }
            OutputFormat::Text | OutputFormat::Compact => {
                let summary = RouteSummary::from_plan(plan)?;
                let mode = if self == OutputFormat::Text {
                    RouteRenderMode::PlainText
                } else {
                    RouteRenderMode::Compact
                };
                Ok(summary.render(mode))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use searoute_lib::{find_path, fixture_network};

    fn plan() -> RoutePlan {
        let graph = fixture_network().build().unwrap();
        find_path(&graph, "B", "D", 20.0).unwrap()
    }

    #[test]
    fn json_output_is_parseable() {
        let rendered = OutputFormat::Json.render(&plan()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["path"], serde_json::json!(["B", "D"]));
        assert_eq!(value["total_fuel"], 15.0);
    }

    #[test]
    fn compact_output_is_one_line() {
        let rendered = OutputFormat::Compact.render(&plan()).unwrap();
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.starts_with("B -> D"));
    }

    #[test]
    fn text_output_lists_totals() {
        let rendered = OutputFormat::Text.render(&plan()).unwrap();
        assert!(rendered.contains("Estimated time: 5 h"));
    }
}
