use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::routing::{RouteLeg, RoutePlan};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    Compact,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub steps: Vec<String>,
    pub legs: Vec<RouteLeg>,
    pub total_fuel: f64,
    pub total_time: u64,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary ready for rendering.
    pub fn from_plan(plan: &RoutePlan) -> Result<Self> {
        let (Some(start), Some(goal)) = (plan.path.first(), plan.path.last()) else {
            return Err(Error::InconsistentPredecessors {
                node: "<empty route>".to_string(),
            });
        };

        Ok(Self {
            start: start.clone(),
            goal: goal.clone(),
            hops: plan.hop_count(),
            steps: plan.path.clone(),
            legs: plan.legs.clone(),
            total_fuel: plan.total_fuel,
            total_time: plan.total_time,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Compact => self.render_compact(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let noun = if self.hops == 1 { "hop" } else { "hops" };
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} {})",
            self.start, self.goal, self.hops, noun
        );
        for (index, leg) in self.legs.iter().enumerate() {
            let _ = writeln!(
                buffer,
                "{:>3}: {} -> {} ({:.0} nm, {:.2} fuel, {:.1} h, {} weather)",
                index + 1,
                leg.from,
                leg.to,
                leg.distance,
                leg.fuel,
                leg.hours,
                leg.weather
            );
        }
        let _ = writeln!(buffer, "Fuel: {:.2}", self.total_fuel);
        let _ = writeln!(buffer, "Estimated time: {} h", self.total_time);
        buffer
    }

    fn render_compact(&self) -> String {
        format!(
            "{} ({} h, fuel {:.2})\n",
            self.steps.join(" -> "),
            self.total_time,
            self.total_fuel
        )
    }
}
