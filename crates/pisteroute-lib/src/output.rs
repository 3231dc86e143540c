use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{EdgeKind, NodeId, WayId};
use crate::routing::RoutePlan;

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize)]
pub struct LegSummary {
    pub index: usize,
    pub from: NodeId,
    pub to: NodeId,
    pub kind: EdgeKind,
    pub distance_m: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub way_id: Option<WayId>,
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise or render as text. Traversal geometry is deliberately
/// omitted; consumers that draw the route read the plan's legs directly.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub start: NodeId,
    pub goal: NodeId,
    pub total_distance_m: f64,
    pub pistes: usize,
    pub lifts: usize,
    pub connectors: usize,
    pub legs: Vec<LegSummary>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a renderable summary.
    pub fn from_plan(plan: &RoutePlan) -> Result<Self> {
        if plan.legs.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let legs = plan
            .legs
            .iter()
            .enumerate()
            .map(|(index, leg)| LegSummary {
                index,
                from: leg.from,
                to: leg.to,
                kind: leg.kind,
                distance_m: leg.weight,
                difficulty: leg.difficulty.clone(),
                way_id: leg.way_id,
            })
            .collect();

        Ok(Self {
            start: plan.start,
            goal: plan.goal,
            total_distance_m: plan.total_distance_m(),
            pistes: plan.pistes,
            lifts: plan.lifts,
            connectors: plan.connectors,
            legs,
        })
    }

    /// Render the summary as plain text for terminal display.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({:.0} m, {} legs: {} piste / {} lift / {} connector)",
            self.start,
            self.goal,
            self.total_distance_m,
            self.legs.len(),
            self.pistes,
            self.lifts,
            self.connectors
        );
        for leg in &self.legs {
            let mut line = format!(
                "{:>3}: {} -> {} [{}] {:.0} m",
                leg.index,
                leg.from,
                leg.to,
                leg.kind.label(),
                leg.distance_m
            );
            if let Some(difficulty) = &leg.difficulty {
                let _ = write!(line, " ({difficulty})");
            }
            let _ = writeln!(buffer, "{line}");
        }
        buffer
    }
}
