//! Route planning over a built piste graph.
//!
//! The underlying search reports "no route" as an absent result; this
//! boundary layer turns that into an error for callers that want one to
//! surface, and classifies the route's legs for summary display.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{EdgeKind, Graph, NodeId};
use crate::path::{find_route, RouteLeg};

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: NodeId,
    pub goal: NodeId,
    pub legs: Vec<RouteLeg>,
    pub pistes: usize,
    pub lifts: usize,
    pub connectors: usize,
}

impl RoutePlan {
    /// Number of traversed edges.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Total physical distance in metres; connectors contribute nothing.
    pub fn total_distance_m(&self) -> f64 {
        self.legs.iter().map(|leg| leg.weight).sum()
    }
}

/// Compute a route and classify its legs by kind.
pub fn plan_route(graph: &Graph, start: NodeId, goal: NodeId) -> Result<RoutePlan> {
    let legs = find_route(graph, start, goal).ok_or(Error::RouteNotFound { start, goal })?;

    let (mut pistes, mut lifts, mut connectors) = (0, 0, 0);
    for leg in &legs {
        match leg.kind {
            EdgeKind::Piste => pistes += 1,
            EdgeKind::Lift => lifts += 1,
            EdgeKind::Connector => connectors += 1,
        }
    }

    Ok(RoutePlan {
        start,
        goal,
        legs,
        pistes,
        lifts,
        connectors,
    })
}
