use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use crate::geo::LatLon;
use crate::graph::{Edge, EdgeKind, Graph, NodeId, WayId};

/// One traversed edge of a computed route, read start → end.
#[derive(Debug, Clone, Serialize)]
pub struct RouteLeg {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
    pub kind: EdgeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub way_id: Option<WayId>,
    pub geometry: Vec<LatLon>,
}

impl RouteLeg {
    fn from_edge(from: NodeId, edge: &Edge) -> Self {
        Self {
            from,
            to: edge.target,
            weight: edge.weight,
            kind: edge.kind,
            difficulty: edge.difficulty.clone(),
            way_id: edge.way_id,
            geometry: edge.geometry.clone(),
        }
    }
}

/// Dijkstra shortest path from `start` to `end`.
///
/// Returns `None` when either endpoint is unknown or no route exists; both
/// are expected outcomes, not errors. An empty leg list means `start` and
/// `end` coincide. The search has no path-length limit, timeout, or
/// cancellation: it completes or exits early on reaching `end`.
pub fn find_route(graph: &Graph, start: NodeId, end: NodeId) -> Option<Vec<RouteLeg>> {
    if !graph.contains_vertex(start) || !graph.contains_vertex(end) {
        return None;
    }

    let mut distances: HashMap<NodeId, f64> = HashMap::new();
    // Predecessor vertex plus the adjacency slot of the edge that reached
    // us, so reconstruction recovers the full edge, not just its weight.
    let mut parents: HashMap<NodeId, (NodeId, usize)> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let distance = entry.cost.0;
        if distance > *distances.get(&entry.node).unwrap_or(&f64::INFINITY) {
            // Stale entry superseded by a shorter path; lazy deletion stands
            // in for decrease-key, so a vertex may sit in the heap twice.
            continue;
        }
        if entry.node == end {
            // Early exit is sound only while every edge weight is
            // non-negative; connectors are exactly zero by construction.
            break;
        }

        for (slot, edge) in graph.neighbours(entry.node).iter().enumerate() {
            let alt = distance + edge.weight;
            if alt < *distances.get(&edge.target).unwrap_or(&f64::INFINITY) {
                distances.insert(edge.target, alt);
                parents.insert(edge.target, (entry.node, slot));
                queue.push(QueueEntry::new(edge.target, alt));
            }
        }
    }

    if !distances.contains_key(&end) {
        return None;
    }

    let mut legs = Vec::new();
    let mut current = end;
    while let Some(&(previous, slot)) = parents.get(&current) {
        legs.push(RouteLeg::from_edge(
            previous,
            &graph.neighbours(previous)[slot],
        ));
        current = previous;
    }
    legs.reverse();
    Some(legs)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
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
struct QueueEntry {
    node: NodeId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
