use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;

use crate::geo::{distance_between, LatLon};

/// Identifier of a graph vertex, assigned by the map source (its node id).
pub type NodeId = i64;

/// Identifier of a surveyed way in the map source.
pub type WayId = i64;

/// A physical point in the resort network.
///
/// An identifier denotes exactly one point: re-upserting it never moves the
/// coordinates, and only a missing elevation may be filled in later.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vertex {
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
}

impl Vertex {
    /// Coordinates of this vertex as a geometry point.
    pub fn position(&self) -> LatLon {
        LatLon::new(self.lat, self.lon)
    }
}

/// Classification for the edge used in the routing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Piste,
    Lift,
    Connector,
}

impl EdgeKind {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            EdgeKind::Piste => "piste",
            EdgeKind::Lift => "lift",
            EdgeKind::Connector => "connector",
        }
    }
}

/// Directed edge within the routing graph. Immutable once appended.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    pub target: NodeId,
    /// Metres along the edge's physical path; exactly zero for connectors.
    pub weight: f64,
    pub kind: EdgeKind,
    /// Absent for synthesized connectors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub way_id: Option<WayId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Ordered trace of the edge's physical path, carried through unmodified
    /// for rendering consumers.
    pub geometry: Vec<LatLon>,
}

/// In-memory vertex/edge store for one resort network.
///
/// Owned by the caller and rebuilt wholesale on every data load; once a
/// build completes, any number of route queries may borrow it immutably.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: HashMap<NodeId, Vertex>,
    adjacency: HashMap<NodeId, Vec<Edge>>,
}

impl Graph {
    /// Create the vertex if absent; otherwise only backfill a missing
    /// elevation. Coordinates are never overwritten. Returns the id.
    pub fn upsert_vertex(
        &mut self,
        id: NodeId,
        lat: f64,
        lon: f64,
        elevation: Option<f64>,
    ) -> NodeId {
        match self.vertices.entry(id) {
            Entry::Occupied(mut occupied) => {
                let vertex = occupied.get_mut();
                if vertex.elevation.is_none() {
                    vertex.elevation = elevation;
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(Vertex {
                    lat,
                    lon,
                    elevation,
                });
            }
        }
        id
    }

    /// Append a directed edge to `from`'s adjacency list.
    ///
    /// Never deduplicates: parallel edges between the same pair are legal
    /// and expected (a piste edge and a connector edge may coexist).
    pub fn add_edge(&mut self, from: NodeId, edge: Edge) {
        self.adjacency.entry(from).or_default().push(edge);
    }

    /// Outgoing edges of a vertex. An absent key means no outgoing edges.
    pub fn neighbours(&self, id: NodeId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Clear all vertices and edges ahead of a full rebuild.
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
    }

    pub fn contains_vertex(&self, id: NodeId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn vertex(&self, id: NodeId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Iterate over the full vertex table, for rendering collaborators.
    pub fn vertices(&self) -> impl Iterator<Item = (&NodeId, &Vertex)> {
        self.vertices.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// All vertices strictly within `radius_m` of `id`, excluding `id`
    /// itself. An unknown `id` or no matches both yield an empty list.
    ///
    /// Full linear scan over the vertex table, acceptable at single-resort
    /// scale; the result is sorted so rebuilds emit connectors in a stable
    /// order.
    pub fn nearby_vertices(&self, id: NodeId, radius_m: f64) -> Vec<NodeId> {
        let Some(centre) = self.vertices.get(&id) else {
            return Vec::new();
        };
        let centre_pos = centre.position();
        let mut found: Vec<NodeId> = self
            .vertices
            .iter()
            .filter(|&(&other, vertex)| {
                other != id && distance_between(centre_pos, vertex.position()) < radius_m
            })
            .map(|(&other, _)| other)
            .collect();
        found.sort_unstable();
        found
    }
}
