use std::collections::HashMap;

use tracing::{debug, warn};

use crate::dataset::{ElevationMap, Plateau, Way};
use crate::geo::{polyline_length, LatLon};
use crate::graph::{Edge, EdgeKind, Graph, NodeId, Vertex, WayId};

/// Tuning values for topology inference.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Radius in metres within which a lift endpoint links to nearby
    /// vertices: roughly the size of a lift station forecourt, where skiers
    /// walk freely between the lift and the surrounding trailheads.
    pub lift_link_radius_m: f64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            lift_link_radius_m: 30.0,
        }
    }
}

/// Build a fresh graph from way records with default options.
pub fn build_graph(ways: &[Way], elevations: &ElevationMap, plateaus: &[Plateau]) -> Graph {
    let mut graph = Graph::default();
    rebuild_graph(
        &mut graph,
        ways,
        elevations,
        plateaus,
        &BuildOptions::default(),
    );
    graph
}

/// Rebuild `graph` in place from way records, replacing any prior contents.
///
/// Five ordered passes; later passes depend on the vertices and adjacency
/// created by earlier ones. Re-running on identical input yields an
/// identical graph.
pub fn rebuild_graph(
    graph: &mut Graph,
    ways: &[Way],
    elevations: &ElevationMap,
    plateaus: &[Plateau],
    options: &BuildOptions,
) {
    graph.reset();

    // Pass 1: a vertex at every qualifying way's first and last node, and
    // the initial two-element skeleton per way.
    let mut skeletons: HashMap<WayId, Vec<NodeId>> = HashMap::new();
    for way in ways.iter().filter(|way| way.is_routable()) {
        if !usable(way) {
            continue;
        }
        let first = way.nodes[0];
        let last = way.nodes[way.nodes.len() - 1];
        let first_pos = way.geometry[0];
        let last_pos = way.geometry[way.geometry.len() - 1];
        graph.upsert_vertex(
            first,
            first_pos.lat,
            first_pos.lon,
            elevations.get(&first).copied(),
        );
        graph.upsert_vertex(
            last,
            last_pos.lat,
            last_pos.lon,
            elevations.get(&last).copied(),
        );
        skeletons.insert(way.id, vec![first, last]);
    }

    // Pass 2: subdivide pistes wherever an interior node already exists as a
    // vertex, preserving the order encountered. Lifts keep their two
    // endpoints: a moving cable is not a place other trails can graft onto
    // mid-span.
    for way in ways.iter().filter(|way| way.is_piste()) {
        let Some(skeleton) = skeletons.get_mut(&way.id) else {
            continue;
        };
        for &node in &way.nodes[1..way.nodes.len() - 1] {
            if graph.contains_vertex(node) {
                skeleton.insert(skeleton.len() - 1, node);
            }
        }
    }

    // Pass 3: one directed edge per consecutive skeleton pair. No automatic
    // reverse edge: travel direction is physically meaningful (downhill
    // piste, uphill lift).
    for way in ways.iter().filter(|way| way.is_routable()) {
        let Some(skeleton) = skeletons.get(&way.id) else {
            continue;
        };
        let kind = if way.is_lift() {
            EdgeKind::Lift
        } else {
            EdgeKind::Piste
        };
        for pair in skeleton.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let (Some(idx_from), Some(idx_to)) = (
                way.nodes.iter().position(|&node| node == from),
                way.nodes.iter().position(|&node| node == to),
            ) else {
                // Tolerated malformed input: drop this edge, keep the way.
                warn!(
                    way = way.id,
                    from, to, "edge endpoint missing from node list; skipping edge"
                );
                continue;
            };
            // Order-preserving inclusive slice, whichever index comes first.
            let (lo, hi) = (idx_from.min(idx_to), idx_from.max(idx_to));
            let segment = &way.geometry[lo..=hi];
            graph.add_edge(
                from,
                Edge {
                    target: to,
                    weight: polyline_length(segment),
                    kind,
                    way_id: Some(way.id),
                    difficulty: way.tags.difficulty.clone(),
                    geometry: segment.to_vec(),
                },
            );
        }
    }

    // Pass 4: link every lift endpoint to whatever stands nearby, so routes
    // can step between the lift network and adjacent trailheads for free.
    for way in ways.iter().filter(|way| way.is_lift()) {
        let Some(endpoints) = skeletons.get(&way.id) else {
            continue;
        };
        for &endpoint in endpoints {
            for neighbour in graph.nearby_vertices(endpoint, options.lift_link_radius_m) {
                connect(graph, endpoint, neighbour);
            }
        }
    }

    // Pass 5: every plateau becomes a zero-cost bidirectional clique.
    for plateau in plateaus {
        let contained = contained_vertices(graph, plateau);
        for (index, &a) in contained.iter().enumerate() {
            for &b in &contained[index + 1..] {
                connect(graph, a, b);
            }
        }
        debug!(
            plateau = %plateau.id,
            vertices = contained.len(),
            "connected plateau"
        );
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph rebuilt"
    );
}

fn usable(way: &Way) -> bool {
    if way.geometry.is_empty() || way.nodes.len() < 2 {
        warn!(way = way.id, "way has no usable geometry; skipping");
        return false;
    }
    if way.geometry.len() != way.nodes.len() {
        warn!(
            way = way.id,
            "way node and geometry lists disagree; skipping"
        );
        return false;
    }
    true
}

/// Zero-weight connector pair between two vertices, one edge each way.
fn connect(graph: &mut Graph, a: NodeId, b: NodeId) {
    let (Some(pos_a), Some(pos_b)) = (
        graph.vertex(a).map(Vertex::position),
        graph.vertex(b).map(Vertex::position),
    ) else {
        return;
    };
    graph.add_edge(a, connector_edge(b, pos_a, pos_b));
    graph.add_edge(b, connector_edge(a, pos_b, pos_a));
}

fn connector_edge(target: NodeId, from: LatLon, to: LatLon) -> Edge {
    Edge {
        target,
        weight: 0.0,
        kind: EdgeKind::Connector,
        way_id: None,
        difficulty: None,
        geometry: vec![from, to],
    }
}

fn contained_vertices(graph: &Graph, plateau: &Plateau) -> Vec<NodeId> {
    let mut contained: Vec<NodeId> = graph
        .vertices()
        .filter(|(_, vertex)| plateau.contains(vertex.position()))
        .map(|(&id, _)| id)
        .collect();
    contained.sort_unstable();
    contained
}
