//! Shared fixtures for pisteroute-lib integration tests.

#![allow(dead_code)]

use pisteroute_lib::{ElevationMap, LatLon, NodeId, Plateau, Way, WayId, WayTags};

pub fn point(lat: f64, lon: f64) -> LatLon {
    LatLon::new(lat, lon)
}

pub fn way(id: WayId, nodes: Vec<NodeId>, geometry: Vec<LatLon>, tags: WayTags) -> Way {
    Way {
        id,
        nodes,
        geometry,
        tags,
    }
}

pub fn piste(id: WayId, nodes: Vec<NodeId>, geometry: Vec<LatLon>) -> Way {
    way(
        id,
        nodes,
        geometry,
        WayTags {
            piste_type: Some("downhill".to_string()),
            difficulty: Some("blue".to_string()),
            ..WayTags::default()
        },
    )
}

pub fn lift(id: WayId, nodes: Vec<NodeId>, geometry: Vec<LatLon>) -> Way {
    way(
        id,
        nodes,
        geometry,
        WayTags {
            aerialway: Some("chair_lift".to_string()),
            ..WayTags::default()
        },
    )
}

pub fn plateau(id: &str, corner1: LatLon, corner2: LatLon) -> Plateau {
    Plateau {
        id: id.to_string(),
        name: id.to_string(),
        corner1,
        corner2,
    }
}

/// A small resort. Piste 1 descends through nodes 1-2-3, piste 2 continues
/// 3-4-5, piste 4 branches off at node 2, and the lift's stations (nodes 6
/// and 7) stand a few metres from vertices 5 and 1 respectively, so the
/// proximity pass links the lift back into the piste network.
pub fn resort_ways() -> Vec<Way> {
    vec![
        piste(
            1,
            vec![1, 2, 3],
            vec![
                point(45.8600, 6.6600),
                point(45.8590, 6.6605),
                point(45.8580, 6.6610),
            ],
        ),
        piste(
            2,
            vec![3, 4, 5],
            vec![
                point(45.8580, 6.6610),
                point(45.8570, 6.6615),
                point(45.8560, 6.6620),
            ],
        ),
        piste(
            4,
            vec![2, 8],
            vec![point(45.8590, 6.6605), point(45.8590, 6.6620)],
        ),
        lift(
            3,
            vec![6, 7],
            vec![point(45.85601, 6.66205), point(45.86001, 6.66005)],
        ),
    ]
}

pub fn resort_elevations() -> ElevationMap {
    ElevationMap::from([(1, 1800.0), (3, 1700.0), (5, 1600.0)])
}
