use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::LatLon;
use crate::graph::{NodeId, WayId};

/// Elevation lookup keyed by node id, in metres. An absent key means the
/// elevation is unknown.
pub type ElevationMap = HashMap<NodeId, f64>;

/// The way tags this library inspects. Everything else in the source export
/// is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WayTags {
    #[serde(rename = "piste:type")]
    pub piste_type: Option<String>,
    pub aerialway: Option<String>,
    #[serde(rename = "piste:difficulty")]
    pub difficulty: Option<String>,
    pub name: Option<String>,
}

/// One surveyed way: an ordered run of node ids with a parallel, equally
/// ordered list of coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct Way {
    pub id: WayId,
    #[serde(default)]
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub geometry: Vec<LatLon>,
    #[serde(default)]
    pub tags: WayTags,
}

impl Way {
    pub fn is_piste(&self) -> bool {
        self.tags.piste_type.is_some()
    }

    pub fn is_lift(&self) -> bool {
        self.tags.aerialway.is_some()
    }

    /// Only pistes and lifts participate in the routing graph.
    pub fn is_routable(&self) -> bool {
        self.is_piste() || self.is_lift()
    }
}

/// A named flat area within which every contained vertex is mutually
/// reachable at zero cost. Static configuration, never derived from the way
/// data itself.
#[derive(Debug, Clone, Deserialize)]
pub struct Plateau {
    pub id: String,
    pub name: String,
    pub corner1: LatLon,
    pub corner2: LatLon,
}

impl Plateau {
    /// Whether `point` lies strictly inside the rectangle.
    ///
    /// Corners may be given in either order; each axis is normalised before
    /// comparing. A point exactly on an edge is outside.
    pub fn contains(&self, point: LatLon) -> bool {
        strictly_between(point.lat, self.corner1.lat, self.corner2.lat)
            && strictly_between(point.lon, self.corner1.lon, self.corner2.lon)
    }
}

fn strictly_between(value: f64, a: f64, b: f64) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    lo < value && value < hi
}

/// Raw Overpass-style payload: a flat element list mixing ways and nodes.
#[derive(Debug, Deserialize)]
struct OverpassPayload {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(rename = "type")]
    element_type: String,
    id: i64,
    #[serde(default)]
    nodes: Vec<NodeId>,
    #[serde(default)]
    geometry: Vec<LatLon>,
    #[serde(default)]
    tags: WayTags,
}

/// Load way records from an Overpass JSON export.
///
/// Non-way elements are dropped here; tag-based filtering is the topology
/// builder's job.
pub fn load_ways(path: &Path) -> Result<Vec<Way>> {
    let payload: OverpassPayload = read_json(path)?;
    let ways: Vec<Way> = payload
        .elements
        .into_iter()
        .filter(|element| element.element_type == "way")
        .map(|element| Way {
            id: element.id,
            nodes: element.nodes,
            geometry: element.geometry,
            tags: element.tags,
        })
        .collect();
    debug!(count = ways.len(), "loaded way records");
    Ok(ways)
}

/// Load a node id → elevation map.
pub fn load_elevations(path: &Path) -> Result<ElevationMap> {
    read_json(path)
}

/// Load the configured plateau rectangles.
pub fn load_plateaus(path: &Path) -> Result<Vec<Plateau>> {
    let plateaus: Vec<Plateau> = read_json(path)?;
    debug!(count = plateaus.len(), "loaded plateau definitions");
    Ok(plateaus)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
