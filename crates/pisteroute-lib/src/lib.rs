//! Pisteroute library entry points.
//!
//! This crate loads a resort's surveyed way dataset, infers a connected
//! routing topology from independently-mapped pistes and lifts, and answers
//! shortest-path queries over the resulting graph. Higher-level consumers
//! (CLI, rendering front ends) should only depend on the functions exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod builder;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;

pub use builder::{build_graph, rebuild_graph, BuildOptions};
pub use dataset::{load_elevations, load_plateaus, load_ways, ElevationMap, Plateau, Way, WayTags};
pub use error::{Error, Result};
pub use geo::{distance_between, polyline_length, LatLon, EARTH_RADIUS_M};
pub use graph::{Edge, EdgeKind, Graph, NodeId, Vertex, WayId};
pub use output::{LegSummary, RouteSummary};
pub use path::{find_route, RouteLeg};
pub use routing::{plan_route, RoutePlan};
