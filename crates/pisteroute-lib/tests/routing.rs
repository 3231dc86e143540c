mod common;

use common::{piste, point, resort_elevations, resort_ways};
use pisteroute_lib::{
    build_graph, find_route, plan_route, EdgeKind, ElevationMap, Error, Graph, RouteSummary,
};

fn resort_graph() -> Graph {
    build_graph(&resort_ways(), &resort_elevations(), &[])
}

#[test]
fn route_follows_chained_pistes() {
    let graph = resort_graph();
    let legs = find_route(&graph, 1, 5).expect("route exists");

    assert_eq!(legs.first().unwrap().from, 1);
    assert_eq!(legs.last().unwrap().to, 5);
    for pair in legs.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }
    assert!(legs.iter().all(|leg| leg.kind == EdgeKind::Piste));
    assert!(legs.iter().map(|leg| leg.weight).sum::<f64>() > 0.0);
}

#[test]
fn start_equals_end_yields_an_empty_route() {
    let graph = resort_graph();
    let legs = find_route(&graph, 3, 3).expect("trivial route");
    assert!(legs.is_empty());
}

#[test]
fn unknown_endpoints_yield_no_route() {
    let graph = resort_graph();
    assert!(find_route(&graph, 1, 999).is_none());
    assert!(find_route(&graph, 999, 1).is_none());
}

#[test]
fn unreachable_target_yields_no_route() {
    // Two pistes sharing no node, no lift, no plateau.
    let ways = vec![
        piste(
            1,
            vec![1, 2],
            vec![point(45.8600, 6.6600), point(45.8590, 6.6605)],
        ),
        piste(
            2,
            vec![3, 4],
            vec![point(45.9000, 6.7000), point(45.9010, 6.7005)],
        ),
    ];
    let graph = build_graph(&ways, &ElevationMap::new(), &[]);
    assert!(find_route(&graph, 1, 3).is_none());

    // A run-out with no outgoing edges cannot reach anything either.
    let resort = resort_graph();
    assert!(find_route(&resort, 8, 1).is_none());
}

#[test]
fn lift_crossing_costs_only_the_ride() {
    let graph = resort_graph();
    // Back up the hill: piste network -> lift bottom -> lift top -> summit.
    let legs = find_route(&graph, 5, 1).expect("uphill route exists");

    let kinds: Vec<EdgeKind> = legs.iter().map(|leg| leg.kind).collect();
    assert_eq!(
        kinds,
        vec![EdgeKind::Connector, EdgeKind::Lift, EdgeKind::Connector]
    );

    let total: f64 = legs.iter().map(|leg| leg.weight).sum();
    let lift_leg = &legs[1];
    assert_eq!(lift_leg.way_id, Some(3));
    assert!((total - lift_leg.weight).abs() < 1e-9, "connectors are free");
    assert!(legs[0].way_id.is_none());
}

#[test]
fn dijkstra_prefers_the_shorter_parallel_edge() {
    // Two pistes between the same endpoints; the second takes a wide detour.
    let ways = vec![
        piste(
            1,
            vec![1, 2],
            vec![point(45.8600, 6.6600), point(45.8580, 6.6600)],
        ),
        piste(
            2,
            vec![1, 9, 2],
            vec![
                point(45.8600, 6.6600),
                point(45.8590, 6.6700),
                point(45.8580, 6.6600),
            ],
        ),
    ];
    let graph = build_graph(&ways, &ElevationMap::new(), &[]);

    let legs = find_route(&graph, 1, 2).expect("route exists");
    assert_eq!(legs.len(), 1);
    assert_eq!(legs[0].way_id, Some(1));
}

#[test]
fn plan_route_classifies_legs() {
    let graph = resort_graph();
    let plan = plan_route(&graph, 5, 1).expect("uphill route exists");

    assert_eq!(plan.start, 5);
    assert_eq!(plan.goal, 1);
    assert_eq!(plan.leg_count(), 3);
    assert_eq!((plan.pistes, plan.lifts, plan.connectors), (0, 1, 2));
    assert!(plan.total_distance_m() > 0.0);
}

#[test]
fn plan_route_surfaces_missing_routes_as_errors() {
    let graph = resort_graph();
    let error = plan_route(&graph, 8, 1).expect_err("vertex 8 is a dead end");
    assert!(matches!(
        error,
        Error::RouteNotFound { start: 8, goal: 1 }
    ));
    assert!(format!("{error}").contains("no route found"));
}

#[test]
fn summary_renders_route_text() {
    let graph = resort_graph();
    let plan = plan_route(&graph, 5, 1).expect("uphill route exists");
    let summary = RouteSummary::from_plan(&plan).expect("non-empty plan");

    let text = summary.render_plain();
    assert!(text.contains("Route: 5 -> 1"));
    assert!(text.contains("[lift]"));
    assert!(text.contains("[connector]"));

    let json = serde_json::to_value(&summary).expect("serializes");
    assert!(json.get("total_distance_m").is_some());
    assert_eq!(json["legs"].as_array().unwrap().len(), 3);
}

#[test]
fn summary_rejects_empty_plans() {
    let graph = resort_graph();
    let plan = plan_route(&graph, 3, 3).expect("trivial plan");
    assert!(matches!(
        RouteSummary::from_plan(&plan),
        Err(Error::EmptyRoutePlan)
    ));
}
