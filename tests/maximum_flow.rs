use network_flow_comparison::maximum_flow::capacity_scaling::CapacityScaling;
use network_flow_comparison::maximum_flow::flow_updater::augment;
use network_flow_comparison::maximum_flow::ford_fulkerson::FordFulkerson;
use network_flow_comparison::maximum_flow::graph::ResidualGraph;
use network_flow_comparison::maximum_flow::path_finder::{PathFinder, Threshold};
use network_flow_comparison::maximum_flow::preflow_push::PreflowPush;
use network_flow_comparison::maximum_flow::solver::{Algorithm, MaxFlowSolver};
use network_flow_comparison::maximum_flow::status::Status;
use network_flow_comparison::FlowError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

fn graph(arcs: &[(&str, &str, i64)]) -> ResidualGraph<i64> {
    ResidualGraph::from_arcs(arcs.iter().copied()).unwrap()
}

// seeded graph with random arcs, no parallel edges
fn random_graph(seed: u64, num_inner: usize, num_edges: usize, max_capacity: i64) -> ResidualGraph<i64> {
    let mut rng = StdRng::seed_from_u64(seed);

    let names: Vec<String> = std::iter::once("s".to_string()).chain((0..num_inner).map(|i| format!("v{i}"))).chain(std::iter::once("t".to_string())).collect();
    let mut graph = ResidualGraph::new();
    for name in names.iter() {
        graph.add_vertex(name);
    }
    for _ in 0..num_edges {
        let u = rng.gen_range(0..names.len());
        let v = rng.gen_range(0..names.len());
        if u == v || graph.find_edge(u, v).is_some() {
            continue;
        }
        let capacity = rng.gen_range(0..max_capacity);
        graph.insert_edge(u, v, capacity).unwrap();
    }
    graph
}

#[rstest]
#[case::single_edge(&[("s", "t", 5)], 5)]
#[case::diamond(&[("s", "a", 3), ("s", "b", 2), ("a", "t", 2), ("b", "t", 3)], 4)]
#[case::disconnected_sink(&[("s", "a", 3), ("b", "t", 3)], 0)]
#[case::single_edge_seven(&[("s", "t", 7)], 7)]
#[case::two_cycle(&[("s", "u", 4), ("u", "v", 3), ("v", "u", 2), ("v", "t", 5)], 3)]
#[case::back_edge_needed(&[("s", "a", 1), ("a", "b", 1), ("b", "t", 1), ("s", "b", 1), ("a", "t", 1)], 2)]
#[case::zero_capacity_source(&[("s", "a", 0), ("a", "t", 4)], 0)]
#[case::parallel_edges(&[("s", "t", 3), ("s", "a", 1), ("s", "t", 2), ("a", "t", 1)], 6)]
#[case::sink_first(&[("a", "t", 2), ("s", "a", 9), ("t", "s", 1)], 2)]
fn solves_scenarios(
    #[case] arcs: &[(&str, &str, i64)],
    #[case] expected: i64,
    #[values(Algorithm::FordFulkerson, Algorithm::CapacityScaling, Algorithm::PreflowPush)] algorithm: Algorithm,
) {
    let mut solver = algorithm.build(graph(arcs));
    assert_eq!(solver.max_flow().unwrap(), expected);
    assert_eq!(solver.status(), Status::Optimal);
}

#[rstest]
fn second_call_adds_nothing(#[values(Algorithm::FordFulkerson, Algorithm::CapacityScaling, Algorithm::PreflowPush)] algorithm: Algorithm) {
    let mut solver = algorithm.build(graph(&[("s", "a", 3), ("s", "b", 2), ("a", "t", 2), ("b", "t", 3), ("a", "b", 1)]));
    assert_eq!(solver.max_flow().unwrap(), 5);
    assert_eq!(solver.max_flow().unwrap(), 0);
}

#[rstest]
#[case(1, 6, 20, 10)]
#[case(2, 10, 40, 100)]
#[case(3, 20, 80, 1000)]
#[case(4, 30, 200, 7)]
#[case(5, 50, 300, 1 << 20)]
fn algorithms_agree(#[case] seed: u64, #[case] num_inner: usize, #[case] num_edges: usize, #[case] max_capacity: i64) {
    let flows: Vec<i64> = Algorithm::ALL.iter().map(|algorithm| algorithm.build(random_graph(seed, num_inner, num_edges, max_capacity)).max_flow().unwrap()).collect();
    assert_eq!(flows[0], flows[1]);
    assert_eq!(flows[0], flows[2]);
}

#[rstest]
#[case(&[("s", "a", 0.5), ("a", "t", 1.25), ("s", "t", 3.5)], 4.0)]
#[case(&[("s", "a", 0.25), ("a", "t", 0.75)], 0.25)]
fn real_capacities(
    #[case] arcs: &[(&str, &str, f64)],
    #[case] expected: f64,
    #[values(Algorithm::FordFulkerson, Algorithm::CapacityScaling, Algorithm::PreflowPush)] algorithm: Algorithm,
) {
    let graph = ResidualGraph::from_arcs(arcs.iter().copied()).unwrap();
    assert_eq!(algorithm.build(graph).max_flow().unwrap(), expected);
}

#[test]
fn delta_of_single_edge() {
    let mut solver = CapacityScaling::new(graph(&[("s", "t", 7)]));
    assert_eq!(solver.delta(), 4);
    assert_eq!(solver.max_flow().unwrap(), 7);
}

#[test]
fn declared_two_cycle_is_not_duplicated() {
    let solver = Algorithm::FordFulkerson.build(graph(&[("s", "u", 1), ("u", "v", 3), ("v", "u", 2), ("v", "t", 1)]));
    let graph = solver.graph();
    let (u, v) = (graph.vertex_by_name("u").unwrap(), graph.vertex_by_name("v").unwrap());
    let between = (0..graph.num_edges()).filter_map(|e| graph.edge(e)).filter(|e| (e.from == u && e.to == v) || (e.from == v && e.to == u)).count();
    assert_eq!(between, 2);
    assert_eq!(graph.edge(graph.find_edge(v, u).unwrap()).unwrap().capacity, 2);
}

#[rstest]
fn residual_pairs_are_conserved(#[values(Threshold::Positive, Threshold::AtLeast(4))] threshold: Threshold<i64>) {
    let mut graph = random_graph(7, 12, 60, 16);
    graph.insert_edge_by_name("s", "x", 8).unwrap();
    graph.insert_edge_by_name("x", "t", 8).unwrap();
    graph.add_back_edges();
    let (s, t) = (graph.vertex_by_name("s").unwrap(), graph.vertex_by_name("t").unwrap());
    let initial: Vec<_> = (0..graph.num_edges()).map(|e| graph.pair_capacity(e)).collect();

    let mut finder = PathFinder::default();
    let mut augmentations = 0;
    while finder.search(&graph, s, t, threshold) {
        assert!(augment(&mut graph, &finder, s, t) > 0);
        augmentations += 1;

        let current: Vec<_> = (0..graph.num_edges()).map(|e| graph.pair_capacity(e)).collect();
        assert_eq!(current, initial);
        assert!((0..graph.num_edges()).all(|e| graph.edge(e).unwrap().capacity >= 0));
    }
    assert!(augmentations > 0);
}

#[rstest]
fn missing_sink_fails_fast(#[values(Algorithm::FordFulkerson, Algorithm::CapacityScaling, Algorithm::PreflowPush)] algorithm: Algorithm) {
    let mut solver = algorithm.build(graph(&[("s", "a", 3), ("a", "b", 3)]));
    assert!(matches!(solver.max_flow(), Err(FlowError::MissingSink(name)) if name == "t"));
    assert_eq!(solver.status(), Status::BadInput);

    solver.set_sink_vertex_name("b");
    assert_eq!(solver.max_flow().unwrap(), 3);
    assert_eq!(solver.status(), Status::Optimal);
}

#[rstest]
fn custom_terminal_names(#[values(Algorithm::FordFulkerson, Algorithm::CapacityScaling, Algorithm::PreflowPush)] algorithm: Algorithm) {
    let mut solver = algorithm.build(graph(&[("1", "2", 6), ("2", "4", 4), ("1", "3", 2), ("3", "4", 5)]));
    solver.set_source_vertex_name("1");
    solver.set_sink_vertex_name("4");
    assert_eq!(solver.max_flow().unwrap(), 6);

    solver.set_source_vertex_name("missing");
    assert!(matches!(solver.max_flow(), Err(FlowError::MissingSource(_))));
}

#[test]
fn solve_rejects_unknown_handles() {
    let mut solver = FordFulkerson::new(graph(&[("s", "t", 3)]));
    assert!(matches!(solver.solve(9, 1), Err(FlowError::UnknownVertex(9))));
    assert_eq!(solver.status(), Status::BadInput);
    assert_eq!(solver.solve(0, 1).unwrap(), 3);

    let mut solver = CapacityScaling::new(graph(&[("s", "t", 3)]));
    assert!(matches!(solver.solve(9, 1), Err(FlowError::UnknownVertex(9))));
    assert_eq!(solver.status(), Status::BadInput);
    assert!(matches!(solver.solve(1, 1), Err(FlowError::SourceIsSink(name)) if name == "t"));
    assert_eq!(solver.solve(0, 1).unwrap(), 3);
    assert_eq!(solver.status(), Status::Optimal);

    let mut solver = PreflowPush::new(graph(&[("s", "t", 3)]));
    assert!(matches!(solver.solve(0, 9), Err(FlowError::UnknownVertex(9))));
    assert_eq!(solver.status(), Status::BadInput);
    assert_eq!(solver.solve(0, 1).unwrap(), 3);
}
