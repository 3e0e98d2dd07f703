use crate::maximum_flow::graph::ResidualGraph;
use crate::maximum_flow::path_finder::PathFinder;
use num_traits::{NumAssign, NumCast};
use std::fmt::Debug;

pub fn bottleneck<Flow>(graph: &ResidualGraph<Flow>, finder: &PathFinder, source: usize, sink: usize) -> Option<Flow>
where
    Flow: NumAssign + NumCast + PartialOrd + Copy + Debug,
{
    finder.path_edges(source, sink).map(|edge_id| graph.edges[edge_id].capacity).reduce(|a, b| if b < a { b } else { a })
}

pub fn augment<Flow>(graph: &mut ResidualGraph<Flow>, finder: &PathFinder, source: usize, sink: usize) -> Flow
where
    Flow: NumAssign + NumCast + PartialOrd + Copy + Debug,
{
    match bottleneck(graph, finder, source, sink) {
        Some(delta) => {
            update_flow(graph, finder, source, sink, delta);
            delta
        }
        None => Flow::zero(),
    }
}

/// Like `augment`, but pushes at most `limit`.
pub fn augment_up_to<Flow>(graph: &mut ResidualGraph<Flow>, finder: &PathFinder, source: usize, sink: usize, limit: Flow) -> Flow
where
    Flow: NumAssign + NumCast + PartialOrd + Copy + Debug,
{
    match bottleneck(graph, finder, source, sink) {
        Some(delta) => {
            let delta = if limit < delta { limit } else { delta };
            update_flow(graph, finder, source, sink, delta);
            delta
        }
        None => Flow::zero(),
    }
}

fn update_flow<Flow>(graph: &mut ResidualGraph<Flow>, finder: &PathFinder, source: usize, sink: usize, delta: Flow)
where
    Flow: NumAssign + NumCast + PartialOrd + Copy + Debug,
{
    for edge_id in finder.path_edges(source, sink) {
        graph.push_flow(edge_id, delta);
    }
}
