use crate::error::Result;
use crate::maximum_flow::flow_updater::augment;
use crate::maximum_flow::graph::ResidualGraph;
use crate::maximum_flow::path_finder::{PathFinder, Threshold};
use crate::maximum_flow::solver::{check_terminals, MaxFlowSolver, Terminals};
use crate::maximum_flow::status::Status;
use num_traits::{NumAssign, NumCast};
use std::fmt::Debug;
use tracing::{debug, info};

pub struct FordFulkerson<Flow> {
    graph: ResidualGraph<Flow>,
    terminals: Terminals,
    finder: PathFinder,
    status: Status,
}

impl<Flow> FordFulkerson<Flow>
where
    Flow: NumAssign + NumCast + PartialOrd + Copy + Debug,
{
    pub fn new(mut graph: ResidualGraph<Flow>) -> Self {
        graph.add_back_edges();
        let terminals = Terminals::default();
        terminals.report_unresolved(&graph);
        Self { graph, terminals, finder: PathFinder::default(), status: Status::NotSolved }
    }

    pub fn solve(&mut self, source: usize, sink: usize) -> Result<Flow> {
        check_terminals(&self.graph, source, sink).inspect_err(|_| self.status = Status::BadInput)?;

        let mut flow = Flow::zero();
        let mut augmentations = 0usize;
        while self.finder.search(&self.graph, source, sink, Threshold::Positive) {
            flow += augment(&mut self.graph, &self.finder, source, sink);
            augmentations += 1;
        }
        debug!(augmentations, "no augmenting path left");

        self.status = Status::Optimal;
        Ok(flow)
    }
}

impl<Flow> MaxFlowSolver<Flow> for FordFulkerson<Flow>
where
    Flow: NumAssign + NumCast + PartialOrd + Copy + Debug,
{
    fn name(&self) -> &'static str {
        "Ford-Fulkerson"
    }

    fn max_flow(&mut self) -> Result<Flow> {
        let (source, sink) = self.terminals.resolve(&self.graph).inspect_err(|_| self.status = Status::BadInput)?;
        let flow = self.solve(source, sink)?;
        info!(?flow, "Ford-Fulkerson finished");
        Ok(flow)
    }

    fn set_source_vertex_name(&mut self, name: &str) {
        self.terminals.source = name.to_string();
    }

    fn set_sink_vertex_name(&mut self, name: &str) {
        self.terminals.sink = name.to_string();
    }

    fn status(&self) -> Status {
        self.status
    }

    fn graph(&self) -> &ResidualGraph<Flow> {
        &self.graph
    }
}
