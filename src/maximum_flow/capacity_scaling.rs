use crate::error::{FlowError, Result};
use crate::maximum_flow::flow_updater::augment;
use crate::maximum_flow::graph::ResidualGraph;
use crate::maximum_flow::path_finder::{PathFinder, Threshold};
use crate::maximum_flow::solver::{check_terminals, MaxFlowSolver, Terminals};
use crate::maximum_flow::status::Status;
use num_traits::{NumAssign, NumCast};
use std::fmt::Debug;
use tracing::{debug, info};

pub struct CapacityScaling<Flow> {
    graph: ResidualGraph<Flow>,
    terminals: Terminals,
    finder: PathFinder,
    status: Status,
}

impl<Flow> CapacityScaling<Flow>
where
    Flow: NumAssign + NumCast + PartialOrd + Copy + Debug,
{
    pub fn new(mut graph: ResidualGraph<Flow>) -> Self {
        graph.add_back_edges();
        let terminals = Terminals::default();
        terminals.report_unresolved(&graph);
        Self { graph, terminals, finder: PathFinder::default(), status: Status::NotSolved }
    }

    pub fn delta(&self) -> u64 {
        match self.graph.vertex_by_name(&self.terminals.source) {
            Some(source) => self.initial_delta(source),
            None => 0,
        }
    }

    fn initial_delta(&self, source: usize) -> u64 {
        let max_capacity = self.graph.incident_edges(source).map(|e| e.capacity).reduce(|a, b| if b > a { b } else { a });

        match max_capacity.and_then(|c| c.to_f64()) {
            // `as` saturates at u64::MAX
            Some(max_capacity) if max_capacity >= 1.0 => 1 << (63 - (max_capacity as u64).leading_zeros()),
            _ => 0,
        }
    }

    pub fn solve(&mut self, source: usize, sink: usize) -> Result<Flow> {
        check_terminals(&self.graph, source, sink).inspect_err(|_| self.status = Status::BadInput)?;

        let mut flow = Flow::zero();
        let mut delta = self.initial_delta(source);

        while delta > 0 {
            let threshold = <Flow as NumCast>::from(delta).ok_or(FlowError::UnrepresentableThreshold(delta))?;

            // solve maximum flow in delta-residual network
            let mut augmentations = 0usize;
            while self.finder.search(&self.graph, source, sink, Threshold::AtLeast(threshold)) {
                flow += augment(&mut self.graph, &self.finder, source, sink);
                augmentations += 1;
            }
            debug!(delta, augmentations, "scaling phase finished");

            delta >>= 1;
        }

        // capacities below one never clear an integral threshold
        let mut augmentations = 0usize;
        while self.finder.search(&self.graph, source, sink, Threshold::Positive) {
            flow += augment(&mut self.graph, &self.finder, source, sink);
            augmentations += 1;
        }
        debug!(augmentations, "residual phase finished");

        self.status = Status::Optimal;
        Ok(flow)
    }
}

impl<Flow> MaxFlowSolver<Flow> for CapacityScaling<Flow>
where
    Flow: NumAssign + NumCast + PartialOrd + Copy + Debug,
{
    fn name(&self) -> &'static str {
        "Capacity Scaling Ford-Fulkerson"
    }

    fn max_flow(&mut self) -> Result<Flow> {
        let (source, sink) = self.terminals.resolve(&self.graph).inspect_err(|_| self.status = Status::BadInput)?;
        let flow = self.solve(source, sink).inspect_err(|_| self.status = Status::BadInput)?;
        info!(?flow, "capacity scaling finished");
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
