use crate::error::{FlowError, Result};
use crate::maximum_flow::capacity_scaling::CapacityScaling;
use crate::maximum_flow::ford_fulkerson::FordFulkerson;
use crate::maximum_flow::graph::ResidualGraph;
use crate::maximum_flow::preflow_push::PreflowPush;
use crate::maximum_flow::status::Status;
use num_traits::{NumAssign, NumCast};
use std::fmt::Debug;
use tracing::warn;

pub const DEFAULT_SOURCE_NAME: &str = "s";
pub const DEFAULT_SINK_NAME: &str = "t";

// a second `max_flow` on a solved graph returns zero
pub trait MaxFlowSolver<Flow> {
    fn name(&self) -> &'static str;

    fn max_flow(&mut self) -> Result<Flow>;

    fn set_source_vertex_name(&mut self, name: &str);

    fn set_sink_vertex_name(&mut self, name: &str);

    fn status(&self) -> Status;

    fn graph(&self) -> &ResidualGraph<Flow>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Terminals {
    pub source: String,
    pub sink: String,
}

impl Default for Terminals {
    fn default() -> Self {
        Self { source: DEFAULT_SOURCE_NAME.to_string(), sink: DEFAULT_SINK_NAME.to_string() }
    }
}

impl Terminals {
    pub fn resolve<Flow>(&self, graph: &ResidualGraph<Flow>) -> Result<(usize, usize)>
    where
        Flow: NumAssign + NumCast + PartialOrd + Copy + Debug,
    {
        let source = graph.vertex_by_name(&self.source).ok_or_else(|| FlowError::MissingSource(self.source.clone()))?;
        let sink = graph.vertex_by_name(&self.sink).ok_or_else(|| FlowError::MissingSink(self.sink.clone()))?;
        if source == sink {
            return Err(FlowError::SourceIsSink(self.sink.clone()));
        }
        Ok((source, sink))
    }

    pub(crate) fn report_unresolved<Flow>(&self, graph: &ResidualGraph<Flow>)
    where
        Flow: NumAssign + NumCast + PartialOrd + Copy + Debug,
    {
        if graph.vertex_by_name(&self.sink).is_none() {
            warn!(sink = %self.sink, "cannot find the sink vertex");
        }
    }
}

// raw vertex handles passed to a solver's `solve`
pub(crate) fn check_terminals<Flow>(graph: &ResidualGraph<Flow>, source: usize, sink: usize) -> Result<()>
where
    Flow: NumAssign + NumCast + PartialOrd + Copy + Debug,
{
    if source >= graph.num_vertices() {
        return Err(FlowError::UnknownVertex(source));
    }
    if sink >= graph.num_vertices() {
        return Err(FlowError::UnknownVertex(sink));
    }
    if source == sink {
        let name = graph.vertex(sink).map(|v| v.name.clone()).unwrap_or_default();
        return Err(FlowError::SourceIsSink(name));
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    FordFulkerson,
    CapacityScaling,
    PreflowPush,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::FordFulkerson, Algorithm::CapacityScaling, Algorithm::PreflowPush];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::FordFulkerson => "Ford-Fulkerson",
            Algorithm::CapacityScaling => "Capacity Scaling Ford-Fulkerson",
            Algorithm::PreflowPush => "Preflow Push",
        }
    }

    pub fn build<Flow>(self, graph: ResidualGraph<Flow>) -> Box<dyn MaxFlowSolver<Flow>>
    where
        Flow: NumAssign + NumCast + PartialOrd + Copy + Debug + 'static,
    {
        match self {
            Algorithm::FordFulkerson => Box::new(FordFulkerson::new(graph)),
            Algorithm::CapacityScaling => Box::new(CapacityScaling::new(graph)),
            Algorithm::PreflowPush => Box::new(PreflowPush::new(graph)),
        }
    }
}
