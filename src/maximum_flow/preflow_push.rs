use crate::error::Result;
use crate::maximum_flow::flow_updater::augment_up_to;
use crate::maximum_flow::graph::ResidualGraph;
use crate::maximum_flow::path_finder::{PathFinder, Threshold};
use crate::maximum_flow::solver::{check_terminals, MaxFlowSolver, Terminals};
use crate::maximum_flow::status::Status;
use num_traits::{NumAssign, NumCast};
use std::collections::VecDeque;
use std::fmt::Debug;
use tracing::{debug, info, warn};

pub const DEFAULT_ALPHA: usize = 6;

pub struct PreflowPush<Flow> {
    graph: ResidualGraph<Flow>,
    terminals: Terminals,
    status: Status,

    excesses: Vec<Flow>,
    distances: Vec<usize>, // distance from u to sink in residual network
    distance_count: Vec<usize>,
    current_edge: Vec<usize>, // position in the adjacency of u
    incoming: Vec<Vec<usize>>,
    active_nodes: VecDeque<usize>,
    que: VecDeque<usize>,
    finder: PathFinder,

    alpha: usize,
    relabel_count: usize,
}

impl<Flow> PreflowPush<Flow>
where
    Flow: NumAssign + NumCast + PartialOrd + Copy + Debug,
{
    pub fn new(mut graph: ResidualGraph<Flow>) -> Self {
        graph.add_back_edges();
        let terminals = Terminals::default();
        terminals.report_unresolved(&graph);
        Self {
            graph,
            terminals,
            status: Status::NotSolved,
            excesses: Vec::new(),
            distances: Vec::new(),
            distance_count: Vec::new(),
            current_edge: Vec::new(),
            incoming: Vec::new(),
            active_nodes: VecDeque::new(),
            que: VecDeque::new(),
            finder: PathFinder::default(),
            alpha: DEFAULT_ALPHA,
            relabel_count: 0,
        }
    }

    /// Global relabeling runs after `alpha * n` relabels; zero disables it.
    pub fn set_alpha(&mut self, alpha: usize) {
        self.alpha = alpha;
    }

    pub fn solve(&mut self, source: usize, sink: usize) -> Result<Flow> {
        check_terminals(&self.graph, source, sink).inspect_err(|_| self.status = Status::BadInput)?;
        self.pre_process(source, sink);

        let n = self.graph.num_vertices();
        while let Some(u) = self.active_nodes.pop_front() {
            // no path to sink
            if u == source || u == sink || self.distances[u] >= n {
                continue;
            }
            self.discharge(u);

            if self.alpha != 0 && self.relabel_count > self.alpha * n {
                self.relabel_count = 0;
                self.global_relabel(source, sink);
            }
        }

        self.push_flow_excess_back_to_source(source, sink);

        self.status = Status::Optimal;
        Ok(self.excesses[sink])
    }

    fn pre_process(&mut self, source: usize, sink: usize) {
        let n = self.graph.num_vertices();
        self.excesses.clear();
        self.excesses.resize(n, Flow::zero());
        self.distances.resize(n, n);
        self.current_edge.resize(n, 0);
        self.active_nodes.clear();
        self.relabel_count = 0;

        self.incoming = vec![Vec::new(); n];
        for (edge_id, edge) in self.graph.edges.iter().enumerate() {
            self.incoming[edge.to].push(edge_id);
        }

        self.global_relabel(source, sink);

        for i in 0..self.graph.incident_edge_ids(source).len() {
            let edge_id = self.graph.incident_edge_ids(source)[i];
            let edge = &self.graph.edges[edge_id];
            let (to, delta) = (edge.to, edge.capacity);
            if delta > Flow::zero() {
                self.excesses[to] += delta;
                self.graph.push_flow(edge_id, delta);
            }
        }

        for u in 0..n {
            if u != source && u != sink && self.excesses[u] > Flow::zero() {
                self.active_nodes.push_back(u);
            }
        }
    }

    // O(n + m)
    // exact distance labels by a reverse bfs from the sink
    fn global_relabel(&mut self, source: usize, sink: usize) {
        let n = self.graph.num_vertices();
        self.que.clear();
        self.que.push_back(sink);
        self.distances.fill(n);
        self.distances[sink] = 0;

        while let Some(v) = self.que.pop_front() {
            for &edge_id in self.incoming[v].iter() {
                // e.from -> v
                let edge = &self.graph.edges[edge_id];
                if edge.capacity > Flow::zero() && self.distances[edge.from] == n {
                    self.distances[edge.from] = self.distances[v] + 1;
                    if edge.from != source {
                        self.que.push_back(edge.from);
                    }
                }
            }
        }
        self.distances[source] = n;

        self.distance_count.clear();
        self.distance_count.resize(n + 1, 0);
        for u in 0..n {
            self.distance_count[self.distances[u]] += 1;
            self.current_edge[u] = 0;
        }
    }

    #[inline]
    fn is_admissible_edge(&self, from: usize, edge_id: usize) -> bool {
        let edge = &self.graph.edges[edge_id];
        edge.capacity > Flow::zero() && self.distances[from] == self.distances[edge.to] + 1
    }

    fn discharge(&mut self, u: usize) {
        // push
        let degree = self.graph.incident_edge_ids(u).len();
        for i in self.current_edge[u]..degree {
            self.current_edge[u] = i;
            if self.excesses[u] > Flow::zero() {
                self.push(u, self.graph.incident_edge_ids(u)[i]);
            }

            if self.excesses[u] == Flow::zero() {
                return;
            }
        }
        self.current_edge[u] = 0;

        // relabel
        if self.distance_count[self.distances[u]] == 1 {
            self.gap_relabeling(self.distances[u]);
        } else {
            self.relabel(u);
        }

        if self.excesses[u] > Flow::zero() {
            self.active_nodes.push_back(u);
        }
    }

    // push from u
    fn push(&mut self, u: usize, edge_id: usize) {
        let edge = &self.graph.edges[edge_id];
        let to = edge.to;
        let delta = if self.excesses[u] < edge.capacity { self.excesses[u] } else { edge.capacity };
        if self.is_admissible_edge(u, edge_id) && delta > Flow::zero() {
            self.graph.push_flow(edge_id, delta);
            self.excesses[u] -= delta;
            self.excesses[to] += delta;
            if self.excesses[to] == delta {
                self.active_nodes.push_back(to);
            }
        }
    }

    fn relabel(&mut self, u: usize) {
        let n = self.graph.num_vertices();
        self.relabel_count += 1;
        self.distance_count[self.distances[u]] -= 1;

        let new_distance = self
            .graph
            .incident_edges(u)
            .filter(|edge| edge.capacity > Flow::zero())
            .map(|edge| self.distances[edge.to] + 1)
            .min()
            .unwrap_or(n)
            .min(n);

        self.distances[u] = new_distance;
        self.distance_count[self.distances[u]] += 1;
    }

    // gap relabeling heuristic
    // set distance[u] >= k to distance[u] = n
    // O(n)
    fn gap_relabeling(&mut self, k: usize) {
        let n = self.graph.num_vertices();
        for u in 0..n {
            if self.distances[u] >= k {
                self.distance_count[self.distances[u]] -= 1;
                self.distances[u] = self.distances[u].max(n);
                self.distance_count[self.distances[u]] += 1;
            }
        }
    }

    fn push_flow_excess_back_to_source(&mut self, source: usize, sink: usize) {
        let mut returned = 0usize;
        for u in 0..self.graph.num_vertices() {
            if u == source || u == sink {
                continue;
            }
            while self.excesses[u] > Flow::zero() {
                if !self.finder.search(&self.graph, u, source, Threshold::Positive) {
                    warn!(vertex = u, excess = ?self.excesses[u], "excess cannot return to the source");
                    break;
                }
                let delta = augment_up_to(&mut self.graph, &self.finder, u, source, self.excesses[u]);
                self.excesses[u] -= delta;
                returned += 1;
            }
        }
        debug!(returned, "pushed excess back to the source");
    }
}

impl<Flow> MaxFlowSolver<Flow> for PreflowPush<Flow>
where
    Flow: NumAssign + NumCast + PartialOrd + Copy + Debug,
{
    fn name(&self) -> &'static str {
        "Preflow Push"
    }

    fn max_flow(&mut self) -> Result<Flow> {
        let (source, sink) = self.terminals.resolve(&self.graph).inspect_err(|_| self.status = Status::BadInput)?;
        let flow = self.solve(source, sink)?;
        info!(?flow, "preflow push finished");
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
