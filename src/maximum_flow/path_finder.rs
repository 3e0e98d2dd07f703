use crate::maximum_flow::graph::ResidualGraph;
use num_traits::{NumAssign, NumCast};
use std::fmt::Debug;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Threshold<Flow> {
    /// residual capacity > 0
    Positive,
    /// residual capacity >= delta
    AtLeast(Flow),
}

impl<Flow> Threshold<Flow>
where
    Flow: NumAssign + PartialOrd + Copy,
{
    #[inline]
    pub fn admits(&self, residual_capacity: Flow) -> bool {
        match *self {
            Threshold::Positive => residual_capacity > Flow::zero(),
            Threshold::AtLeast(delta) => residual_capacity >= delta && residual_capacity > Flow::zero(),
        }
    }
}

// parent links belong to the most recent `search`
#[derive(Default)]
pub struct PathFinder {
    parent: Vec<Option<(usize, usize)>>, // (parent vertex, edge parent -> vertex)
    visited: Vec<bool>,
    stack: Vec<(usize, usize)>, // (vertex, next position in its adjacency)
}

impl PathFinder {
    pub fn search<Flow>(&mut self, graph: &ResidualGraph<Flow>, source: usize, sink: usize, threshold: Threshold<Flow>) -> bool
    where
        Flow: NumAssign + NumCast + PartialOrd + Copy + Debug,
    {
        let n = graph.num_vertices();
        self.parent.clear();
        self.parent.resize(n, None);
        self.visited.clear();
        self.visited.resize(n, false);
        self.stack.clear();

        if source >= n || sink >= n || source == sink {
            return false;
        }

        self.visited[source] = true;
        self.stack.push((source, 0));
        while let Some(top) = self.stack.last_mut() {
            let u = top.0;
            let adjacency = graph.incident_edge_ids(u);

            let mut next = None;
            while top.1 < adjacency.len() {
                let edge_id = adjacency[top.1];
                top.1 += 1;
                let edge = &graph.edges[edge_id];
                if !self.visited[edge.to] && threshold.admits(edge.capacity) {
                    next = Some((edge.to, edge_id));
                    break;
                }
            }

            match next {
                Some((v, edge_id)) => {
                    self.visited[v] = true;
                    self.parent[v] = Some((u, edge_id));
                    if v == sink {
                        return true;
                    }
                    self.stack.push((v, 0));
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        false
    }

    #[inline]
    pub fn parent(&self, v: usize) -> Option<(usize, usize)> {
        self.parent.get(v).copied().flatten()
    }

    // sink back to source
    pub fn path_edges(&self, source: usize, sink: usize) -> PathEdges<'_> {
        PathEdges { finder: self, source, current: sink }
    }
}

pub struct PathEdges<'a> {
    finder: &'a PathFinder,
    source: usize,
    current: usize,
}

impl Iterator for PathEdges<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.current == self.source {
            return None;
        }
        let (u, edge_id) = self.finder.parent(self.current)?;
        self.current = u;
        Some(edge_id)
    }
}
