use crate::error::{FlowError, Result};
use num_traits::{NumAssign, NumCast};
use std::collections::HashMap;
use std::fmt::Debug;
use tracing::debug;

#[derive(PartialEq, Debug, Clone)]
pub struct Vertex {
    pub name: String,
}

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    /// residual capacity
    pub capacity: Flow,
    pub(crate) rev: usize,
}

impl<Flow> Edge<Flow> {
    #[inline]
    pub fn rev(&self) -> Option<usize> {
        (self.rev != usize::MAX).then_some(self.rev)
    }
}

// parallel edges share the reverse of the first edge inserted for their pair
#[derive(Default, Debug, Clone)]
pub struct ResidualGraph<Flow> {
    vertices: Vec<Vertex>,
    vertex_index: HashMap<String, usize>,
    pub(crate) edges: Vec<Edge<Flow>>,
    adjacency: Vec<Vec<usize>>,
}

impl<Flow> ResidualGraph<Flow>
where
    Flow: NumAssign + NumCast + PartialOrd + Copy + Debug,
{
    pub fn new() -> Self {
        Self { vertices: Vec::new(), vertex_index: HashMap::new(), edges: Vec::new(), adjacency: Vec::new() }
    }

    pub fn from_arcs<'a, I>(arcs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str, Flow)>,
    {
        let mut graph = Self::new();
        for (from, to, capacity) in arcs {
            graph.insert_edge_by_name(from, to, capacity)?;
        }
        Ok(graph)
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    // return vertex index; an existing vertex is reused
    pub fn add_vertex(&mut self, name: &str) -> usize {
        if let Some(&u) = self.vertex_index.get(name) {
            return u;
        }
        self.vertices.push(Vertex { name: name.to_string() });
        self.adjacency.push(Vec::new());
        self.vertex_index.insert(name.to_string(), self.vertices.len() - 1);
        self.vertices.len() - 1
    }

    #[inline]
    pub fn vertex_by_name(&self, name: &str) -> Option<usize> {
        self.vertex_index.get(name).copied()
    }

    pub fn vertex(&self, u: usize) -> Option<&Vertex> {
        self.vertices.get(u)
    }

    pub fn vertices(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    // return edge index
    pub fn insert_edge(&mut self, from: usize, to: usize, capacity: Flow) -> Result<usize> {
        if from >= self.num_vertices() {
            return Err(FlowError::UnknownVertex(from));
        }
        if to >= self.num_vertices() {
            return Err(FlowError::UnknownVertex(to));
        }
        if !is_valid_capacity(capacity) {
            return Err(FlowError::InvalidCapacity { from: self.vertices[from].name.clone(), to: self.vertices[to].name.clone() });
        }
        Ok(self.push_edge(from, to, capacity))
    }

    pub fn insert_edge_by_name(&mut self, from: &str, to: &str, capacity: Flow) -> Result<usize> {
        if !is_valid_capacity(capacity) {
            return Err(FlowError::InvalidCapacity { from: from.to_string(), to: to.to_string() });
        }
        let (u, v) = (self.add_vertex(from), self.add_vertex(to));
        Ok(self.push_edge(u, v, capacity))
    }

    fn push_edge(&mut self, from: usize, to: usize, capacity: Flow) -> usize {
        self.edges.push(Edge { from, to, capacity, rev: usize::MAX });
        self.adjacency[from].push(self.edges.len() - 1);
        self.edges.len() - 1
    }

    #[inline]
    pub fn edge(&self, edge_id: usize) -> Option<&Edge<Flow>> {
        self.edges.get(edge_id)
    }

    #[inline]
    pub fn incident_edge_ids(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    pub fn incident_edges(&self, u: usize) -> impl Iterator<Item = &Edge<Flow>> + '_ {
        self.adjacency[u].iter().map(move |&edge_id| &self.edges[edge_id])
    }

    // O(degree(from)), first inserted edge wins
    pub fn find_edge(&self, from: usize, to: usize) -> Option<usize> {
        self.adjacency.get(from)?.iter().copied().find(|&edge_id| self.edges[edge_id].to == to)
    }

    pub fn has_back_edges(&self) -> bool {
        self.edges.iter().all(|e| e.rev != usize::MAX)
    }

    pub fn add_back_edges(&mut self) {
        let arcs: Vec<(usize, usize)> = self.edges.iter().map(|e| (e.from, e.to)).collect();

        let mut synthesized = 0;
        for &(u, v) in arcs.iter() {
            if self.find_edge(v, u).is_none() {
                self.push_edge(v, u, Flow::zero());
                synthesized += 1;
            }
        }

        for edge_id in 0..self.edges.len() {
            let (u, v) = (self.edges[edge_id].from, self.edges[edge_id].to);
            if let Some(rev) = self.find_edge(v, u) {
                self.edges[edge_id].rev = rev;
            }
        }

        debug!(original = arcs.len(), synthesized, "added back edges");
    }

    /// cap(e) + cap(rev(e)); constant over every augmentation.
    pub fn pair_capacity(&self, edge_id: usize) -> Option<Flow> {
        let edge = self.edges.get(edge_id)?;
        let rev = self.edges.get(edge.rev()?)?;
        Some(edge.capacity + rev.capacity)
    }

    #[inline]
    pub(crate) fn push_flow(&mut self, edge_id: usize, flow: Flow) {
        let rev = self.edges[edge_id].rev;

        self.edges[edge_id].capacity -= flow;
        self.edges[rev].capacity += flow;
    }
}

fn is_valid_capacity<Flow>(capacity: Flow) -> bool
where
    Flow: NumAssign + NumCast + PartialOrd + Copy,
{
    capacity >= Flow::zero() && capacity.to_f64().is_some_and(f64::is_finite)
}
