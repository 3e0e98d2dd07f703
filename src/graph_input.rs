use crate::error::{FlowError, Result};
use crate::maximum_flow::graph::ResidualGraph;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn load_graph(path: impl AsRef<Path>) -> Result<ResidualGraph<f64>> {
    let text = fs::read_to_string(path)?;
    parse_graph(&text)
}

pub fn parse_graph(text: &str) -> Result<ResidualGraph<f64>> {
    let mut graph = ResidualGraph::new();
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        let [from, to, capacity] = fields[..] else {
            return Err(FlowError::Parse { line: line_number, message: format!("expected 3 fields, found {}", fields.len()) });
        };
        let capacity: f64 = capacity
            .parse()
            .map_err(|_| FlowError::Parse { line: line_number, message: format!("invalid capacity '{capacity}'") })?;

        graph
            .insert_edge_by_name(from, to, capacity)
            .map_err(|e| FlowError::Parse { line: line_number, message: e.to_string() })?;
    }

    debug!(vertices = graph.num_vertices(), edges = graph.num_edges(), "loaded graph");
    Ok(graph)
}
