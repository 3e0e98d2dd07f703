use clap::{Parser, ValueEnum};
use network_flow_comparison::maximum_flow::solver::{Algorithm, DEFAULT_SINK_NAME, DEFAULT_SOURCE_NAME};

#[derive(Parser, Debug)]
#[command(about = "Compare maximum flow algorithms on a graph file")]
pub struct Args {
    /// graph file, one `<from> <to> <capacity>` arc per line
    #[arg(value_parser)]
    pub input: String,

    #[arg(short, long, value_enum, default_value_t = Selection::All)]
    pub algorithm: Selection,

    #[arg(long, default_value = DEFAULT_SOURCE_NAME)]
    pub source: String,

    #[arg(long, default_value = DEFAULT_SINK_NAME)]
    pub sink: String,

    /// number of timed runs per algorithm, each on a freshly loaded graph
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub runs: u32,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    All,
    FordFulkerson,
    CapacityScaling,
    PreflowPush,
}

impl Selection {
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Selection::All => Algorithm::ALL.to_vec(),
            Selection::FordFulkerson => vec![Algorithm::FordFulkerson],
            Selection::CapacityScaling => vec![Algorithm::CapacityScaling],
            Selection::PreflowPush => vec![Algorithm::PreflowPush],
        }
    }
}
