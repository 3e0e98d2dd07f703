mod cli;
mod logging;

use anyhow::{bail, Result};
use clap::Parser;
use cli::Args;
use network_flow_comparison::graph_input::load_graph;
use network_flow_comparison::maximum_flow::solver::Algorithm;
use std::time::{Duration, Instant};
use tracing::{error, info};

fn run(algorithm: Algorithm, args: &Args) -> Result<(Duration, Option<f64>)> {
    let mut total = Duration::ZERO;
    let mut flow = None;
    for _ in 0..args.runs {
        // a fresh graph per run, solvers consume their residual capacities
        let graph = load_graph(&args.input)?;
        let mut solver = algorithm.build(graph);
        solver.set_source_vertex_name(&args.source);
        solver.set_sink_vertex_name(&args.sink);

        let start = Instant::now();
        let result = solver.max_flow();
        total += start.elapsed();

        match result {
            Ok(value) => flow = Some(value),
            Err(e) => {
                error!("{}: {}", solver.name(), e);
                return Ok((total, None));
            }
        }
    }
    Ok((total, flow))
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    if !args.input.ends_with(".txt") {
        bail!("input file must be a text .txt file");
    }
    println!("Input file: {}", args.input);
    info!(runs = args.runs, source = %args.source, sink = %args.sink, "start");

    let mut results = Vec::new();
    for algorithm in args.algorithm.algorithms() {
        let (elapsed, flow) = run(algorithm, &args)?;
        println!("{} took: {} ms", algorithm.name(), elapsed.as_millis());
        results.push((algorithm, flow));
    }

    println!();
    for (algorithm, flow) in results {
        match flow {
            Some(flow) => println!("{} maximum flow: {}", algorithm.name(), flow),
            None => println!("{} maximum flow: unavailable", algorithm.name()),
        }
    }

    Ok(())
}
