pub mod capacity_scaling;
pub mod flow_updater;
pub mod ford_fulkerson;
pub mod graph;
pub mod path_finder;
pub mod preflow_push;
pub mod solver;
pub mod status;
