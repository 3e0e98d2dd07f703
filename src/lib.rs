pub mod error;
pub mod graph_input;
pub mod maximum_flow;

pub use error::{FlowError, Result};
