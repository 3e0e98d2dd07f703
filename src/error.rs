use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("cannot find the source vertex '{0}'")]
    MissingSource(String),
    #[error("cannot find the sink vertex '{0}'")]
    MissingSink(String),
    #[error("source and sink are the same vertex '{0}'")]
    SourceIsSink(String),
    #[error("vertex {0} does not exist")]
    UnknownVertex(usize),
    #[error("capacity of edge {from} -> {to} must be finite and non-negative")]
    InvalidCapacity { from: String, to: String },
    #[error("scaling threshold {0} is not representable in the flow type")]
    UnrepresentableThreshold(u64),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("system error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FlowError>;
