use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("duplicate node: {0}")]
    DuplicateNode(String),
    #[error("duplicate edge: {0}")]
    DuplicateEdge(String),
    #[error("unknown node: {0}")]
    UnknownNode(String),
    #[error("unknown edge: {0}")]
    UnknownEdge(String),
    /// Operation not supported for the directed or undirected variant.
    #[error("invalid graph kind: {0}")]
    InvalidGraphKind(String),
    #[error("cycle detected: {0}")]
    CycleDetected(String),
    #[error("heuristic not optimized: {0}")]
    HeuristicNotOptimized(String),
    #[error("no path found: {0}")]
    NoPathFound(String),
    #[error("invalid weight: {0}")]
    InvalidWeight(String),
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),
}

impl GraphError {
    pub fn duplicate_node<T: Into<String>>(msg: T) -> Self {
        GraphError::DuplicateNode(msg.into())
    }

    pub fn duplicate_edge<T: Into<String>>(msg: T) -> Self {
        GraphError::DuplicateEdge(msg.into())
    }

    pub fn unknown_node<T: Into<String>>(msg: T) -> Self {
        GraphError::UnknownNode(msg.into())
    }

    pub fn unknown_edge<T: Into<String>>(msg: T) -> Self {
        GraphError::UnknownEdge(msg.into())
    }

    pub fn invalid_graph_kind<T: Into<String>>(msg: T) -> Self {
        GraphError::InvalidGraphKind(msg.into())
    }

    pub fn cycle_detected<T: Into<String>>(msg: T) -> Self {
        GraphError::CycleDetected(msg.into())
    }

    pub fn heuristic_not_optimized<T: Into<String>>(msg: T) -> Self {
        GraphError::HeuristicNotOptimized(msg.into())
    }

    pub fn no_path_found<T: Into<String>>(msg: T) -> Self {
        GraphError::NoPathFound(msg.into())
    }

    pub fn invalid_weight<T: Into<String>>(msg: T) -> Self {
        GraphError::InvalidWeight(msg.into())
    }

    pub fn invalid_attribute<T: Into<String>>(msg: T) -> Self {
        GraphError::InvalidAttribute(msg.into())
    }
}
