use std::{fmt::Debug, hash::Hash};

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::GraphError;

/// Caller-supplied node identifier.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> NodeId for T {}

/// Insertion-ordered map keyed by node (or node pair).
pub type NodeMap<K, V> = IndexMap<K, V, ahash::RandomState>;

/// Insertion-ordered node set.
pub type NodeSet<K> = IndexSet<K, ahash::RandomState>;

/// Child to parent mapping produced by traversals; roots map to `None`.
pub type SpanningTree<N> = NodeMap<N, Option<N>>;

/// A `(name, value)` pair attached to a node or an edge.
pub type Attribute = (String, Value);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeProperty {
    pub weight: f64,
    pub label: String,
}

impl EdgeProperty {
    pub fn new<T: Into<String>>(weight: f64, label: T) -> Self {
        Self {
            weight,
            label: label.into(),
        }
    }
}

pub(crate) fn node_map<K: NodeId, V>() -> NodeMap<K, V> {
    IndexMap::with_hasher(ahash::RandomState::new())
}

pub(crate) fn node_set<K: NodeId>() -> NodeSet<K> {
    IndexSet::with_hasher(ahash::RandomState::new())
}

pub(crate) fn describe_edge<N: Debug>(u: &N, v: &N) -> String {
    format!("({u:?}, {v:?})")
}

/// Rejects weights a non-negative search cannot handle.
pub fn validate_weight<N: Debug>(u: &N, v: &N, weight: f64) -> Result<(), GraphError> {
    if weight.is_nan() {
        return Err(GraphError::invalid_weight(format!(
            "edge {} has a NaN weight",
            describe_edge(u, v)
        )));
    }
    if weight < 0.0 {
        return Err(GraphError::invalid_weight(format!(
            "edge {} has negative weight {weight}",
            describe_edge(u, v)
        )));
    }
    Ok(())
}
