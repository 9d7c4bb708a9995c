//! Graph store: adjacency lists for undirected [`Graph`]s and directed
//! [`Digraph`]s, the edge property table they embed, and the
//! [`GraphAccess`] seam the algorithms read through.
//!
//! Mutations either fully apply or fail without touching the store:
//! unknown endpoints, duplicate nodes and duplicate edges are rejected before
//! any adjacency list is modified.

mod access;
mod attributes;
mod directed;
mod edge_table;
mod types;
mod undirected;

pub use access::GraphAccess;
pub use attributes::find_attribute;
pub use directed::Digraph;
pub use types::{
    Attribute, EdgeProperty, NodeId, NodeMap, NodeSet, SpanningTree, validate_weight,
};
pub use undirected::Graph;

pub(crate) use types::{node_map, node_set};
