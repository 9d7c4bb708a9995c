//! Read-only view over a graph store. Every traversal and search in the crate
//! is written against [`GraphAccess`], so the same algorithm runs unchanged on
//! [`super::Graph`] and [`super::Digraph`]; the only behavioral switch is
//! [`GraphAccess::is_directed`].

use super::types::{Attribute, NodeId};
use crate::{config::GraphConfig, errors::GraphError};

pub trait GraphAccess {
    type Node: NodeId;

    fn is_directed(&self) -> bool;
    /// All nodes, in insertion order.
    fn nodes(&self) -> Vec<Self::Node>;
    fn has_node(&self, node: &Self::Node) -> bool;
    /// Successors for digraphs, neighbors for graphs, in edge insertion order.
    fn neighbors(&self, node: &Self::Node) -> Result<&[Self::Node], GraphError>;
    fn edge_weight(&self, u: &Self::Node, v: &Self::Node) -> Result<f64, GraphError>;
    fn node_attributes(&self, node: &Self::Node) -> Result<&[Attribute], GraphError>;
    fn config(&self) -> &GraphConfig;

    /// Predecessors for digraphs; graphs have no distinction and return neighbors.
    fn incidents(&self, node: &Self::Node) -> Result<&[Self::Node], GraphError> {
        self.neighbors(node)
    }

    fn ensure_node(&self, node: &Self::Node) -> Result<(), GraphError> {
        if self.has_node(node) {
            Ok(())
        } else {
            Err(GraphError::unknown_node(format!("{node:?}")))
        }
    }
}
