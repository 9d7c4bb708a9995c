//! Search filters for [`crate::traversal::depth_first_search_filtered`] and
//! [`crate::traversal::breadth_first_search_filtered`].
//!
//! A filter is asked about a node each time the search could attach it to the
//! spanning tree under `parent` (`None` for roots). Rejected nodes stay out of
//! the tree but may still be admitted later through another parent.

use crate::{
    errors::GraphError,
    graph::{GraphAccess, NodeId, NodeMap, node_map},
};

pub trait SearchFilter<G: GraphAccess> {
    fn admit(
        &mut self,
        graph: &G,
        node: &G::Node,
        parent: Option<&G::Node>,
    ) -> Result<bool, GraphError>;
}

impl<G: GraphAccess, F: SearchFilter<G> + ?Sized> SearchFilter<G> for &mut F {
    fn admit(
        &mut self,
        graph: &G,
        node: &G::Node,
        parent: Option<&G::Node>,
    ) -> Result<bool, GraphError> {
        (**self).admit(graph, node, parent)
    }
}

/// Admits everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullFilter;

impl<G: GraphAccess> SearchFilter<G> for NullFilter {
    fn admit(
        &mut self,
        _graph: &G,
        _node: &G::Node,
        _parent: Option<&G::Node>,
    ) -> Result<bool, GraphError> {
        Ok(true)
    }
}

/// Admits nodes until `target` has been admitted, then stops the search from
/// growing any further.
#[derive(Clone, Debug)]
pub struct Find<N> {
    target: N,
    found: bool,
}

impl<N: NodeId> Find<N> {
    pub fn new(target: N) -> Self {
        Self {
            target,
            found: false,
        }
    }

    pub fn found(&self) -> bool {
        self.found
    }
}

impl<G: GraphAccess> SearchFilter<G> for Find<G::Node> {
    fn admit(
        &mut self,
        _graph: &G,
        node: &G::Node,
        _parent: Option<&G::Node>,
    ) -> Result<bool, GraphError> {
        if self.found {
            return Ok(false);
        }
        if *node == self.target {
            self.found = true;
        }
        Ok(true)
    }
}

/// Admits nodes whose weighted tree distance from their root stays within
/// `radius`.
#[derive(Clone, Debug)]
pub struct Radius<N: NodeId> {
    radius: f64,
    depth: NodeMap<N, f64>,
}

impl<N: NodeId> Radius<N> {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            depth: node_map(),
        }
    }
}

impl<G: GraphAccess> SearchFilter<G> for Radius<G::Node> {
    fn admit(
        &mut self,
        graph: &G,
        node: &G::Node,
        parent: Option<&G::Node>,
    ) -> Result<bool, GraphError> {
        let cost = match parent {
            Some(parent) => {
                let base = self.depth.get(parent).copied().unwrap_or_default();
                base + graph.edge_weight(parent, node)?
            }
            None => 0.0,
        };
        if cost > self.radius {
            return Ok(false);
        }
        self.depth.insert(node.clone(), cost);
        Ok(true)
    }
}
