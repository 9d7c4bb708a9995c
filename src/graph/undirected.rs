use serde_json::Value;
use tracing::{debug, trace};

use super::{
    access::GraphAccess,
    attributes::NodeAttributes,
    edge_table::EdgeTable,
    types::{
        Attribute, EdgeProperty, NodeId, NodeMap, SpanningTree, describe_edge, node_map, node_set,
    },
};
use crate::{config::GraphConfig, errors::GraphError};

/// Undirected graph backed by adjacency lists.
///
/// An edge `(u, v)` lists `v` among the neighbors of `u` and `u` among the
/// neighbors of `v`; both orientations share one weight and label. A self-loop
/// lists the node once in its own adjacency.
#[derive(Debug, Clone)]
pub struct Graph<N: NodeId> {
    adjacency: NodeMap<N, Vec<N>>,
    edges: EdgeTable<N>,
    attributes: NodeAttributes<N>,
    config: GraphConfig,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> Graph<N> {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            adjacency: node_map(),
            edges: EdgeTable::new(true),
            attributes: NodeAttributes::new(),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn nodes(&self) -> Vec<N> {
        self.adjacency.keys().cloned().collect()
    }

    /// Every edge in both orientations, in insertion order.
    pub fn edges(&self) -> Vec<(N, N)> {
        self.edges.keys().cloned().collect()
    }

    pub fn has_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        self.edges.contains(u, v)
    }

    pub fn neighbors(&self, node: &N) -> Result<&[N], GraphError> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::unknown_node(format!("{node:?}")))
    }

    pub fn node_order(&self, node: &N) -> Result<usize, GraphError> {
        Ok(self.neighbors(node)?.len())
    }

    pub fn add_node(&mut self, node: N) -> Result<(), GraphError> {
        self.add_node_with_attributes(node, Vec::new())
    }

    pub fn add_node_with_attributes(
        &mut self,
        node: N,
        attrs: Vec<Attribute>,
    ) -> Result<(), GraphError> {
        if self.has_node(&node) {
            return Err(GraphError::duplicate_node(format!("{node:?}")));
        }
        trace!(node = ?node, "adding node");
        self.attributes.register(&node, attrs);
        self.adjacency.insert(node, Vec::new());
        Ok(())
    }

    /// Adds every node or none of them.
    pub fn add_nodes<I>(&mut self, nodes: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = N>,
    {
        let mut pending = node_set();
        for node in nodes {
            if self.has_node(&node) || pending.contains(&node) {
                return Err(GraphError::duplicate_node(format!("{node:?}")));
            }
            pending.insert(node);
        }
        for node in &pending {
            self.attributes.register(node, Vec::new());
            self.adjacency.insert(node.clone(), Vec::new());
        }
        Ok(())
    }

    pub fn add_edge<L: Into<String>>(
        &mut self,
        u: N,
        v: N,
        weight: f64,
        label: L,
    ) -> Result<(), GraphError> {
        self.require_node(&u)?;
        self.require_node(&v)?;
        if self.has_edge(&u, &v) {
            return Err(GraphError::duplicate_edge(describe_edge(&u, &v)));
        }
        trace!(u = ?u, v = ?v, weight, "adding edge");
        self.link(u, v, EdgeProperty::new(weight, label));
        Ok(())
    }

    /// Adds `(u, v)` with the configured default weight and an empty label.
    pub fn add_default_edge(&mut self, u: N, v: N) -> Result<(), GraphError> {
        let weight = self.config.default_weight;
        self.add_edge(u, v, weight, "")
    }

    pub fn del_node(&mut self, node: &N) -> Result<(), GraphError> {
        let neighbors = self.neighbors(node)?.to_vec();
        trace!(node = ?node, degree = neighbors.len(), "removing node");
        for other in &neighbors {
            if other != node {
                if let Some(list) = self.adjacency.get_mut(other) {
                    remove_first(list, node);
                }
            }
            self.edges.remove(node, other);
        }
        self.adjacency.shift_remove(node);
        self.attributes.forget(node);
        Ok(())
    }

    pub fn del_edge(&mut self, u: &N, v: &N) -> Result<(), GraphError> {
        if !self.has_edge(u, v) {
            return Err(GraphError::unknown_edge(describe_edge(u, v)));
        }
        trace!(u = ?u, v = ?v, "removing edge");
        if let Some(list) = self.adjacency.get_mut(u) {
            remove_first(list, v);
        }
        if u != v {
            if let Some(list) = self.adjacency.get_mut(v) {
                remove_first(list, u);
            }
        }
        self.edges.remove(u, v);
        Ok(())
    }

    pub fn edge_property(&self, u: &N, v: &N) -> Result<&EdgeProperty, GraphError> {
        self.edges.get(u, v)
    }

    pub fn edge_weight(&self, u: &N, v: &N) -> Result<f64, GraphError> {
        Ok(self.edges.get(u, v)?.weight)
    }

    pub fn set_edge_weight(&mut self, u: &N, v: &N, weight: f64) -> Result<(), GraphError> {
        self.edges.set_weight(u, v, weight)
    }

    pub fn edge_label(&self, u: &N, v: &N) -> Result<&str, GraphError> {
        Ok(self.edges.get(u, v)?.label.as_str())
    }

    pub fn set_edge_label(&mut self, u: &N, v: &N, label: &str) -> Result<(), GraphError> {
        self.edges.set_label(u, v, label)
    }

    pub fn node_attributes(&self, node: &N) -> Result<&[Attribute], GraphError> {
        self.attributes.get(node)
    }

    pub fn add_node_attribute(
        &mut self,
        node: &N,
        name: &str,
        value: Value,
    ) -> Result<(), GraphError> {
        self.attributes.push(node, name, value)
    }

    pub fn edge_attributes(&self, u: &N, v: &N) -> Result<&[Attribute], GraphError> {
        self.edges.attributes(u, v)
    }

    pub fn add_edge_attribute(
        &mut self,
        u: &N,
        v: &N,
        name: &str,
        value: Value,
    ) -> Result<(), GraphError> {
        self.edges.add_attribute(u, v, name, value)
    }

    /// Connects every pair of distinct nodes not already connected.
    pub fn complete(&mut self) {
        let nodes = self.nodes();
        let weight = self.config.default_weight;
        let mut added = 0usize;
        for u in &nodes {
            for v in &nodes {
                if u != v && !self.has_edge(u, v) {
                    self.link(u.clone(), v.clone(), EdgeProperty::new(weight, ""));
                    added += 1;
                }
            }
        }
        debug!(nodes = nodes.len(), added, "completed graph");
    }

    /// Complement graph: same nodes, an edge wherever this graph has none.
    pub fn inverse(&self) -> Graph<N> {
        let mut inverse = Graph::with_config(self.config.clone());
        let nodes = self.nodes();
        for node in &nodes {
            inverse.attributes.register(node, Vec::new());
            inverse.adjacency.insert(node.clone(), Vec::new());
        }
        let weight = self.config.default_weight;
        for u in &nodes {
            for v in &nodes {
                if u != v && !self.has_edge(u, v) && !inverse.has_edge(u, v) {
                    inverse.link(u.clone(), v.clone(), EdgeProperty::new(weight, ""));
                }
            }
        }
        inverse
    }

    /// Merges `other` into this graph, keeping existing nodes and edges untouched.
    pub fn add_graph(&mut self, other: &Graph<N>) {
        for node in other.adjacency.keys() {
            if !self.has_node(node) {
                self.attributes.register(node, Vec::new());
                self.adjacency.insert(node.clone(), Vec::new());
            }
        }
        for (u, v) in other.edges.keys() {
            if !self.has_edge(u, v) {
                if let Ok(property) = other.edges.get(u, v) {
                    self.link(u.clone(), v.clone(), property.clone());
                }
            }
        }
    }

    /// Materializes a parent map as `(parent, child)` edges.
    pub fn add_spanning_tree(&mut self, tree: &SpanningTree<N>) {
        let weight = self.config.default_weight;
        for (child, parent) in tree {
            for node in std::iter::once(child).chain(parent.as_ref()) {
                if !self.has_node(node) {
                    self.attributes.register(node, Vec::new());
                    self.adjacency.insert(node.clone(), Vec::new());
                }
            }
            if let Some(parent) = parent {
                if !self.has_edge(parent, child) {
                    self.link(parent.clone(), child.clone(), EdgeProperty::new(weight, ""));
                }
            }
        }
    }

    fn require_node(&self, node: &N) -> Result<(), GraphError> {
        if self.has_node(node) {
            Ok(())
        } else {
            Err(GraphError::unknown_node(format!("{node:?}")))
        }
    }

    fn link(&mut self, u: N, v: N, property: EdgeProperty) {
        self.edges.insert(&u, &v, property);
        if u != v {
            if let Some(list) = self.adjacency.get_mut(&v) {
                list.push(u.clone());
            }
        }
        if let Some(list) = self.adjacency.get_mut(&u) {
            list.push(v);
        }
    }
}

impl<N: NodeId> GraphAccess for Graph<N> {
    type Node = N;

    fn is_directed(&self) -> bool {
        false
    }

    fn nodes(&self) -> Vec<N> {
        Graph::nodes(self)
    }

    fn has_node(&self, node: &N) -> bool {
        Graph::has_node(self, node)
    }

    fn neighbors(&self, node: &N) -> Result<&[N], GraphError> {
        Graph::neighbors(self, node)
    }

    fn edge_weight(&self, u: &N, v: &N) -> Result<f64, GraphError> {
        Graph::edge_weight(self, u, v)
    }

    fn node_attributes(&self, node: &N) -> Result<&[Attribute], GraphError> {
        Graph::node_attributes(self, node)
    }

    fn config(&self) -> &GraphConfig {
        Graph::config(self)
    }
}

pub(crate) fn remove_first<N: PartialEq>(list: &mut Vec<N>, target: &N) {
    if let Some(pos) = list.iter().position(|item| item == target) {
        list.remove(pos);
    }
}
