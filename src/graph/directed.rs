use serde_json::Value;
use tracing::{debug, trace};

use super::{
    access::GraphAccess,
    attributes::NodeAttributes,
    edge_table::EdgeTable,
    types::{
        Attribute, EdgeProperty, NodeId, NodeMap, SpanningTree, describe_edge, node_map, node_set,
    },
    undirected::remove_first,
};
use crate::{config::GraphConfig, errors::GraphError};

/// Directed graph keeping successor and predecessor lists side by side.
///
/// An edge `(u, v)` appends `v` to the successors of `u` and `u` to the
/// predecessors of `v`; `(v, u)` is an unrelated edge with its own weight and label.
#[derive(Debug, Clone)]
pub struct Digraph<N: NodeId> {
    successors: NodeMap<N, Vec<N>>,
    predecessors: NodeMap<N, Vec<N>>,
    edges: EdgeTable<N>,
    attributes: NodeAttributes<N>,
    config: GraphConfig,
}

impl<N: NodeId> Default for Digraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> Digraph<N> {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            successors: node_map(),
            predecessors: node_map(),
            edges: EdgeTable::new(false),
            attributes: NodeAttributes::new(),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    pub fn nodes(&self) -> Vec<N> {
        self.successors.keys().cloned().collect()
    }

    pub fn edges(&self) -> Vec<(N, N)> {
        self.edges.keys().cloned().collect()
    }

    pub fn has_node(&self, node: &N) -> bool {
        self.successors.contains_key(node)
    }

    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        self.edges.contains(u, v)
    }

    /// Nodes reachable from `node` through one outgoing edge.
    pub fn neighbors(&self, node: &N) -> Result<&[N], GraphError> {
        self.successors
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::unknown_node(format!("{node:?}")))
    }

    /// Nodes with an edge pointing at `node`.
    pub fn incidents(&self, node: &N) -> Result<&[N], GraphError> {
        self.predecessors
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
        self.register(&node, attrs);
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
            self.register(node, Vec::new());
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
        for node in [&u, &v] {
            if !self.has_node(node) {
                return Err(GraphError::unknown_node(format!("{node:?}")));
            }
        }
        if self.has_edge(&u, &v) {
            return Err(GraphError::duplicate_edge(describe_edge(&u, &v)));
        }
        trace!(u = ?u, v = ?v, weight, "adding arc");
        self.link(u, v, EdgeProperty::new(weight, label));
        Ok(())
    }

    /// Adds `(u, v)` with the configured default weight and an empty label.
    pub fn add_default_edge(&mut self, u: N, v: N) -> Result<(), GraphError> {
        let weight = self.config.default_weight;
        self.add_edge(u, v, weight, "")
    }

    /// Removes `node` with every edge entering or leaving it.
    pub fn del_node(&mut self, node: &N) -> Result<(), GraphError> {
        let incoming = self.incidents(node)?.to_vec();
        let outgoing = self.neighbors(node)?.to_vec();
        trace!(
            node = ?node,
            incoming = incoming.len(),
            outgoing = outgoing.len(),
            "removing node"
        );
        for pred in &incoming {
            if pred != node {
                if let Some(list) = self.successors.get_mut(pred) {
                    remove_first(list, node);
                }
            }
            self.edges.remove(pred, node);
        }
        for succ in &outgoing {
            if succ != node {
                if let Some(list) = self.predecessors.get_mut(succ) {
                    remove_first(list, node);
                }
            }
            self.edges.remove(node, succ);
        }
        self.successors.shift_remove(node);
        self.predecessors.shift_remove(node);
        self.attributes.forget(node);
        Ok(())
    }

    pub fn del_edge(&mut self, u: &N, v: &N) -> Result<(), GraphError> {
        if !self.has_edge(u, v) {
            return Err(GraphError::unknown_edge(describe_edge(u, v)));
        }
        trace!(u = ?u, v = ?v, "removing arc");
        if let Some(list) = self.successors.get_mut(u) {
            remove_first(list, v);
        }
        if let Some(list) = self.predecessors.get_mut(v) {
            remove_first(list, u);
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

    /// Adds both orientations between every pair of distinct nodes.
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
        debug!(nodes = nodes.len(), added, "completed digraph");
    }

    /// Complement digraph over the same nodes; self-loops are never added.
    pub fn inverse(&self) -> Digraph<N> {
        let mut inverse = Digraph::with_config(self.config.clone());
        let nodes = self.nodes();
        for node in &nodes {
            inverse.register(node, Vec::new());
        }
        let weight = self.config.default_weight;
        for u in &nodes {
            for v in &nodes {
                if u != v && !self.has_edge(u, v) {
                    inverse.link(u.clone(), v.clone(), EdgeProperty::new(weight, ""));
                }
            }
        }
        inverse
    }

    /// Same nodes and attributes with every edge pointing the other way.
    pub fn reverse(&self) -> Digraph<N> {
        let mut reversed = Digraph::with_config(self.config.clone());
        for node in self.successors.keys() {
            let attrs = self
                .attributes
                .get(node)
                .map(<[Attribute]>::to_vec)
                .unwrap_or_default();
            reversed.register(node, attrs);
        }
        for (u, v) in self.edges.keys() {
            if let Ok(property) = self.edges.get(u, v) {
                reversed.link(v.clone(), u.clone(), property.clone());
            }
            if let Ok(attrs) = self.edges.attributes(u, v) {
                reversed.edges.replace_attributes(v, u, attrs.to_vec());
            }
        }
        debug!(edges = self.edges.len(), "reversed digraph");
        reversed
    }

    /// Merges `other` into this digraph, keeping existing nodes and edges untouched.
    pub fn add_graph(&mut self, other: &Digraph<N>) {
        for node in other.successors.keys() {
            if !self.has_node(node) {
                self.register(node, Vec::new());
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

    /// Materializes a parent map as `(parent, child)` arcs.
    pub fn add_spanning_tree(&mut self, tree: &SpanningTree<N>) {
        let weight = self.config.default_weight;
        for (child, parent) in tree {
            for node in std::iter::once(child).chain(parent.as_ref()) {
                if !self.has_node(node) {
                    self.register(node, Vec::new());
                }
            }
            if let Some(parent) = parent {
                if !self.has_edge(parent, child) {
                    self.link(parent.clone(), child.clone(), EdgeProperty::new(weight, ""));
                }
            }
        }
    }

    fn register(&mut self, node: &N, attrs: Vec<Attribute>) {
        self.attributes.register(node, attrs);
        self.successors.insert(node.clone(), Vec::new());
        self.predecessors.insert(node.clone(), Vec::new());
    }

    fn link(&mut self, u: N, v: N, property: EdgeProperty) {
        self.edges.insert(&u, &v, property);
        if let Some(list) = self.predecessors.get_mut(&v) {
            list.push(u.clone());
        }
        if let Some(list) = self.successors.get_mut(&u) {
            list.push(v);
        }
    }
}

impl<N: NodeId> GraphAccess for Digraph<N> {
    type Node = N;

    fn is_directed(&self) -> bool {
        true
    }

    fn nodes(&self) -> Vec<N> {
        Digraph::nodes(self)
    }

    fn has_node(&self, node: &N) -> bool {
        Digraph::has_node(self, node)
    }

    fn neighbors(&self, node: &N) -> Result<&[N], GraphError> {
        Digraph::neighbors(self, node)
    }

    fn incidents(&self, node: &N) -> Result<&[N], GraphError> {
        Digraph::incidents(self, node)
    }

    fn edge_weight(&self, u: &N, v: &N) -> Result<f64, GraphError> {
        Digraph::edge_weight(self, u, v)
    }

    fn node_attributes(&self, node: &N) -> Result<&[Attribute], GraphError> {
        Digraph::node_attributes(self, node)
    }

    fn config(&self) -> &GraphConfig {
        Digraph::config(self)
    }
}
