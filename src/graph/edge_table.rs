//! Edge property and attribute bookkeeping shared by [`super::Graph`] and
//! [`super::Digraph`].
//!
//! A symmetric table mirrors every record under both `(u, v)` and `(v, u)`, so
//! an undirected edge always reports the same weight, label and attributes
//! whichever orientation the caller asks about.

use serde_json::Value;

use super::types::{Attribute, EdgeProperty, NodeId, NodeMap, describe_edge, node_map};
use crate::errors::GraphError;

#[derive(Debug, Clone)]
pub(crate) struct EdgeTable<N: NodeId> {
    symmetric: bool,
    properties: NodeMap<(N, N), EdgeProperty>,
    attributes: NodeMap<(N, N), Vec<Attribute>>,
}

impl<N: NodeId> EdgeTable<N> {
    pub(crate) fn new(symmetric: bool) -> Self {
        Self {
            symmetric,
            properties: node_map(),
            attributes: node_map(),
        }
    }

    pub(crate) fn contains(&self, u: &N, v: &N) -> bool {
        self.properties.contains_key(&(u.clone(), v.clone()))
    }

    pub(crate) fn insert(&mut self, u: &N, v: &N, property: EdgeProperty) {
        self.properties
            .insert((u.clone(), v.clone()), property.clone());
        self.attributes.insert((u.clone(), v.clone()), Vec::new());
        if self.symmetric && u != v {
            self.properties.insert((v.clone(), u.clone()), property);
            self.attributes.insert((v.clone(), u.clone()), Vec::new());
        }
    }

    pub(crate) fn remove(&mut self, u: &N, v: &N) -> Option<EdgeProperty> {
        let removed = self.properties.shift_remove(&(u.clone(), v.clone()));
        self.attributes.shift_remove(&(u.clone(), v.clone()));
        if self.symmetric && u != v {
            self.properties.shift_remove(&(v.clone(), u.clone()));
            self.attributes.shift_remove(&(v.clone(), u.clone()));
        }
        removed
    }

    pub(crate) fn get(&self, u: &N, v: &N) -> Result<&EdgeProperty, GraphError> {
        self.properties
            .get(&(u.clone(), v.clone()))
            .ok_or_else(|| GraphError::unknown_edge(describe_edge(u, v)))
    }

    pub(crate) fn set_weight(&mut self, u: &N, v: &N, weight: f64) -> Result<(), GraphError> {
        self.update(u, v, |property| property.weight = weight)
    }

    pub(crate) fn set_label(&mut self, u: &N, v: &N, label: &str) -> Result<(), GraphError> {
        self.update(u, v, |property| property.label = label.to_string())
    }

    pub(crate) fn attributes(&self, u: &N, v: &N) -> Result<&[Attribute], GraphError> {
        self.attributes
            .get(&(u.clone(), v.clone()))
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::unknown_edge(describe_edge(u, v)))
    }

    pub(crate) fn add_attribute(
        &mut self,
        u: &N,
        v: &N,
        name: &str,
        value: Value,
    ) -> Result<(), GraphError> {
        if !self.contains(u, v) {
            return Err(GraphError::unknown_edge(describe_edge(u, v)));
        }
        if self.symmetric && u != v {
            if let Some(mirror) = self.attributes.get_mut(&(v.clone(), u.clone())) {
                mirror.push((name.to_string(), value.clone()));
            }
        }
        if let Some(attrs) = self.attributes.get_mut(&(u.clone(), v.clone())) {
            attrs.push((name.to_string(), value));
        }
        Ok(())
    }

    /// Overwrites the attribute list of an existing edge; no-op otherwise.
    pub(crate) fn replace_attributes(&mut self, u: &N, v: &N, attrs: Vec<Attribute>) {
        if self.symmetric && u != v {
            if let Some(mirror) = self.attributes.get_mut(&(v.clone(), u.clone())) {
                mirror.clone_from(&attrs);
            }
        }
        if let Some(slot) = self.attributes.get_mut(&(u.clone(), v.clone())) {
            *slot = attrs;
        }
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &(N, N)> + '_ {
        self.properties.keys()
    }

    pub(crate) fn len(&self) -> usize {
        self.properties.len()
    }

    fn update<F>(&mut self, u: &N, v: &N, apply: F) -> Result<(), GraphError>
    where
        F: Fn(&mut EdgeProperty),
    {
        let forward = self
            .properties
            .get_mut(&(u.clone(), v.clone()))
            .ok_or_else(|| GraphError::unknown_edge(describe_edge(u, v)))?;
        apply(forward);
        if self.symmetric && u != v {
            if let Some(backward) = self.properties.get_mut(&(v.clone(), u.clone())) {
                apply(backward);
            }
        }
        Ok(())
    }
}
