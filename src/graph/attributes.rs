use serde_json::Value;

use super::types::{Attribute, NodeId, NodeMap, node_map};
use crate::errors::GraphError;

/// Per-node `(name, value)` records, kept in the order they were added.
#[derive(Debug, Clone)]
pub(crate) struct NodeAttributes<N: NodeId> {
    records: NodeMap<N, Vec<Attribute>>,
}

impl<N: NodeId> NodeAttributes<N> {
    pub(crate) fn new() -> Self {
        Self {
            records: node_map(),
        }
    }

    pub(crate) fn register(&mut self, node: &N, attrs: Vec<Attribute>) {
        self.records.insert(node.clone(), attrs);
    }

    pub(crate) fn forget(&mut self, node: &N) {
        self.records.shift_remove(node);
    }

    pub(crate) fn get(&self, node: &N) -> Result<&[Attribute], GraphError> {
        self.records
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::unknown_node(format!("{node:?}")))
    }

    pub(crate) fn push(&mut self, node: &N, name: &str, value: Value) -> Result<(), GraphError> {
        let attrs = self
            .records
            .get_mut(node)
            .ok_or_else(|| GraphError::unknown_node(format!("{node:?}")))?;
        attrs.push((name.to_string(), value));
        Ok(())
    }
}

/// First value recorded under `name`, if any.
pub fn find_attribute<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Value> {
    attrs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}
