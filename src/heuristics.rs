//! Cost estimates for [`crate::path::heuristic_search`].
//!
//! A heuristic is trained once with [`Heuristic::optimize`] against the graph
//! it will be searched on, then queried through [`Heuristic::estimate`].
//! Trained heuristics answer from precomputed tables only; asking before
//! training fails with [`GraphError::HeuristicNotOptimized`].

use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    errors::GraphError,
    graph::{GraphAccess, NodeId, NodeMap, find_attribute, node_map},
    path::shortest_path,
};

/// Attribute read by [`EuclideanHeuristic`].
pub const POSITION_ATTRIBUTE: &str = "position";

pub trait Heuristic<N: NodeId> {
    fn optimize<G: GraphAccess<Node = N>>(&mut self, graph: &G) -> Result<(), GraphError>;
    fn estimate(&self, from: &N, to: &N) -> Result<f64, GraphError>;
}

/// Always estimates zero, turning A* into uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<N: NodeId> Heuristic<N> for ZeroHeuristic {
    fn optimize<G: GraphAccess<Node = N>>(&mut self, _graph: &G) -> Result<(), GraphError> {
        Ok(())
    }

    fn estimate(&self, _from: &N, _to: &N) -> Result<f64, GraphError> {
        Ok(0.0)
    }
}

/// Wraps a plain function; needs no training.
#[derive(Clone, Copy, Debug)]
pub struct FnHeuristic<F>(pub F);

impl<N, F> Heuristic<N> for FnHeuristic<F>
where
    N: NodeId,
    F: Fn(&N, &N) -> f64,
{
    fn optimize<G: GraphAccess<Node = N>>(&mut self, _graph: &G) -> Result<(), GraphError> {
        Ok(())
    }

    fn estimate(&self, from: &N, to: &N) -> Result<f64, GraphError> {
        Ok((self.0)(from, to))
    }
}

/// Landmark ("Chow") heuristic.
///
/// Training runs Dijkstra from every landmark. The estimate between two nodes
/// is the largest `|d(L, a) - d(L, b)|` over landmarks that reach both; with no
/// such landmark it is zero.
#[derive(Clone, Debug)]
pub struct LandmarkHeuristic<N: NodeId> {
    landmarks: Vec<N>,
    table: Option<NodeMap<N, Vec<Option<f64>>>>,
}

impl<N: NodeId> LandmarkHeuristic<N> {
    pub fn new<I: IntoIterator<Item = N>>(landmarks: I) -> Self {
        Self {
            landmarks: landmarks.into_iter().collect(),
            table: None,
        }
    }

    pub fn landmarks(&self) -> &[N] {
        &self.landmarks
    }

    fn row(&self, node: &N) -> Result<&[Option<f64>], GraphError> {
        let table = self.table.as_ref().ok_or_else(|| {
            GraphError::heuristic_not_optimized("landmark distances have not been computed")
        })?;
        table
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::unknown_node(format!("{node:?}")))
    }
}

impl<N: NodeId> Heuristic<N> for LandmarkHeuristic<N> {
    #[instrument(skip_all, fields(landmarks = self.landmarks.len()))]
    fn optimize<G: GraphAccess<Node = N>>(&mut self, graph: &G) -> Result<(), GraphError> {
        let mut table: NodeMap<N, Vec<Option<f64>>> = node_map();
        for node in graph.nodes() {
            table.insert(node, vec![None; self.landmarks.len()]);
        }
        for (slot, landmark) in self.landmarks.iter().enumerate() {
            let paths = shortest_path(graph, landmark)?;
            for (node, distance) in paths.distance {
                if let Some(row) = table.get_mut(&node) {
                    row[slot] = Some(distance);
                }
            }
        }
        debug!(nodes = table.len(), "landmark table built");
        self.table = Some(table);
        Ok(())
    }

    fn estimate(&self, from: &N, to: &N) -> Result<f64, GraphError> {
        let a = self.row(from)?;
        let b = self.row(to)?;
        let bound = a
            .iter()
            .zip(b)
            .filter_map(|pair| match pair {
                (Some(x), Some(y)) => Some((x - y).abs()),
                _ => None,
            })
            .fold(0.0, f64::max);
        Ok(bound)
    }
}

/// Squared straight-line distance between node `position` attributes.
///
/// Every node must carry a `position` attribute holding an array of numbers,
/// all of the same length. Training caches the value for every ordered pair.
#[derive(Clone, Debug)]
pub struct EuclideanHeuristic<N: NodeId> {
    distances: Option<NodeMap<(N, N), f64>>,
}

impl<N: NodeId> Default for EuclideanHeuristic<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> EuclideanHeuristic<N> {
    pub fn new() -> Self {
        Self { distances: None }
    }
}

impl<N: NodeId> Heuristic<N> for EuclideanHeuristic<N> {
    #[instrument(skip_all)]
    fn optimize<G: GraphAccess<Node = N>>(&mut self, graph: &G) -> Result<(), GraphError> {
        let mut positions: Vec<(N, Vec<f64>)> = Vec::new();
        for node in graph.nodes() {
            let coords = position_of(&node, graph.node_attributes(&node)?)?;
            if let Some((first, expected)) = positions.first() {
                if expected.len() != coords.len() {
                    return Err(GraphError::invalid_attribute(format!(
                        "{node:?} has {} coordinates but {first:?} has {}",
                        coords.len(),
                        expected.len()
                    )));
                }
            }
            positions.push((node, coords));
        }
        let mut distances = node_map();
        for (a, pa) in &positions {
            for (b, pb) in &positions {
                let squared: f64 = pa.iter().zip(pb).map(|(x, y)| (x - y) * (x - y)).sum();
                distances.insert((a.clone(), b.clone()), squared);
            }
        }
        debug!(pairs = distances.len(), "euclidean distances cached");
        self.distances = Some(distances);
        Ok(())
    }

    fn estimate(&self, from: &N, to: &N) -> Result<f64, GraphError> {
        let distances = self.distances.as_ref().ok_or_else(|| {
            GraphError::heuristic_not_optimized("euclidean distances have not been computed")
        })?;
        distances
            .get(&(from.clone(), to.clone()))
            .copied()
            .ok_or_else(|| GraphError::unknown_node(format!("{from:?} or {to:?}")))
    }
}

fn position_of<N: NodeId>(node: &N, attrs: &[(String, Value)]) -> Result<Vec<f64>, GraphError> {
    let value = find_attribute(attrs, POSITION_ATTRIBUTE).ok_or_else(|| {
        GraphError::invalid_attribute(format!("{node:?} has no {POSITION_ATTRIBUTE} attribute"))
    })?;
    let items = value.as_array().ok_or_else(|| {
        GraphError::invalid_attribute(format!("{node:?} {POSITION_ATTRIBUTE} is not an array"))
    })?;
    items
        .iter()
        .map(|item| {
            item.as_f64().ok_or_else(|| {
                GraphError::invalid_attribute(format!(
                    "{node:?} {POSITION_ATTRIBUTE} holds a non-numeric coordinate"
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn position_of_reads_numeric_arrays() {
        let attrs = vec![
            ("color".to_string(), json!("red")),
            (POSITION_ATTRIBUTE.to_string(), json!([1, 2.5])),
        ];
        assert_eq!(position_of(&"a", &attrs).unwrap(), vec![1.0, 2.5]);
    }

    #[test]
    fn position_of_rejects_missing_or_malformed_values() {
        let missing: Vec<(String, Value)> = Vec::new();
        assert!(matches!(
            position_of(&"a", &missing),
            Err(GraphError::InvalidAttribute(_))
        ));
        let malformed = vec![(POSITION_ATTRIBUTE.to_string(), json!(["x", 1]))];
        assert!(matches!(
            position_of(&"a", &malformed),
            Err(GraphError::InvalidAttribute(_))
        ));
    }
}
