//! Weighted path search: Dijkstra single-source distances and A* point to
//! point search. Both settle nodes from a [`FrontierQueue`], so equal-cost
//! candidates are taken in the order they were discovered.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    errors::GraphError,
    frontier::FrontierQueue,
    graph::{GraphAccess, NodeId, NodeMap, SpanningTree, node_map, node_set, validate_weight},
    heuristics::Heuristic,
};

/// Single-source result; nodes unreachable from `source` appear in neither map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPaths<N: NodeId> {
    pub source: N,
    pub previous: SpanningTree<N>,
    pub distance: NodeMap<N, f64>,
}

impl<N: NodeId> ShortestPaths<N> {
    pub fn distance_to(&self, target: &N) -> Option<f64> {
        self.distance.get(target).copied()
    }

    /// Node sequence from the source to `target`, both included.
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        let mut current = self.previous.get_key_value(target)?;
        let mut path = vec![current.0.clone()];
        while let Some(parent) = current.1 {
            current = self.previous.get_key_value(parent)?;
            path.push(current.0.clone());
        }
        path.reverse();
        Some(path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPath<N> {
    pub nodes: Vec<N>,
    pub cost: f64,
}

/// Dijkstra's algorithm from `source` over outgoing edges.
#[instrument(skip_all, fields(source = ?source))]
pub fn shortest_path<G: GraphAccess>(
    graph: &G,
    source: &G::Node,
) -> Result<ShortestPaths<G::Node>, GraphError> {
    graph.ensure_node(source)?;
    let validate = graph.config().validate_weights;
    let mut distance = node_map();
    let mut previous = node_map();
    let mut settled = node_set();
    let mut queue = FrontierQueue::new();
    distance.insert(source.clone(), 0.0);
    previous.insert(source.clone(), None);
    queue.push(0.0, source.clone());

    while let Some(entry) = queue.pop() {
        let node = entry.item;
        if settled.contains(&node) {
            continue;
        }
        if distance.get(&node).is_some_and(|best| entry.cost > *best) {
            continue;
        }
        settled.insert(node.clone());
        for next in graph.neighbors(&node)? {
            if settled.contains(next) {
                continue;
            }
            let weight = graph.edge_weight(&node, next)?;
            if validate {
                validate_weight(&node, next, weight)?;
            }
            let alt = entry.cost + weight;
            if distance.get(next).is_none_or(|current| alt < *current) {
                distance.insert(next.clone(), alt);
                previous.insert(next.clone(), Some(node.clone()));
                queue.push(alt, next.clone());
            }
        }
    }
    debug!(reached = distance.len(), "shortest paths settled");
    Ok(ShortestPaths {
        source: source.clone(),
        previous,
        distance,
    })
}

/// A* search from `start` to `goal`, ranking open nodes by `g + estimate`.
///
/// The heuristic is not checked for admissibility; an overestimating one can
/// return a suboptimal path. Fails with [`GraphError::NoPathFound`] once the
/// open set is exhausted.
#[instrument(skip_all, fields(start = ?start, goal = ?goal))]
pub fn heuristic_search<G, H>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
    heuristic: &H,
) -> Result<SearchPath<G::Node>, GraphError>
where
    G: GraphAccess,
    H: Heuristic<G::Node>,
{
    graph.ensure_node(start)?;
    graph.ensure_node(goal)?;
    let validate = graph.config().validate_weights;
    let mut queue = FrontierQueue::new();
    // node -> sequence of its live queue entry
    let mut open: NodeMap<G::Node, u64> = node_map();
    let mut closed = node_set();
    let mut g_cost: NodeMap<G::Node, f64> = node_map();
    let mut parents: SpanningTree<G::Node> = node_map();

    g_cost.insert(start.clone(), 0.0);
    parents.insert(start.clone(), None);
    let sequence = queue.push(heuristic.estimate(start, goal)?, start.clone());
    open.insert(start.clone(), sequence);

    while let Some(entry) = queue.pop() {
        if open.get(&entry.item) != Some(&entry.sequence) {
            continue;
        }
        let current = entry.item;
        open.shift_remove(&current);
        let base = g_cost.get(&current).copied().unwrap_or_default();
        if &current == goal {
            let nodes = walk_back(&parents, goal);
            debug!(hops = nodes.len(), cost = base, "goal reached");
            return Ok(SearchPath { nodes, cost: base });
        }
        closed.insert(current.clone());
        for next in graph.neighbors(&current)? {
            let weight = graph.edge_weight(&current, next)?;
            if validate {
                validate_weight(&current, next, weight)?;
            }
            let cost = base + weight;
            let cheaper = g_cost.get(next).is_some_and(|known| cost < *known);
            if cheaper {
                open.shift_remove(next);
                closed.shift_remove(next);
            }
            if !open.contains_key(next) && !closed.contains(next) {
                g_cost.insert(next.clone(), cost);
                let priority = cost + heuristic.estimate(next, goal)?;
                let sequence = queue.push(priority, next.clone());
                open.insert(next.clone(), sequence);
                parents.insert(next.clone(), Some(current.clone()));
            }
        }
    }
    debug!(explored = closed.len(), "open set exhausted");
    Err(GraphError::no_path_found(format!("{start:?} -> {goal:?}")))
}

fn walk_back<N: NodeId>(parents: &SpanningTree<N>, goal: &N) -> Vec<N> {
    let mut path = vec![goal.clone()];
    let mut current = goal;
    while let Some(Some(parent)) = parents.get(current) {
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();
    path
}
