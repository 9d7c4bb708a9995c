//! Depth-first and breadth-first exploration.
//!
//! Every traversal records a spanning tree (child to parent, `None` for each
//! root) plus the visitation order. Without a root the whole graph is covered
//! as a forest, starting new trees at unvisited nodes in insertion order.
//! The `_filtered` variants consult a [`SearchFilter`] before attaching a node.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    errors::GraphError,
    filters::{NullFilter, SearchFilter},
    frontier::FrontierQueue,
    graph::{
        GraphAccess, NodeId, NodeMap, NodeSet, SpanningTree, node_map, node_set, validate_weight,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthFirst<N: NodeId> {
    pub spanning_tree: SpanningTree<N>,
    pub preorder: Vec<N>,
    pub postorder: Vec<N>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreadthFirst<N: NodeId> {
    pub spanning_tree: SpanningTree<N>,
    /// Level-based visitation order.
    pub ordering: Vec<N>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    Pre,
    Post,
}

pub fn depth_first_search<G: GraphAccess>(
    graph: &G,
    root: Option<&G::Node>,
) -> Result<DepthFirst<G::Node>, GraphError> {
    depth_first_search_filtered(graph, root, NullFilter)
}

/// Depth-first search that only grows the tree through nodes `filter` admits.
#[instrument(skip_all, fields(root = ?root))]
pub fn depth_first_search_filtered<G, F>(
    graph: &G,
    root: Option<&G::Node>,
    mut filter: F,
) -> Result<DepthFirst<G::Node>, GraphError>
where
    G: GraphAccess,
    F: SearchFilter<G>,
{
    let mut result = DepthFirst {
        spanning_tree: node_map(),
        preorder: Vec::new(),
        postorder: Vec::new(),
    };
    match root {
        Some(root) => {
            graph.ensure_node(root)?;
            if filter.admit(graph, root, None)? {
                descend(graph, root, &mut filter, &mut result)?;
            }
        }
        None => {
            for node in graph.nodes() {
                if !result.spanning_tree.contains_key(&node) && filter.admit(graph, &node, None)? {
                    descend(graph, &node, &mut filter, &mut result)?;
                }
            }
        }
    }
    Ok(result)
}

fn descend<G: GraphAccess, F: SearchFilter<G>>(
    graph: &G,
    root: &G::Node,
    filter: &mut F,
    result: &mut DepthFirst<G::Node>,
) -> Result<(), GraphError> {
    result.spanning_tree.insert(root.clone(), None);
    result.preorder.push(root.clone());
    let mut stack = vec![(root.clone(), 0usize)];
    while let Some(frame) = stack.last_mut() {
        let neighbors = graph.neighbors(&frame.0)?;
        match neighbors.get(frame.1) {
            Some(next) => {
                frame.1 += 1;
                if !result.spanning_tree.contains_key(next)
                    && filter.admit(graph, next, Some(&frame.0))?
                {
                    result
                        .spanning_tree
                        .insert(next.clone(), Some(frame.0.clone()));
                    result.preorder.push(next.clone());
                    stack.push((next.clone(), 0));
                }
            }
            None => {
                if let Some((done, _)) = stack.pop() {
                    result.postorder.push(done);
                }
            }
        }
    }
    Ok(())
}

pub fn breadth_first_search<G: GraphAccess>(
    graph: &G,
    root: Option<&G::Node>,
) -> Result<BreadthFirst<G::Node>, GraphError> {
    breadth_first_search_filtered(graph, root, NullFilter)
}

/// Breadth-first search that only grows the tree through nodes `filter` admits.
#[instrument(skip_all, fields(root = ?root))]
pub fn breadth_first_search_filtered<G, F>(
    graph: &G,
    root: Option<&G::Node>,
    mut filter: F,
) -> Result<BreadthFirst<G::Node>, GraphError>
where
    G: GraphAccess,
    F: SearchFilter<G>,
{
    let mut result = BreadthFirst {
        spanning_tree: node_map(),
        ordering: Vec::new(),
    };
    match root {
        Some(root) => {
            graph.ensure_node(root)?;
            if filter.admit(graph, root, None)? {
                sweep(graph, root, &mut filter, &mut result)?;
            }
        }
        None => {
            for node in graph.nodes() {
                if !result.spanning_tree.contains_key(&node) && filter.admit(graph, &node, None)? {
                    sweep(graph, &node, &mut filter, &mut result)?;
                }
            }
        }
    }
    Ok(result)
}

fn sweep<G: GraphAccess, F: SearchFilter<G>>(
    graph: &G,
    root: &G::Node,
    filter: &mut F,
    result: &mut BreadthFirst<G::Node>,
) -> Result<(), GraphError> {
    let mut queue = VecDeque::new();
    queue.push_back(root.clone());
    result.ordering.push(root.clone());
    result.spanning_tree.insert(root.clone(), None);
    while let Some(node) = queue.pop_front() {
        for next in graph.neighbors(&node)? {
            if !result.spanning_tree.contains_key(next) && filter.admit(graph, next, Some(&node))? {
                result.spanning_tree.insert(next.clone(), Some(node.clone()));
                result.ordering.push(next.clone());
                queue.push_back(next.clone());
            }
        }
    }
    Ok(())
}

/// Lazily walks the depth-first ordering of `root`'s component.
pub fn traversal<'g, G: GraphAccess>(
    graph: &'g G,
    root: &G::Node,
    order: Order,
) -> Result<Traversal<'g, G>, GraphError> {
    graph.ensure_node(root)?;
    let mut visited = node_set();
    visited.insert(root.clone());
    Ok(Traversal {
        graph,
        order,
        visited,
        stack: vec![(root.clone(), 0)],
        announce: Some(root.clone()),
    })
}

pub struct Traversal<'g, G: GraphAccess> {
    graph: &'g G,
    order: Order,
    visited: NodeSet<G::Node>,
    stack: Vec<(G::Node, usize)>,
    announce: Option<G::Node>,
}

impl<G: GraphAccess> Iterator for Traversal<'_, G> {
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        if self.order == Order::Pre {
            if let Some(root) = self.announce.take() {
                return Some(root);
            }
        }
        while let Some(frame) = self.stack.last_mut() {
            let neighbors = self.graph.neighbors(&frame.0).unwrap_or(&[]);
            match neighbors.get(frame.1) {
                Some(next) => {
                    frame.1 += 1;
                    if self.visited.insert(next.clone()) {
                        self.stack.push((next.clone(), 0));
                        if self.order == Order::Pre {
                            return Some(next.clone());
                        }
                    }
                }
                None => {
                    let (done, _) = self.stack.pop()?;
                    if self.order == Order::Post {
                        return Some(done);
                    }
                }
            }
        }
        None
    }
}

/// Cost-ordered exploration from `root`, yielding `(cost, node)` pairs.
///
/// `filter(cost, node)` is asked once per node, on first discovery; the root
/// is checked at cost zero. A rejected node is never yielded nor expanded, but
/// nodes behind it are still reached through any other admitted path. Queued
/// nodes are re-prioritized when a cheaper path turns up, so yielded costs are
/// the cheapest through admitted nodes and never decrease.
#[instrument(skip_all, fields(root = ?root))]
pub fn filtered_breadth_first_search<'g, G, F>(
    graph: &'g G,
    root: &G::Node,
    mut filter: F,
) -> Result<FilteredBreadthFirst<'g, G, F>, GraphError>
where
    G: GraphAccess,
    F: FnMut(f64, &G::Node) -> bool,
{
    graph.ensure_node(root)?;
    let mut queue = FrontierQueue::new();
    let mut queued = node_map();
    let mut visited = node_set();
    if filter(0.0, root) {
        queued.insert(root.clone(), 0.0);
        queue.push(0.0, root.clone());
    } else {
        visited.insert(root.clone());
    }
    Ok(FilteredBreadthFirst {
        graph,
        queue,
        queued,
        visited,
        filter,
    })
}

pub struct FilteredBreadthFirst<'g, G: GraphAccess, F> {
    graph: &'g G,
    queue: FrontierQueue<G::Node>,
    queued: NodeMap<G::Node, f64>,
    visited: NodeSet<G::Node>,
    filter: F,
}

impl<G, F> FilteredBreadthFirst<'_, G, F>
where
    G: GraphAccess,
    F: FnMut(f64, &G::Node) -> bool,
{
    fn expand(&mut self, node: &G::Node, cost: f64) -> Result<(), GraphError> {
        let validate = self.graph.config().validate_weights;
        for next in self.graph.neighbors(node)? {
            if self.visited.contains(next) {
                continue;
            }
            let weight = self.graph.edge_weight(node, next)?;
            if validate {
                validate_weight(node, next, weight)?;
            }
            let next_cost = cost + weight;
            match self.queued.get(next).copied() {
                Some(best) => {
                    if next_cost < best {
                        self.queued.insert(next.clone(), next_cost);
                        self.queue.push(next_cost, next.clone());
                    }
                }
                None => {
                    if (self.filter)(next_cost, next) {
                        self.queued.insert(next.clone(), next_cost);
                        self.queue.push(next_cost, next.clone());
                    } else {
                        self.visited.insert(next.clone());
                    }
                }
            }
        }
        Ok(())
    }
}

impl<G, F> Iterator for FilteredBreadthFirst<'_, G, F>
where
    G: GraphAccess,
    F: FnMut(f64, &G::Node) -> bool,
{
    type Item = Result<(f64, G::Node), GraphError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = self.queue.pop()?;
            let (cost, node) = (entry.cost, entry.item);
            if self.visited.contains(&node) {
                continue;
            }
            if self.queued.get(&node).is_some_and(|best| *best < cost) {
                continue;
            }
            self.queued.shift_remove(&node);
            self.visited.insert(node.clone());
            if let Err(err) = self.expand(&node, cost) {
                self.queue.clear();
                return Some(Err(err));
            }
            return Some(Ok((cost, node)));
        }
    }
}
