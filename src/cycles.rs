use tracing::{debug, instrument};

use crate::{
    errors::GraphError,
    graph::{GraphAccess, NodeId, NodeSet, SpanningTree, node_map, node_set},
};

/// First cycle met by a depth-first sweep, or an empty vector when acyclic.
///
/// The cycle is listed from the ancestor closing it down to the node whose
/// edge closed it. In a digraph any edge back to an ancestor counts; in a
/// graph the edge leading back to the immediate parent does not.
#[instrument(skip_all, fields(directed = graph.is_directed()))]
pub fn find_cycle<G: GraphAccess>(graph: &G) -> Result<Vec<G::Node>, GraphError> {
    let mut visited = node_set();
    let mut tree = node_map();
    for root in graph.nodes() {
        if visited.contains(&root) {
            continue;
        }
        tree.insert(root.clone(), None);
        if let Some(cycle) = seek_cycle(graph, &root, &mut visited, &mut tree)? {
            debug!(length = cycle.len(), "cycle found");
            return Ok(cycle);
        }
    }
    Ok(Vec::new())
}

fn seek_cycle<G: GraphAccess>(
    graph: &G,
    root: &G::Node,
    visited: &mut NodeSet<G::Node>,
    tree: &mut SpanningTree<G::Node>,
) -> Result<Option<Vec<G::Node>>, GraphError> {
    let directed = graph.is_directed();
    visited.insert(root.clone());
    let mut stack = vec![(root.clone(), 0usize)];
    while let Some(frame) = stack.last_mut() {
        let neighbors = graph.neighbors(&frame.0)?;
        let Some(next) = neighbors.get(frame.1) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;
        if visited.insert(next.clone()) {
            tree.insert(next.clone(), Some(frame.0.clone()));
            stack.push((next.clone(), 0));
            continue;
        }
        let parent = tree.get(&frame.0).and_then(Option::as_ref);
        if directed || parent != Some(next) {
            let cycle = cycle_to_ancestor(tree, &frame.0, next);
            if !cycle.is_empty() {
                return Ok(Some(cycle));
            }
        }
    }
    Ok(None)
}

/// Walks parent pointers from `node` up to `ancestor`; empty when `ancestor`
/// is not on that chain (cross and forward edges).
fn cycle_to_ancestor<N: NodeId>(tree: &SpanningTree<N>, node: &N, ancestor: &N) -> Vec<N> {
    let mut path = Vec::new();
    let mut current = node;
    while current != ancestor {
        path.push(current.clone());
        match tree.get(current) {
            Some(Some(parent)) => current = parent,
            _ => return Vec::new(),
        }
    }
    path.push(ancestor.clone());
    path.reverse();
    path
}
