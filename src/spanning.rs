use tracing::{debug, instrument};

use crate::{
    errors::GraphError,
    frontier::FrontierQueue,
    graph::{GraphAccess, SpanningTree, node_map, validate_weight},
};

/// Prim-style minimal spanning tree.
///
/// Grows from `root` by repeatedly taking the lightest edge from a tree node
/// to a node outside the tree. With a root only that component is covered;
/// without one the forest restarts at the first uncovered node (insertion
/// order) until every node is in the tree.
#[instrument(skip_all, fields(root = ?root))]
pub fn minimal_spanning_tree<G: GraphAccess>(
    graph: &G,
    root: Option<&G::Node>,
) -> Result<SpanningTree<G::Node>, GraphError> {
    let mut tree = node_map();
    let nodes = graph.nodes();
    let mut next_root = match root {
        Some(root) => {
            graph.ensure_node(root)?;
            Some(root.clone())
        }
        None => nodes.first().cloned(),
    };
    let mut cursor = 0usize;
    let mut components = 0usize;

    while let Some(start) = next_root.take() {
        components += 1;
        tree.insert(start.clone(), None);
        let mut queue = FrontierQueue::new();
        offer_edges(graph, &start, &tree, &mut queue)?;
        while let Some(entry) = queue.pop() {
            let (parent, child) = entry.item;
            if tree.contains_key(&child) {
                continue;
            }
            tree.insert(child.clone(), Some(parent));
            offer_edges(graph, &child, &tree, &mut queue)?;
        }
        if root.is_some() {
            break;
        }
        while cursor < nodes.len() && tree.contains_key(&nodes[cursor]) {
            cursor += 1;
        }
        next_root = nodes.get(cursor).cloned();
    }
    debug!(covered = tree.len(), components, "spanning tree built");
    Ok(tree)
}

fn offer_edges<G: GraphAccess>(
    graph: &G,
    node: &G::Node,
    tree: &SpanningTree<G::Node>,
    queue: &mut FrontierQueue<(G::Node, G::Node)>,
) -> Result<(), GraphError> {
    let validate = graph.config().validate_weights;
    for next in graph.neighbors(node)? {
        if tree.contains_key(next) {
            continue;
        }
        let weight = graph.edge_weight(node, next)?;
        if validate {
            validate_weight(node, next, weight)?;
        }
        queue.push(weight, (node.clone(), next.clone()));
    }
    Ok(())
}
