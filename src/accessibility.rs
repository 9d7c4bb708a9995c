use std::collections::VecDeque;

use tracing::instrument;

use crate::{
    errors::GraphError,
    graph::{GraphAccess, NodeMap, NodeSet, node_map, node_set},
    traversal::depth_first_search,
};

/// Component number (starting at 1) for every node.
///
/// Digraph edges are followed both ways, so this yields weak components.
#[instrument(skip_all)]
pub fn connected_components<G: GraphAccess>(
    graph: &G,
) -> Result<NodeMap<G::Node, usize>, GraphError> {
    let mut components = node_map();
    let mut current = 0usize;
    for id in graph.nodes() {
        if components.contains_key(&id) {
            continue;
        }
        current += 1;
        components.insert(id.clone(), current);
        let mut queue = VecDeque::new();
        queue.push_back(id);
        while let Some(node) = queue.pop_front() {
            let outgoing = graph.neighbors(&node)?;
            let incoming: &[G::Node] = if graph.is_directed() {
                graph.incidents(&node)?
            } else {
                &[]
            };
            for next in outgoing.iter().chain(incoming) {
                if !components.contains_key(next) {
                    components.insert(next.clone(), current);
                    queue.push_back(next.clone());
                }
            }
        }
    }
    Ok(components)
}

/// Nodes reachable from each node (itself first), in depth-first preorder.
#[instrument(skip_all)]
pub fn accessibility<G: GraphAccess>(
    graph: &G,
) -> Result<NodeMap<G::Node, Vec<G::Node>>, GraphError> {
    let mut reach = node_map();
    for node in graph.nodes() {
        let search = depth_first_search(graph, Some(&node))?;
        reach.insert(node, search.preorder);
    }
    Ok(reach)
}

/// Nodes mutually reachable with each node, i.e. its strongly connected
/// component, in the order [`accessibility`] lists them.
#[instrument(skip_all)]
pub fn mutual_accessibility<G: GraphAccess>(
    graph: &G,
) -> Result<NodeMap<G::Node, Vec<G::Node>>, GraphError> {
    let reach = accessibility(graph)?;
    let lookup: NodeMap<G::Node, NodeSet<G::Node>> = reach
        .iter()
        .map(|(node, reached)| {
            let mut set = node_set();
            set.extend(reached.iter().cloned());
            (node.clone(), set)
        })
        .collect();
    let mut mutual = node_map();
    for (node, reached) in &reach {
        let both: Vec<G::Node> = reached
            .iter()
            .filter(|other| lookup.get(*other).is_some_and(|back| back.contains(node)))
            .cloned()
            .collect();
        mutual.insert(node.clone(), both);
    }
    Ok(mutual)
}
