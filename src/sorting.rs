use tracing::{debug, instrument};

use crate::{
    cycles::find_cycle, errors::GraphError, graph::GraphAccess, traversal::depth_first_search,
};

/// Topological order of a directed acyclic graph: every node precedes the
/// nodes it has edges to.
///
/// Undirected graphs fail with [`GraphError::InvalidGraphKind`] and digraphs
/// containing a cycle with [`GraphError::CycleDetected`].
#[instrument(skip_all, fields(directed = graph.is_directed()))]
pub fn topological_sorting<G: GraphAccess>(graph: &G) -> Result<Vec<G::Node>, GraphError> {
    if !graph.is_directed() {
        return Err(GraphError::invalid_graph_kind(
            "topological sorting needs a directed graph",
        ));
    }
    let cycle = find_cycle(graph)?;
    if !cycle.is_empty() {
        return Err(GraphError::cycle_detected(format!("{cycle:?}")));
    }
    let mut order = depth_first_search(graph, None)?.postorder;
    order.reverse();
    debug!(len = order.len(), "topological order built");
    Ok(order)
}
