//! In-memory directed and undirected graphs with traversal, shortest-path and
//! spanning-tree algorithms.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod accessibility;
pub mod bench_utils;
pub mod config;
pub mod cycles;
pub mod errors;
pub mod filters;
mod frontier;
pub mod graph;
pub mod heuristics;
pub mod path;
pub mod sorting;
pub mod spanning;
pub mod traversal;

pub use crate::accessibility::{accessibility, connected_components, mutual_accessibility};
pub use crate::config::GraphConfig;
pub use crate::cycles::find_cycle;
pub use crate::errors::GraphError;
pub use crate::filters::{Find, NullFilter, Radius, SearchFilter};
pub use crate::graph::{
    Attribute, Digraph, EdgeProperty, Graph, GraphAccess, NodeId, NodeMap, NodeSet, SpanningTree,
};
pub use crate::heuristics::{
    EuclideanHeuristic, FnHeuristic, Heuristic, LandmarkHeuristic, ZeroHeuristic,
};
pub use crate::path::{SearchPath, ShortestPaths, heuristic_search, shortest_path};
pub use crate::sorting::topological_sorting;
pub use crate::spanning::minimal_spanning_tree;
pub use crate::traversal::{
    BreadthFirst, DepthFirst, Order, breadth_first_search, breadth_first_search_filtered,
    depth_first_search, depth_first_search_filtered, filtered_breadth_first_search, traversal,
};
