//! Seeded graph generators shared by the Criterion benches and tests.

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde_json::json;

use crate::{
    errors::GraphError,
    graph::{Attribute, Digraph, Graph},
    heuristics::POSITION_ATTRIBUTE,
};

/// Edge list over node indices `0..nodes`, with a weight per edge.
#[derive(Clone, Debug)]
pub struct GraphDataset {
    pub nodes: usize,
    pub edges: Vec<(usize, usize, f64)>,
    /// Planar coordinates, present for grid shapes only.
    pub positions: Option<Vec<(f64, f64)>>,
}

impl GraphDataset {
    pub fn degrees(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.nodes];
        for &(from, to, _) in &self.edges {
            counts[from] += 1;
            counts[to] += 1;
        }
        counts
    }

    pub fn hub_index(&self) -> usize {
        let mut best = (0usize, 0usize);
        for (idx, deg) in self.degrees().into_iter().enumerate() {
            if deg > best.0 {
                best = (deg, idx);
            }
        }
        best.1
    }

    pub fn to_graph(&self) -> Result<Graph<usize>, GraphError> {
        let mut graph = Graph::new();
        for idx in 0..self.nodes {
            graph.add_node_with_attributes(idx, self.node_attributes(idx))?;
        }
        for &(from, to, weight) in &self.edges {
            graph.add_edge(from, to, weight, "")?;
        }
        Ok(graph)
    }

    pub fn to_digraph(&self) -> Result<Digraph<usize>, GraphError> {
        let mut graph = Digraph::new();
        for idx in 0..self.nodes {
            graph.add_node_with_attributes(idx, self.node_attributes(idx))?;
        }
        for &(from, to, weight) in &self.edges {
            graph.add_edge(from, to, weight, "")?;
        }
        Ok(graph)
    }

    fn node_attributes(&self, idx: usize) -> Vec<Attribute> {
        match &self.positions {
            Some(positions) => {
                let (x, y) = positions[idx];
                vec![(POSITION_ATTRIBUTE.to_string(), json!([x, y]))]
            }
            None => Vec::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum GraphShape {
    Line,
    Star,
    Grid2D { width: usize, height: usize },
    RandomErdosRenyi { edges: usize },
    ScaleFree { m: usize },
}

/// Builds a dataset of `shape` with weights drawn from `1.0..10.0`. Grid
/// nodes also carry a `position` attribute.
pub fn generate_graph(shape: GraphShape, node_count: usize, seed: u64) -> GraphDataset {
    assert!(node_count > 1, "node_count must exceed 1");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = None;
    let pairs = match shape {
        GraphShape::Line => generate_line_edges(node_count),
        GraphShape::Star => generate_star_edges(node_count),
        GraphShape::Grid2D { width, height } => {
            positions = Some(grid_positions(width, height));
            generate_grid_edges(width, height, node_count)
        }
        GraphShape::RandomErdosRenyi { edges } => {
            generate_random_edges(node_count, edges, &mut rng)
        }
        GraphShape::ScaleFree { m } => generate_scale_free_edges(node_count, m, &mut rng),
    };
    let mut edges: Vec<(usize, usize, f64)> = pairs
        .into_iter()
        .map(|(from, to)| (from, to, rng.gen_range(1.0..10.0)))
        .collect();
    edges.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    GraphDataset {
        nodes: node_count,
        edges,
        positions,
    }
}

fn generate_line_edges(count: usize) -> Vec<(usize, usize)> {
    (0..count - 1).map(|idx| (idx, idx + 1)).collect()
}

fn generate_star_edges(count: usize) -> Vec<(usize, usize)> {
    (1..count).map(|leaf| (0, leaf)).collect()
}

fn generate_grid_edges(width: usize, height: usize, node_count: usize) -> Vec<(usize, usize)> {
    assert_eq!(
        width * height,
        node_count,
        "grid dimensions must match node count"
    );
    let mut edges = Vec::with_capacity(width * height * 2);
    for y in 0..height {
        for x in 0..width {
            let base = grid_index(x, y, width);
            if x + 1 < width {
                edges.push((base, grid_index(x + 1, y, width)));
            }
            if y + 1 < height {
                edges.push((base, grid_index(x, y + 1, width)));
            }
        }
    }
    edges
}

fn grid_positions(width: usize, height: usize) -> Vec<(f64, f64)> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x as f64, y as f64)))
        .collect()
}

fn generate_random_edges(
    node_count: usize,
    edge_count: usize,
    rng: &mut StdRng,
) -> Vec<(usize, usize)> {
    let total_pairs = pair_count(node_count);
    assert!(
        edge_count as u128 <= total_pairs,
        "edge_count exceeds possible pairs"
    );
    let mut edges = Vec::with_capacity(edge_count);
    let mut idx = 0u64;
    let mut remaining_edges = edge_count as u64;
    while remaining_edges > 0 && idx < total_pairs as u64 {
        let remaining_pairs = total_pairs as u64 - idx;
        let p = remaining_edges as f64 / remaining_pairs as f64;
        idx += sample_geometric(rng, p);
        if idx >= total_pairs as u64 {
            break;
        }
        let (from, to) = pair_from_index(idx, node_count as u64);
        edges.push((from as usize, to as usize));
        idx += 1;
        remaining_edges -= 1;
    }
    edges
}

fn generate_scale_free_edges(node_count: usize, m: usize, rng: &mut StdRng) -> Vec<(usize, usize)> {
    assert!(m > 0, "m must be positive");
    assert!(node_count > m + 1, "node_count must exceed m + 1");
    let mut degrees = vec![0usize; node_count];
    let mut edges = Vec::new();
    let seed_nodes = m + 1;
    for u in 0..seed_nodes {
        for v in (u + 1)..seed_nodes {
            edges.push((u, v));
            degrees[u] += 1;
            degrees[v] += 1;
        }
    }
    let mut total_degree: usize = degrees.iter().sum();
    for new_node in seed_nodes..node_count {
        let mut targets = Vec::new();
        while targets.len() < m {
            let pick = rng.gen_range(0..total_degree);
            let mut cumulative = 0usize;
            for (candidate, degree) in degrees.iter().enumerate().take(new_node) {
                cumulative += degree;
                if pick < cumulative {
                    if !targets.contains(&candidate) {
                        targets.push(candidate);
                    }
                    break;
                }
            }
        }
        targets.sort_unstable();
        for target in targets {
            edges.push((target, new_node));
            degrees[target] += 1;
            degrees[new_node] += 1;
            total_degree += 2;
        }
    }
    edges
}

fn grid_index(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

fn pair_count(nodes: usize) -> u128 {
    let n = nodes as u128;
    n * (n - 1) / 2
}

fn sample_geometric(rng: &mut StdRng, p: f64) -> u64 {
    if p >= 1.0 {
        return 0;
    }
    let u = rng.r#gen::<f64>().max(f64::MIN_POSITIVE);
    ((u.ln() / (1.0 - p).ln()).floor().max(0.0)) as u64
}

fn pair_from_index(idx: u64, nodes: u64) -> (u64, u64) {
    let mut left = 0;
    let mut start = 0u64;
    while left < nodes - 1 {
        let remaining = nodes - left - 1;
        if idx < start + remaining {
            return (left, left + 1 + (idx - start));
        }
        start += remaining;
        left += 1;
    }
    (nodes - 2, nodes - 1)
}
