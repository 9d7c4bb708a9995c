//! Configuration shared by the graph store and the search algorithms.
//!
//! A [`GraphConfig`] is attached to every [`crate::Graph`] and [`crate::Digraph`]
//! at construction time. Algorithms read it through
//! [`crate::GraphAccess::config`], so a single value controls both how edges are
//! created and how strictly searches treat edge weights.

/// Weight assigned to edges created without an explicit weight.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Store and search options.
///
/// # Default Configuration
///
/// ```rust
/// use adjgraph::GraphConfig;
/// let config = GraphConfig::default();
/// assert_eq!(config.default_weight, 1.0);
/// assert!(config.validate_weights);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
    /// Weight used by `add_default_edge`, `complete`, `inverse` and
    /// `add_spanning_tree`. `add_graph` copies the merged edges as they are.
    ///
    /// **Default:** `1.0`
    pub default_weight: f64,

    /// Reject negative or NaN weights during weighted searches
    ///
    /// **Default:** `true`
    ///
    /// Dijkstra, A*, the cost-ordered breadth-first search and the minimal
    /// spanning tree builder all assume non-negative weights. With validation
    /// enabled they fail with [`crate::GraphError::InvalidWeight`] the first
    /// time an offending edge is relaxed. With validation disabled the weight
    /// is used as-is and the result is unspecified.
    ///
    /// ```rust
    /// use adjgraph::GraphConfig;
    ///
    /// let cfg = GraphConfig::default().with_weight_validation(false);
    /// assert!(!cfg.validate_weights);
    /// ```
    pub validate_weights: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_weight: DEFAULT_EDGE_WEIGHT,
            validate_weights: true,
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_weight(mut self, weight: f64) -> Self {
        self.default_weight = weight;
        self
    }

    pub fn with_weight_validation(mut self, enabled: bool) -> Self {
        self.validate_weights = enabled;
        self
    }
}
