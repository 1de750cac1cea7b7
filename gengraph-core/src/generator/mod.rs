//! Graph generation pipeline.
//!
//! Provides the [`GraphGenerator`] entry point which runs node construction,
//! candidate enumeration, selection, and assembly against a single RNG.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{Span, field, info, instrument};

use crate::{
    DirectedEdge, Edge, Graph, NodeSet, Result, Selection, UndirectedEdge, build_nodes,
    candidates, nodes::NodeSpec, select,
};

/// Validated generation request.
///
/// Obtain one from [`crate::GraphBuilder::build`]. A generator is immutable
/// and can be run repeatedly; every run yields a wholly new [`Graph`].
///
/// # Examples
/// ```
/// use gengraph_core::{GraphBuilder, Selection};
///
/// let generator = GraphBuilder::new()
///     .with_size(8)
///     .with_selection(Selection::Random { order: 5 })
///     .with_seed(Some(9))
///     .build()?;
/// let first = generator.generate()?;
/// let second = generator.generate()?;
/// assert_eq!(first, second);
/// assert_eq!(first.edge_count(), 5);
/// # Ok::<(), gengraph_core::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphGenerator {
    spec: NodeSpec,
    directed: bool,
    selection: Selection,
    seed: Option<u64>,
}

impl GraphGenerator {
    pub(crate) fn new(
        spec: NodeSpec,
        directed: bool,
        selection: Selection,
        seed: Option<u64>,
    ) -> Self {
        Self {
            spec,
            directed,
            selection,
            seed,
        }
    }

    /// Node-table parameters.
    #[must_use]
    pub fn node_spec(&self) -> &NodeSpec {
        &self.spec
    }

    /// Whether generated graphs have directed edges.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Edge selection strategy.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generates a graph from the configured seed, or from a fresh seed when
    /// none was configured. The seed used is available via [`Graph::seed`].
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvariantViolation`] if assembly detects
    /// a malformed edge set.
    #[instrument(name = "core.generate", err, skip(self), fields(seed = field::Empty))]
    pub fn generate(&self) -> Result<Graph> {
        let seed = self.seed.unwrap_or_else(rand::random);
        Span::current().record("seed", seed);
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate_with_rng(&mut rng)
            .map(|graph| graph.with_seed(seed))
    }

    /// Generates a graph drawing all randomness from `rng`.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvariantViolation`] if assembly detects
    /// a malformed edge set.
    #[instrument(
        name = "core.pipeline",
        err,
        skip(self, rng),
        fields(
            size = self.spec.size,
            parts = self.spec.part_count,
            directed = self.directed,
            strategy = self.selection.name(),
        ),
    )]
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph> {
        let nodes = build_nodes(&self.spec, rng)?;
        let graph = if self.directed {
            self.connect::<DirectedEdge, R>(nodes, rng)?
        } else {
            self.connect::<UndirectedEdge, R>(nodes, rng)?
        };
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            isolated = graph.adjacency().isolated_count(),
            "graph generated"
        );
        Ok(graph)
    }

    fn connect<E: Edge, R: Rng + ?Sized>(&self, nodes: NodeSet, rng: &mut R) -> Result<Graph> {
        let pool = candidates::<E>(&nodes);
        let candidate_count = pool.len();
        let edges = select(pool, &nodes, self.selection, rng)?;
        record_generation(candidate_count, edges.len());
        Graph::assemble(nodes, E::into_edge_set(edges))
    }
}

#[cfg(feature = "metrics")]
fn record_generation(candidates: usize, selected: usize) {
    metrics::counter!("graph_generations_total").increment(1);
    metrics::histogram!("graph_candidate_edges").record(candidates as f64);
    metrics::histogram!("graph_selected_edges").record(selected as f64);
}

#[cfg(not(feature = "metrics"))]
fn record_generation(_candidates: usize, _selected: usize) {}
