//! Benchmark parameter types.
//!
//! Groups the knobs of one benchmark run so helpers can build the matching
//! generator and Criterion can label the run.

use std::fmt;

use gengraph_core::{GraphBuilder, GraphGenerator, Layout, Partition, Selection};

use crate::error::BenchSetupError;

/// Edge selection strategy exercised by a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    /// Keep every candidate.
    Complete,
    /// Keep `edges_per_node × size` random candidates.
    Random {
        /// Requested edges per node.
        edges_per_node: usize,
    },
    /// Nearest-neighbour linking without isolated nodes.
    Nearest,
}

impl StrategyKind {
    /// Short label used in benchmark ids.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Random { .. } => "random",
            Self::Nearest => "nearest",
        }
    }
}

/// Parameters for a full generation benchmark run.
#[derive(Clone, Debug)]
pub struct GenerationBenchParams {
    /// Number of nodes.
    pub size: usize,
    /// Number of parts.
    pub part_count: usize,
    /// Selection strategy.
    pub strategy: StrategyKind,
    /// Seed fixed for every iteration.
    pub seed: u64,
}

impl GenerationBenchParams {
    /// Resolves the strategy against the node count.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when a random strategy asks
    /// for zero edges per node.
    pub const fn selection(&self) -> Result<Selection, BenchSetupError> {
        match self.strategy {
            StrategyKind::Complete => Ok(Selection::Complete),
            StrategyKind::Random { edges_per_node: 0 } => Err(BenchSetupError::ZeroValue {
                context: "edges_per_node",
            }),
            StrategyKind::Random { edges_per_node } => Ok(Selection::Random {
                order: edges_per_node.saturating_mul(self.size),
            }),
            StrategyKind::Nearest => Ok(Selection::Nearest {
                allow_isolated: false,
            }),
        }
    }

    /// Builds the seeded generator for this run.
    ///
    /// Multi-part runs use balanced partitions so every iteration sees the
    /// same part sizes.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] when the parameters are rejected.
    ///
    /// # Examples
    /// ```
    /// use gengraph_benches::params::{GenerationBenchParams, StrategyKind};
    ///
    /// let params = GenerationBenchParams {
    ///     size: 50,
    ///     part_count: 2,
    ///     strategy: StrategyKind::Random { edges_per_node: 3 },
    ///     seed: 7,
    /// };
    /// let generator = params.generator()?;
    /// assert_eq!(generator.node_spec().size, 50);
    /// # Ok::<(), gengraph_benches::error::BenchSetupError>(())
    /// ```
    pub fn generator(&self) -> Result<GraphGenerator, BenchSetupError> {
        let generator = GraphBuilder::new()
            .with_size(self.size)
            .with_parts(self.part_count)
            .with_layout(Layout::Scatter)
            .with_partition(Partition::Balanced)
            .with_selection(self.selection()?)
            .with_seed(Some(self.seed))
            .build()?;
        Ok(generator)
    }
}

impl fmt::Display for GenerationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},n={},k={}",
            self.strategy.label(),
            self.size,
            self.part_count
        )
    }
}

/// Parameters for a candidate enumeration benchmark run.
#[derive(Clone, Debug)]
pub struct CandidateBenchParams {
    /// Number of nodes.
    pub size: usize,
    /// Number of parts.
    pub part_count: usize,
    /// Whether directed candidates are enumerated.
    pub directed: bool,
}

impl fmt::Display for CandidateBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let orientation = if self.directed { "directed" } else { "undirected" };
        write!(f, "{orientation},n={},k={}", self.size, self.part_count)
    }
}
