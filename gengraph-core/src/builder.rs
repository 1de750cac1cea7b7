//! Builder utilities for configuring graph generation.
//!
//! Collects the generation request into a single configuration struct and
//! validates it before any randomness is consumed.

use crate::{
    Canvas, Layout, Partition, Result, Selection, generator::GraphGenerator, nodes::NodeSpec,
};

const DEFAULT_SIZE: usize = 5;

/// Named presets covering the classic graph kinds.
///
/// Each kind is just a configuration of [`GraphBuilder`]; all of them start
/// from five scattered nodes and undirected edges.
///
/// # Examples
/// ```
/// use gengraph_core::{GraphBuilder, GraphKind, Selection};
///
/// let builder = GraphBuilder::for_kind(GraphKind::Bipartite);
/// assert_eq!(builder.part_count(), 2);
/// assert_eq!(builder.selection(), Selection::Nearest { allow_isolated: false });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraphKind {
    /// One part, nearest-neighbour edges, nodes may end up isolated.
    Sparse,
    /// One part, nearest-neighbour edges, every node draws at least one edge.
    Linked,
    /// Two balanced parts, nearest-neighbour edges across the parts only.
    Bipartite,
    /// One part, every pair connected.
    Complete,
}

impl GraphKind {
    /// Short lowercase label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sparse => "sparse",
            Self::Linked => "linked",
            Self::Bipartite => "bipartite",
            Self::Complete => "complete",
        }
    }
}

/// Configures and constructs [`GraphGenerator`] instances.
///
/// Defaults: five nodes in one part, scatter layout on an 800×600 canvas
/// with a margin of 20, undirected edges chosen by
/// [`Selection::Nearest`] without isolated nodes, and a fresh seed per
/// generation.
///
/// # Examples
/// ```
/// use gengraph_core::{GraphBuilder, Layout, Selection};
///
/// let generator = GraphBuilder::new()
///     .with_size(12)
///     .with_parts(3)
///     .with_layout(Layout::Aligned)
///     .with_selection(Selection::Random { order: 10 })
///     .with_seed(Some(42))
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.node_spec().size, 12);
/// assert_eq!(generator.seed(), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphBuilder {
    size: usize,
    part_count: usize,
    layout: Layout,
    partition: Partition,
    directed: bool,
    selection: Selection,
    canvas: Canvas,
    seed: Option<u64>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            part_count: 1,
            layout: Layout::default(),
            partition: Partition::default(),
            directed: false,
            selection: Selection::default(),
            canvas: Canvas::default(),
            seed: None,
        }
    }
}

impl GraphBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder preset for `kind`.
    #[must_use]
    pub fn for_kind(kind: GraphKind) -> Self {
        let base = Self::default();
        match kind {
            GraphKind::Sparse => base.with_selection(Selection::Nearest {
                allow_isolated: true,
            }),
            GraphKind::Linked => base.with_selection(Selection::Nearest {
                allow_isolated: false,
            }),
            GraphKind::Bipartite => base
                .with_parts(2)
                .with_partition(Partition::Balanced)
                .with_selection(Selection::Nearest {
                    allow_isolated: false,
                }),
            GraphKind::Complete => base.with_selection(Selection::Complete),
        }
    }

    /// Overrides the total node count.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Returns the configured node count.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Overrides the number of parts.
    #[must_use]
    pub fn with_parts(mut self, part_count: usize) -> Self {
        self.part_count = part_count;
        self
    }

    /// Returns the configured part count.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.part_count
    }

    /// Sets the position strategy.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Returns the configured layout.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Sets how nodes are spread over parts.
    #[must_use]
    pub fn with_partition(mut self, partition: Partition) -> Self {
        self.partition = partition;
        self
    }

    /// Returns the configured partition strategy.
    #[must_use]
    pub fn partition(&self) -> Partition {
        self.partition
    }

    /// Chooses between directed and undirected edges.
    #[must_use]
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Returns `true` when directed edges are requested.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Sets the edge selection strategy.
    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Returns the configured selection strategy.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Sets the canvas dimensions, keeping the current margin.
    #[must_use]
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas = Canvas::new(width, height, self.canvas.margin());
        self
    }

    /// Sets the margin kept around aligned layouts.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.canvas = Canvas::new(self.canvas.width(), self.canvas.height(), margin);
        self
    }

    /// Returns the configured canvas.
    #[must_use]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Fixes the RNG seed; `None` draws a fresh seed for every generation.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured seed.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration and constructs a [`GraphGenerator`].
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidConfiguration`] naming the
    /// offending field when the size or part count is zero, the part count
    /// exceeds the size, the canvas is degenerate, a random selection asks
    /// for zero edges (or the graph can hold none), or nearest selection is
    /// combined with directed edges.
    ///
    /// # Examples
    /// ```
    /// use gengraph_core::GraphBuilder;
    ///
    /// let err = GraphBuilder::new().with_size(0).build().expect_err("size 0 is rejected");
    /// assert_eq!(err.field(), Some("size"));
    /// ```
    pub fn build(self) -> Result<GraphGenerator> {
        let spec = NodeSpec {
            size: self.size,
            part_count: self.part_count,
            layout: self.layout,
            partition: self.partition,
            canvas: self.canvas,
        };
        spec.validate()?;
        self.selection.validate(self.size, self.directed)?;

        Ok(GraphGenerator::new(
            spec,
            self.directed,
            self.selection,
            self.seed,
        ))
    }
}
