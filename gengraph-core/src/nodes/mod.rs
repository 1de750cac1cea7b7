//! Node table construction.
//!
//! Partitions the requested node count into parts and assigns each node a
//! canvas position according to the selected [`Layout`].

mod layout;

use rand::Rng;
use tracing::{debug, warn};

use crate::{Canvas, GraphError, Point, Result};

/// Stable identity of a node within one generated graph.
///
/// Identities are dense indices in generation order, so they double as
/// positions in [`NodeSet::nodes`].
///
/// # Examples
/// ```
/// use gengraph_core::NodeId;
///
/// let id = NodeId::new(3);
/// assert_eq!(id.get(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Creates a node identifier from its index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(index: usize) -> Self { Self(index) }

    /// Returns the underlying index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

/// Index of a part (partition class).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartId(usize);

impl PartId {
    /// Creates a part identifier from its index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(index: usize) -> Self { Self(index) }

    /// Returns the underlying index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

/// A positioned node and the part it belongs to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    id: NodeId,
    part: PartId,
    position: Point,
}

impl Node {
    /// Identity of the node.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> NodeId { self.id }

    /// Part the node belongs to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn part(&self) -> PartId { self.part }

    /// Canvas position of the node.
    #[must_use]
    #[rustfmt::skip]
    pub const fn position(&self) -> Point { self.position }
}

/// How node positions are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Independent uniform positions inside the canvas.
    #[default]
    Scatter,
    /// Nodes evenly spaced on a circle (one part) or along the sides of a
    /// regular polygon with one side per part.
    Aligned,
}

/// How nodes are distributed over parts when more than one part is requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Partition {
    /// Each node joins a uniformly random part. Parts may end up empty.
    #[default]
    Random,
    /// Node `i` joins part `i mod part_count`, so part sizes differ by at
    /// most one and no part is empty.
    Balanced,
}

/// Parameters of the node-table stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeSpec {
    /// Total number of nodes.
    pub size: usize,
    /// Number of parts the nodes are split into.
    pub part_count: usize,
    /// Position strategy.
    pub layout: Layout,
    /// Part assignment strategy.
    pub partition: Partition,
    /// Drawing area.
    pub canvas: Canvas,
}

impl NodeSpec {
    /// Checks the node count, part count, and canvas.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidConfiguration`] when `size` or
    /// `part_count` is zero, when `part_count > size`, or when the canvas is
    /// invalid.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GraphError::invalid("size", "size must be at least 1 (got 0)"));
        }
        if self.part_count == 0 {
            return Err(GraphError::invalid(
                "part_count",
                "part_count must be at least 1 (got 0)",
            ));
        }
        if self.part_count > self.size {
            return Err(GraphError::invalid(
                "part_count",
                format!(
                    "part_count ({}) must not exceed size ({})",
                    self.part_count, self.size
                ),
            ));
        }
        self.canvas.validate()
    }
}

/// Positioned nodes grouped into parts.
///
/// Every node belongs to exactly one part, and each part lists its members
/// in ascending [`NodeId`] order.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSet {
    nodes: Vec<Node>,
    parts: Vec<Vec<NodeId>>,
}

impl NodeSet {
    /// Builds a node set from explicit per-part positions.
    ///
    /// Identities are assigned part by part in the order given, so the first
    /// position of the first part becomes node `0`.
    ///
    /// # Examples
    /// ```
    /// use gengraph_core::{NodeId, NodeSet, PartId, Point};
    ///
    /// let nodes = NodeSet::from_part_positions(vec![
    ///     vec![Point::new(0.0, 0.0)],
    ///     vec![Point::new(1.0, 0.0), Point::new(2.0, 0.0)],
    /// ]);
    /// assert_eq!(nodes.len(), 3);
    /// assert_eq!(nodes.part_of(NodeId::new(2)), Some(PartId::new(1)));
    /// ```
    #[must_use]
    pub fn from_part_positions(parts: Vec<Vec<Point>>) -> Self {
        let mut nodes = Vec::new();
        let mut members = Vec::with_capacity(parts.len());
        for (part_index, positions) in parts.into_iter().enumerate() {
            let mut ids = Vec::with_capacity(positions.len());
            for position in positions {
                let id = NodeId::new(nodes.len());
                nodes.push(Node {
                    id,
                    part: PartId::new(part_index),
                    position,
                });
                ids.push(id);
            }
            members.push(ids);
        }
        Self {
            nodes,
            parts: members,
        }
    }

    /// All nodes, indexed by [`NodeId::get`].
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the set holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by identity.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.get())
    }

    /// Members of every part, in part order.
    #[must_use]
    pub fn parts(&self) -> &[Vec<NodeId>] {
        &self.parts
    }

    /// Members of one part.
    #[must_use]
    pub fn part(&self, part: PartId) -> Option<&[NodeId]> {
        self.parts.get(part.get()).map(Vec::as_slice)
    }

    /// Number of parts, including empty ones.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` when the nodes are split across more than one part.
    #[must_use]
    pub fn is_multipart(&self) -> bool {
        self.parts.len() > 1
    }

    /// Part that `id` belongs to.
    #[must_use]
    pub fn part_of(&self, id: NodeId) -> Option<PartId> {
        self.node(id).map(Node::part)
    }

    /// Position of `id`.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.node(id).map(Node::position)
    }
}

/// Builds the node table described by `spec`, drawing randomness from `rng`.
///
/// Part assignment consumes randomness first (only for
/// [`Partition::Random`] with more than one part), then positions (only for
/// [`Layout::Scatter`]).
///
/// # Errors
/// Returns [`GraphError::InvalidConfiguration`] when `spec` fails
/// [`NodeSpec::validate`]. Validation happens before `rng` is touched.
///
/// # Examples
/// ```
/// use gengraph_core::{Canvas, Layout, NodeSpec, Partition, build_nodes};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let spec = NodeSpec {
///     size: 6,
///     part_count: 2,
///     layout: Layout::Aligned,
///     partition: Partition::Balanced,
///     canvas: Canvas::default(),
/// };
/// let nodes = build_nodes(&spec, &mut SmallRng::seed_from_u64(7))?;
/// assert_eq!(nodes.len(), 6);
/// assert_eq!(nodes.parts()[0].len(), 3);
/// # Ok::<(), gengraph_core::GraphError>(())
/// ```
pub fn build_nodes<R: Rng + ?Sized>(spec: &NodeSpec, rng: &mut R) -> Result<NodeSet> {
    spec.validate()?;

    let membership = assign_parts(spec, rng);
    let mut parts = vec![Vec::new(); spec.part_count];
    for (index, part) in membership.iter().enumerate() {
        if let Some(members) = parts.get_mut(part.get()) {
            members.push(NodeId::new(index));
        }
    }

    let empty_parts = parts.iter().filter(|members| members.is_empty()).count();
    if empty_parts > 0 {
        warn!(
            empty_parts,
            part_count = spec.part_count,
            "random partition left parts empty"
        );
    }

    let positions = match spec.layout {
        Layout::Scatter => layout::scatter(spec.size, &spec.canvas, rng),
        Layout::Aligned => layout::aligned(&parts, spec.size, &spec.canvas),
    };

    let nodes = membership
        .into_iter()
        .zip(positions)
        .enumerate()
        .map(|(index, (part, position))| Node {
            id: NodeId::new(index),
            part,
            position,
        })
        .collect::<Vec<_>>();

    debug!(
        nodes = nodes.len(),
        parts = parts.len(),
        layout = ?spec.layout,
        "node table built"
    );
    Ok(NodeSet { nodes, parts })
}

fn assign_parts<R: Rng + ?Sized>(spec: &NodeSpec, rng: &mut R) -> Vec<PartId> {
    if spec.part_count == 1 {
        return vec![PartId::new(0); spec.size];
    }
    match spec.partition {
        Partition::Random => (0..spec.size)
            .map(|_| PartId::new(rng.gen_range(0..spec.part_count)))
            .collect(),
        Partition::Balanced => (0..spec.size)
            .map(|index| PartId::new(index % spec.part_count))
            .collect(),
    }
}
