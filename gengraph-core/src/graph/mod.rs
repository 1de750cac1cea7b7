//! Graph assembly: the node table plus a well-formed edge set.

mod adjacency;

use std::collections::{BTreeSet, btree_set};

use tracing::error;

use crate::{
    DirectedEdge, Edge, GraphError, NodeId, NodeSet, PartId, Result, UndirectedEdge,
};

pub use self::adjacency::Adjacency;

/// Edges of a graph; never a mix of directed and undirected edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EdgeSet {
    /// Canonical unordered pairs.
    Undirected(BTreeSet<UndirectedEdge>),
    /// Ordered pairs.
    Directed(BTreeSet<DirectedEdge>),
}

impl EdgeSet {
    /// Returns `true` for [`EdgeSet::Directed`].
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        matches!(self, Self::Directed(_))
    }

    /// Number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Undirected(edges) => edges.len(),
            Self::Directed(edges) => edges.len(),
        }
    }

    /// Returns `true` when the set holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates endpoints in ascending edge order.
    #[must_use]
    pub fn endpoints(&self) -> Endpoints<'_> {
        match self {
            Self::Undirected(edges) => Endpoints(EndpointsInner::Undirected(edges.iter())),
            Self::Directed(edges) => Endpoints(EndpointsInner::Directed(edges.iter())),
        }
    }

    /// Returns `true` when the edge `a -> b` (or `{a, b}` when undirected)
    /// is present.
    #[must_use]
    pub fn contains(&self, a: NodeId, b: NodeId) -> bool {
        match self {
            Self::Undirected(edges) => {
                UndirectedEdge::new(a, b).is_some_and(|edge| edges.contains(&edge))
            }
            Self::Directed(edges) => DirectedEdge::new(a, b).is_some_and(|edge| edges.contains(&edge)),
        }
    }
}

/// Iterator over the endpoints of an [`EdgeSet`].
#[derive(Clone, Debug)]
pub struct Endpoints<'a>(EndpointsInner<'a>);

#[derive(Clone, Debug)]
enum EndpointsInner<'a> {
    Undirected(btree_set::Iter<'a, UndirectedEdge>),
    Directed(btree_set::Iter<'a, DirectedEdge>),
}

impl Iterator for Endpoints<'_> {
    type Item = (NodeId, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            EndpointsInner::Undirected(iter) => iter.next().map(Edge::endpoints),
            EndpointsInner::Directed(iter) => iter.next().map(Edge::endpoints),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.0 {
            EndpointsInner::Undirected(iter) => iter.size_hint(),
            EndpointsInner::Directed(iter) => iter.size_hint(),
        }
    }
}

/// An edge together with the parts of its endpoints, as handed to renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeView {
    /// First endpoint (tail for directed graphs).
    pub from: NodeId,
    /// Second endpoint (head for directed graphs).
    pub to: NodeId,
    /// Part of [`EdgeView::from`].
    pub from_part: PartId,
    /// Part of [`EdgeView::to`].
    pub to_part: PartId,
}

/// An immutable generated graph.
///
/// Every edge references nodes present in the node table, no edge is a
/// self-loop, and in multi-part graphs every edge joins two different parts.
///
/// # Examples
/// ```
/// use gengraph_core::{GraphBuilder, Selection};
///
/// let graph = GraphBuilder::new()
///     .with_size(4)
///     .with_selection(Selection::Complete)
///     .with_seed(Some(3))
///     .build()?
///     .generate()?;
/// assert_eq!(graph.edge_count(), 6);
/// assert!(!graph.is_directed());
/// assert_eq!(graph.seed(), Some(3));
/// # Ok::<(), gengraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    nodes: NodeSet,
    edges: EdgeSet,
    adjacency: Adjacency,
    seed: Option<u64>,
}

impl Graph {
    /// Checks the structural invariants and aggregates the result.
    ///
    /// # Errors
    /// Returns [`GraphError::InvariantViolation`] when an edge references a
    /// node missing from `nodes`, is a self-loop, is a non-canonical
    /// undirected pair, or joins two nodes of the same part in a multi-part
    /// graph.
    pub fn assemble(nodes: NodeSet, edges: EdgeSet) -> Result<Self> {
        for (from, to) in edges.endpoints() {
            check_edge(&nodes, &edges, from, to)?;
        }
        let adjacency = Adjacency::build(nodes.len(), &edges);
        Ok(Self {
            nodes,
            edges,
            adjacency,
            seed: None,
        })
    }

    pub(crate) fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Node table grouped into parts.
    #[must_use]
    pub fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    /// Final edge set.
    #[must_use]
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// Neighbour table derived from the edge set.
    #[must_use]
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Whether the edges are directed.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.edges.is_directed()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Seed that drove generation, when the graph came from a generator.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Edges annotated with the parts of their endpoints.
    pub fn edge_views(&self) -> impl Iterator<Item = EdgeView> + '_ {
        self.edges.endpoints().filter_map(|(from, to)| {
            Some(EdgeView {
                from,
                to,
                from_part: self.nodes.part_of(from)?,
                to_part: self.nodes.part_of(to)?,
            })
        })
    }
}

fn check_edge(nodes: &NodeSet, edges: &EdgeSet, from: NodeId, to: NodeId) -> Result<()> {
    let violation = |invariant: &'static str| {
        error!(invariant, from = from.get(), to = to.get(), "graph invariant violated");
        GraphError::InvariantViolation {
            invariant,
            from: from.get(),
            to: to.get(),
        }
    };

    let (Some(from_part), Some(to_part)) = (nodes.part_of(from), nodes.part_of(to)) else {
        return Err(violation("edge endpoint missing from node table"));
    };
    if from == to {
        return Err(violation("edge is a self-loop"));
    }
    if !edges.is_directed() && from > to {
        return Err(violation("undirected edge is not canonical"));
    }
    if nodes.is_multipart() && from_part == to_part {
        return Err(violation("edge joins two nodes of the same part"));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
