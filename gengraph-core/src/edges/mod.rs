//! Edge representations plus candidate generation and selection.
//!
//! Graphs are either wholly undirected or wholly directed; the [`Edge`] trait
//! lets the candidate and selection stages run unchanged over both.

mod candidates;
mod select;

use std::{collections::BTreeSet, fmt, hash::Hash};

use crate::{EdgeSet, NodeId};

pub use self::{
    candidates::candidates,
    select::{Selection, select},
};

mod sealed {
    pub trait Sealed {}
}

/// Common behaviour of [`UndirectedEdge`] and [`DirectedEdge`].
///
/// The trait is sealed; the engine only knows how to assemble graphs from the
/// two edge kinds defined in this crate.
pub trait Edge: sealed::Sealed + Copy + Ord + Hash + fmt::Debug {
    /// Whether `(a, b)` and `(b, a)` are distinct edges.
    const DIRECTED: bool;

    /// Builds the edge joining `a` and `b`, or `None` for a self-pair.
    fn between(a: NodeId, b: NodeId) -> Option<Self>;

    /// Endpoints in stored order.
    fn endpoints(&self) -> (NodeId, NodeId);

    /// Wraps a finished edge collection for graph assembly.
    fn into_edge_set(edges: BTreeSet<Self>) -> EdgeSet;
}

/// Unordered pair of distinct nodes stored in canonical form.
///
/// The lower [`NodeId`] is always stored first, so `(a, b)` and `(b, a)`
/// compare and hash identically.
///
/// # Examples
/// ```
/// use gengraph_core::{NodeId, UndirectedEdge};
///
/// let forward = UndirectedEdge::new(NodeId::new(1), NodeId::new(4));
/// let backward = UndirectedEdge::new(NodeId::new(4), NodeId::new(1));
/// assert_eq!(forward, backward);
/// assert!(UndirectedEdge::new(NodeId::new(2), NodeId::new(2)).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UndirectedEdge {
    first: NodeId,
    second: NodeId,
}

impl UndirectedEdge {
    /// Canonicalises the pair `{a, b}`; returns `None` when `a == b`.
    #[must_use]
    pub fn new(a: NodeId, b: NodeId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self {
                first: a,
                second: b,
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: b,
                second: a,
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Lower endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn first(&self) -> NodeId { self.first }

    /// Higher endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn second(&self) -> NodeId { self.second }
}

impl sealed::Sealed for UndirectedEdge {}

impl Edge for UndirectedEdge {
    const DIRECTED: bool = false;

    fn between(a: NodeId, b: NodeId) -> Option<Self> {
        Self::new(a, b)
    }

    fn endpoints(&self) -> (NodeId, NodeId) {
        (self.first, self.second)
    }

    fn into_edge_set(edges: BTreeSet<Self>) -> EdgeSet {
        EdgeSet::Undirected(edges)
    }
}

/// Ordered pair of distinct nodes; `(a, b)` and `(b, a)` are different edges.
///
/// # Examples
/// ```
/// use gengraph_core::{DirectedEdge, NodeId};
///
/// let forward = DirectedEdge::new(NodeId::new(1), NodeId::new(4)).expect("distinct");
/// let backward = DirectedEdge::new(NodeId::new(4), NodeId::new(1)).expect("distinct");
/// assert_ne!(forward, backward);
/// assert_eq!(forward.from().get(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectedEdge {
    from: NodeId,
    to: NodeId,
}

impl DirectedEdge {
    /// Builds the edge `from -> to`; returns `None` when `from == to`.
    #[must_use]
    pub fn new(from: NodeId, to: NodeId) -> Option<Self> {
        (from != to).then_some(Self { from, to })
    }

    /// Tail of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn from(&self) -> NodeId { self.from }

    /// Head of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> NodeId { self.to }
}

impl sealed::Sealed for DirectedEdge {}

impl Edge for DirectedEdge {
    const DIRECTED: bool = true;

    fn between(a: NodeId, b: NodeId) -> Option<Self> {
        Self::new(a, b)
    }

    fn endpoints(&self) -> (NodeId, NodeId) {
        (self.from, self.to)
    }

    fn into_edge_set(edges: BTreeSet<Self>) -> EdgeSet {
        EdgeSet::Directed(edges)
    }
}

#[cfg(test)]
mod tests;
