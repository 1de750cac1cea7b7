//! Index-based neighbour table derived from a finished edge set.

use crate::NodeId;

use super::EdgeSet;

/// Neighbour lists indexed by [`NodeId::get`].
///
/// Undirected graphs list every incident node on both sides; directed
/// graphs list out-neighbours and track in-degree separately. Lists are in
/// ascending [`NodeId`] order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Adjacency {
    neighbours: Vec<Vec<NodeId>>,
    in_degree: Vec<usize>,
}

impl Adjacency {
    pub(super) fn build(node_count: usize, edges: &EdgeSet) -> Self {
        let mut neighbours = vec![Vec::new(); node_count];
        let mut in_degree = vec![0_usize; node_count];
        let directed = edges.is_directed();

        for (from, to) in edges.endpoints() {
            if let Some(list) = neighbours.get_mut(from.get()) {
                list.push(to);
            }
            if let Some(count) = in_degree.get_mut(to.get()) {
                *count += 1;
            }
            if !directed {
                if let Some(list) = neighbours.get_mut(to.get()) {
                    list.push(from);
                }
                if let Some(count) = in_degree.get_mut(from.get()) {
                    *count += 1;
                }
            }
        }
        for list in &mut neighbours {
            list.sort_unstable();
        }

        Self {
            neighbours,
            in_degree,
        }
    }

    /// Neighbours of `id` (out-neighbours for directed graphs).
    #[must_use]
    pub fn neighbours(&self, id: NodeId) -> &[NodeId] {
        self.neighbours.get(id.get()).map_or(&[][..], Vec::as_slice)
    }

    /// Number of entries in [`Adjacency::neighbours`] for `id`.
    #[must_use]
    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbours(id).len()
    }

    /// Number of edges ending at `id`; equals [`Adjacency::degree`] for
    /// undirected graphs.
    #[must_use]
    pub fn in_degree(&self, id: NodeId) -> usize {
        self.in_degree.get(id.get()).copied().unwrap_or(0)
    }

    /// Number of nodes touched by no edge at all.
    #[must_use]
    pub fn isolated_count(&self) -> usize {
        self.neighbours
            .iter()
            .zip(&self.in_degree)
            .filter(|(list, incoming)| list.is_empty() && **incoming == 0)
            .count()
    }
}
