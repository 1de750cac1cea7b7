//! Enumeration of admissible edges for a node table.

use tracing::debug;

use crate::{NodeId, NodeSet};

use super::Edge;

/// Enumerates every edge admissible under the topology of `nodes`.
///
/// - One part: each pair `i < j` once. Directed graphs get only this forward
///   half, so a complete directed graph has `n·(n−1)/2` edges.
/// - Several parts: only pairs whose endpoints lie in different parts. Each
///   unordered cross-part pair is produced once; directed graphs also get
///   the reverse orientation.
///
/// The output never contains a self-pair or a duplicate, and its order is a
/// pure function of `nodes`.
///
/// # Examples
/// ```
/// use gengraph_core::{
///     Canvas, Layout, NodeSpec, Partition, UndirectedEdge, build_nodes, candidates,
/// };
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let spec = NodeSpec {
///     size: 4,
///     part_count: 1,
///     layout: Layout::Aligned,
///     partition: Partition::Random,
///     canvas: Canvas::default(),
/// };
/// let nodes = build_nodes(&spec, &mut SmallRng::seed_from_u64(1))?;
/// let pool = candidates::<UndirectedEdge>(&nodes);
/// assert_eq!(pool.len(), 6);
/// # Ok::<(), gengraph_core::GraphError>(())
/// ```
#[must_use]
pub fn candidates<E: Edge>(nodes: &NodeSet) -> Vec<E> {
    let pool = if nodes.is_multipart() {
        cross_part_pairs(nodes)
    } else {
        single_part_pairs(nodes)
    };
    debug!(
        candidates = pool.len(),
        directed = E::DIRECTED,
        parts = nodes.part_count(),
        "candidate edges enumerated"
    );
    pool
}

fn single_part_pairs<E: Edge>(nodes: &NodeSet) -> Vec<E> {
    let members = nodes.parts().first().map_or(&[][..], Vec::as_slice);
    let mut pool = Vec::with_capacity(members.len() * members.len().saturating_sub(1) / 2);
    for (offset, &left) in members.iter().enumerate() {
        for &right in members.iter().skip(offset + 1) {
            push_pair(&mut pool, left, right);
        }
    }
    pool
}

fn cross_part_pairs<E: Edge>(nodes: &NodeSet) -> Vec<E> {
    let parts = nodes.parts();
    let mut pool = Vec::new();
    for (index, source_part) in parts.iter().enumerate() {
        for target_part in parts.iter().skip(index + 1) {
            for &left in source_part {
                for &right in target_part {
                    push_pair(&mut pool, left, right);
                    if E::DIRECTED {
                        push_pair(&mut pool, right, left);
                    }
                }
            }
        }
    }
    pool
}

fn push_pair<E: Edge>(pool: &mut Vec<E>, left: NodeId, right: NodeId) {
    if let Some(edge) = E::between(left, right) {
        pool.push(edge);
    }
}
