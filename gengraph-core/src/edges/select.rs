//! Reduction of a candidate pool to the final edge set.

use std::{cmp::Ordering, collections::BTreeSet};

use rand::Rng;
use tracing::{debug, instrument};

use crate::{GraphError, NodeId, NodeSet, Point, Result};

use super::Edge;

/// Strategy used to reduce candidate edges to the final edge set.
///
/// # Examples
/// ```
/// use gengraph_core::Selection;
///
/// assert_eq!(Selection::Random { order: 3 }.name(), "random");
/// assert_eq!(Selection::default(), Selection::Nearest { allow_isolated: false });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Keep every candidate.
    Complete,
    /// Keep `order` candidates drawn uniformly without replacement. Requests
    /// above the pool size keep the whole pool.
    Random {
        /// Number of edges to keep; must be at least 1.
        order: usize,
    },
    /// Link each node to a random number of its nearest eligible nodes.
    ///
    /// The per-node degree is drawn uniformly from `[1, 1 + eligible/2]`, or
    /// from `[0, (eligible + 1)/2]` when `allow_isolated` is set. Undirected
    /// graphs only.
    Nearest {
        /// Permit nodes to draw a degree of zero.
        allow_isolated: bool,
    },
}

impl Default for Selection {
    fn default() -> Self {
        Self::Nearest {
            allow_isolated: false,
        }
    }
}

impl Selection {
    /// Short lowercase label used in logs and CLI output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Random { .. } => "random",
            Self::Nearest { .. } => "nearest",
        }
    }

    /// Checks the strategy against the graph it will run on.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidConfiguration`] naming `order` when a
    /// random selection asks for zero edges or the graph can hold none
    /// (`size < 2`), and naming `selection` when nearest selection is paired
    /// with a directed graph.
    pub fn validate(&self, size: usize, directed: bool) -> Result<()> {
        match *self {
            Self::Complete => Ok(()),
            Self::Random { order } => {
                if order == 0 {
                    return Err(GraphError::invalid("order", "order must be at least 1 (got 0)"));
                }
                if size < 2 {
                    return Err(GraphError::invalid(
                        "order",
                        format!("order must be in [1, 0]: a graph of {size} node(s) has no edges"),
                    ));
                }
                Ok(())
            }
            Self::Nearest { .. } if directed => Err(GraphError::invalid(
                "selection",
                "nearest selection requires an undirected graph",
            )),
            Self::Nearest { .. } => Ok(()),
        }
    }
}

/// Reduces `candidates` to the final edge set using `selection`.
///
/// Nearest selection ranks, for every node, the nodes it shares a candidate
/// edge with, so part constraints carry over unchanged. Ties in distance
/// fall back to the lower [`NodeId`].
///
/// # Errors
/// Returns [`GraphError::InvalidConfiguration`] for a zero `order` or for
/// nearest selection over directed edges. An empty candidate pool is not an
/// error: it yields an empty set.
///
/// # Examples
/// ```
/// use gengraph_core::{
///     Canvas, Layout, NodeSpec, Partition, Selection, UndirectedEdge, build_nodes, candidates,
///     select,
/// };
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(11);
/// let spec = NodeSpec {
///     size: 4,
///     part_count: 1,
///     layout: Layout::Scatter,
///     partition: Partition::Random,
///     canvas: Canvas::default(),
/// };
/// let nodes = build_nodes(&spec, &mut rng)?;
/// let pool = candidates::<UndirectedEdge>(&nodes);
/// let edges = select(pool, &nodes, Selection::Random { order: 1000 }, &mut rng)?;
/// assert_eq!(edges.len(), 6);
/// # Ok::<(), gengraph_core::GraphError>(())
/// ```
#[instrument(
    name = "core.select",
    err,
    skip(candidates, nodes, rng),
    fields(strategy = selection.name(), candidates = candidates.len()),
)]
pub fn select<E: Edge, R: Rng + ?Sized>(
    candidates: Vec<E>,
    nodes: &NodeSet,
    selection: Selection,
    rng: &mut R,
) -> Result<BTreeSet<E>> {
    let chosen = match selection {
        Selection::Complete => candidates.into_iter().collect(),
        Selection::Random { order } => {
            if order == 0 {
                return Err(GraphError::invalid("order", "order must be at least 1 (got 0)"));
            }
            random_subset(candidates, order, rng)
        }
        Selection::Nearest { allow_isolated } => {
            if E::DIRECTED {
                return Err(GraphError::invalid(
                    "selection",
                    "nearest selection requires an undirected graph",
                ));
            }
            nearest_neighbours(&candidates, nodes, allow_isolated, rng)
        }
    };
    debug!(selected = chosen.len(), "edges selected");
    Ok(chosen)
}

fn random_subset<E: Edge, R: Rng + ?Sized>(
    mut pool: Vec<E>,
    order: usize,
    rng: &mut R,
) -> BTreeSet<E> {
    let target = order.min(pool.len());
    let mut chosen = BTreeSet::new();
    while chosen.len() < target && !pool.is_empty() {
        let pick = rng.gen_range(0..pool.len());
        chosen.insert(pool.swap_remove(pick));
    }
    chosen
}

/// Node ranked by distance from the node currently drawing its edges.
#[derive(Clone, Copy, Debug)]
struct Ranked {
    id: NodeId,
    distance: f64,
}

impl Ranked {
    fn compare(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.id.cmp(&other.id))
    }
}

fn nearest_neighbours<E: Edge, R: Rng + ?Sized>(
    candidates: &[E],
    nodes: &NodeSet,
    allow_isolated: bool,
    rng: &mut R,
) -> BTreeSet<E> {
    let mut eligible: Vec<Vec<NodeId>> = vec![Vec::new(); nodes.len()];
    for edge in candidates {
        let (left, right) = edge.endpoints();
        if let Some(list) = eligible.get_mut(left.get()) {
            list.push(right);
        }
        if let Some(list) = eligible.get_mut(right.get()) {
            list.push(left);
        }
    }

    let mut chosen = BTreeSet::new();
    for (node, others) in nodes.nodes().iter().zip(&eligible) {
        if others.is_empty() {
            continue;
        }
        let ranked = rank_by_distance(node.position(), others, nodes);
        // Isolated ceiling counts the node itself.
        let degree = if allow_isolated {
            rng.gen_range(0..=(others.len() + 1) / 2)
        } else {
            rng.gen_range(1..=others.len() / 2 + 1)
        };
        for &neighbour in ranked.iter().take(degree) {
            if let Some(edge) = E::between(node.id(), neighbour) {
                chosen.insert(edge);
            }
        }
    }
    chosen
}

/// Orders `others` by distance from `origin`, nearest first, breaking ties
/// by the lower id.
pub(super) fn rank_by_distance(origin: Point, others: &[NodeId], nodes: &NodeSet) -> Vec<NodeId> {
    let mut ranked = others
        .iter()
        .filter_map(|&id| {
            nodes.position(id).map(|position| Ranked {
                id,
                distance: origin.distance_to(position),
            })
        })
        .collect::<Vec<_>>();
    ranked.sort_by(Ranked::compare);
    ranked.into_iter().map(|entry| entry.id).collect()
}
