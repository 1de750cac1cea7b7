//! Unit tests for edge canonicalisation, candidate enumeration, and
//! selection.

use std::collections::BTreeSet;

use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;

use super::select::rank_by_distance;
use super::*;
use crate::{Layout, NodeSet, Partition, Point};
use crate::test_utils::{nodes_for, spec};

fn id(index: usize) -> NodeId {
    NodeId::new(index)
}

fn undirected(a: usize, b: usize) -> UndirectedEdge {
    UndirectedEdge::new(id(a), id(b)).expect("endpoints must differ")
}

fn line_nodes(xs: &[f64]) -> NodeSet {
    NodeSet::from_part_positions(vec![xs.iter().map(|&x| Point::new(x, 0.0)).collect()])
}

#[test]
fn undirected_edges_are_canonical() {
    let edge = undirected(5, 2);
    assert_eq!(edge.first(), id(2));
    assert_eq!(edge.second(), id(5));
    assert_eq!(edge, undirected(2, 5));
    assert_eq!(edge.endpoints(), (id(2), id(5)));
}

#[test]
fn directed_edges_keep_orientation() {
    let forward = DirectedEdge::new(id(1), id(3)).expect("distinct");
    let backward = DirectedEdge::new(id(3), id(1)).expect("distinct");
    assert_ne!(forward, backward);
    assert_eq!(backward.endpoints(), (id(3), id(1)));
}

#[test]
fn self_pairs_are_not_edges() {
    assert!(UndirectedEdge::new(id(4), id(4)).is_none());
    assert!(DirectedEdge::new(id(4), id(4)).is_none());
}

#[test]
fn single_part_undirected_candidates_cover_all_pairs() {
    let nodes = nodes_for(&spec(4, 1, Layout::Scatter, Partition::Random), 1);
    let pool = candidates::<UndirectedEdge>(&nodes);
    let expected: Vec<UndirectedEdge> = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        .into_iter()
        .map(|(a, b)| undirected(a, b))
        .collect();
    assert_eq!(pool, expected);
}

#[rstest]
#[case(1, 0)]
#[case(2, 1)]
#[case(5, 10)]
#[case(12, 66)]
fn single_part_directed_candidates_are_forward_only(#[case] size: usize, #[case] expected: usize) {
    let nodes = nodes_for(&spec(size, 1, Layout::Scatter, Partition::Random), 2);
    let pool = candidates::<DirectedEdge>(&nodes);
    assert_eq!(pool.len(), expected);
    assert!(pool.iter().all(|edge| edge.from() < edge.to()));
}

#[rstest]
#[case::two_parts_undirected(6, 2, false, 9)]
#[case::two_parts_directed(6, 2, true, 18)]
#[case::three_parts_undirected(6, 3, false, 12)]
#[case::three_parts_directed(6, 3, true, 24)]
fn multipart_candidates_only_cross_parts(
    #[case] size: usize,
    #[case] part_count: usize,
    #[case] directed: bool,
    #[case] expected: usize,
) {
    let nodes = nodes_for(&spec(size, part_count, Layout::Aligned, Partition::Balanced), 0);
    let pairs: Vec<(NodeId, NodeId)> = if directed {
        candidates::<DirectedEdge>(&nodes).iter().map(Edge::endpoints).collect()
    } else {
        candidates::<UndirectedEdge>(&nodes).iter().map(Edge::endpoints).collect()
    };
    assert_eq!(pairs.len(), expected);
    let distinct: BTreeSet<_> = pairs.iter().copied().collect();
    assert_eq!(distinct.len(), pairs.len());
    for (a, b) in pairs {
        assert_ne!(nodes.part_of(a), nodes.part_of(b));
    }
}

#[test]
fn complete_selection_keeps_every_candidate() {
    let nodes = nodes_for(&spec(6, 1, Layout::Scatter, Partition::Random), 4);
    let pool = candidates::<UndirectedEdge>(&nodes);
    let expected: BTreeSet<_> = pool.iter().copied().collect();
    let mut rng = SmallRng::seed_from_u64(0);
    let chosen = select(pool, &nodes, Selection::Complete, &mut rng).expect("complete selection");
    assert_eq!(chosen, expected);
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(15)]
fn random_selection_draws_exact_order(#[case] order: usize) {
    let nodes = nodes_for(&spec(6, 1, Layout::Scatter, Partition::Random), 8);
    let pool = candidates::<DirectedEdge>(&nodes);
    let allowed: BTreeSet<_> = pool.iter().copied().collect();
    let mut rng = SmallRng::seed_from_u64(order as u64);
    let chosen = select(pool, &nodes, Selection::Random { order }, &mut rng).expect("selection");
    assert_eq!(chosen.len(), order);
    assert!(chosen.is_subset(&allowed));
}

#[test]
fn random_selection_caps_order_at_pool_size() {
    let nodes = nodes_for(&spec(4, 1, Layout::Scatter, Partition::Random), 8);
    let pool = candidates::<UndirectedEdge>(&nodes);
    let mut rng = SmallRng::seed_from_u64(1);
    let chosen =
        select(pool, &nodes, Selection::Random { order: 1000 }, &mut rng).expect("selection");
    assert_eq!(chosen.len(), 6);
}

#[test]
fn random_selection_over_empty_pool_is_empty() {
    let nodes = nodes_for(&spec(1, 1, Layout::Scatter, Partition::Random), 8);
    let pool = candidates::<UndirectedEdge>(&nodes);
    let mut rng = SmallRng::seed_from_u64(1);
    let chosen = select(pool, &nodes, Selection::Random { order: 3 }, &mut rng).expect("selection");
    assert!(chosen.is_empty());
}

#[test]
fn random_selection_rejects_zero_order() {
    let nodes = nodes_for(&spec(4, 1, Layout::Scatter, Partition::Random), 8);
    let pool = candidates::<UndirectedEdge>(&nodes);
    let mut rng = SmallRng::seed_from_u64(1);
    let err = select(pool, &nodes, Selection::Random { order: 0 }, &mut rng)
        .expect_err("zero order must fail");
    assert_eq!(err.field(), Some("order"));
}

#[test]
fn nearest_selection_rejects_directed_edges() {
    let nodes = nodes_for(&spec(4, 1, Layout::Scatter, Partition::Random), 8);
    let pool = candidates::<DirectedEdge>(&nodes);
    let mut rng = SmallRng::seed_from_u64(1);
    let err = select(
        pool,
        &nodes,
        Selection::Nearest {
            allow_isolated: false,
        },
        &mut rng,
    )
    .expect_err("directed nearest must fail");
    assert_eq!(err.field(), Some("selection"));
}

#[test]
fn ranking_breaks_distance_ties_by_lower_id() {
    let nodes = NodeSet::from_part_positions(vec![vec![
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(-1.0, 0.0),
        Point::new(0.0, 1.0),
    ]]);
    let ranked = rank_by_distance(Point::new(0.0, 0.0), &[id(3), id(1), id(2)], &nodes);
    assert_eq!(ranked, vec![id(2), id(3), id(1)]);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
fn nearest_selection_links_each_node_to_its_closest(#[case] seed: u64) {
    let nodes = line_nodes(&[0.0, 1.0, 100.0]);
    let pool = candidates::<UndirectedEdge>(&nodes);
    let mut rng = SmallRng::seed_from_u64(seed);
    let chosen = select(
        pool,
        &nodes,
        Selection::Nearest {
            allow_isolated: false,
        },
        &mut rng,
    )
    .expect("selection");
    assert!(chosen.contains(&undirected(0, 1)));
    assert!(chosen.contains(&undirected(1, 2)));
}

#[rstest]
fn linked_pair_always_connects() {
    let nodes = line_nodes(&[0.0, 5.0]);
    for seed in 0..8 {
        let pool = candidates::<UndirectedEdge>(&nodes);
        let mut rng = SmallRng::seed_from_u64(seed);
        let chosen = select(
            pool,
            &nodes,
            Selection::Nearest {
                allow_isolated: false,
            },
            &mut rng,
        )
        .expect("selection");
        assert_eq!(chosen.len(), 1);
    }
}

#[rstest]
fn isolated_pair_links_for_some_seeds_only() {
    let nodes = line_nodes(&[0.0, 5.0]);
    let linked = (0..64)
        .filter(|&seed| {
            let pool = candidates::<UndirectedEdge>(&nodes);
            let mut rng = SmallRng::seed_from_u64(seed);
            let chosen = select(
                pool,
                &nodes,
                Selection::Nearest {
                    allow_isolated: true,
                },
                &mut rng,
            )
            .expect("selection");
            assert!(chosen.len() <= 1);
            !chosen.is_empty()
        })
        .count();
    assert!(linked > 0, "a pair must be able to link");
    assert!(linked < 64, "both nodes may draw a zero degree");
}

#[rstest]
#[case(11)]
#[case(12)]
#[case(13)]
fn nearest_selection_touches_every_node(#[case] seed: u64) {
    let nodes = nodes_for(&spec(20, 1, Layout::Scatter, Partition::Random), seed);
    let pool = candidates::<UndirectedEdge>(&nodes);
    let mut rng = SmallRng::seed_from_u64(seed);
    let chosen = select(
        pool,
        &nodes,
        Selection::Nearest {
            allow_isolated: false,
        },
        &mut rng,
    )
    .expect("selection");
    for node in nodes.nodes() {
        assert!(
            chosen
                .iter()
                .any(|edge| edge.first() == node.id() || edge.second() == node.id()),
            "node {} has no edge",
            node.id().get()
        );
    }
}

#[rstest]
#[case(21)]
#[case(22)]
fn nearest_selection_respects_parts(#[case] seed: u64) {
    let nodes = nodes_for(&spec(18, 3, Layout::Scatter, Partition::Random), seed);
    let pool = candidates::<UndirectedEdge>(&nodes);
    let mut rng = SmallRng::seed_from_u64(seed);
    let chosen = select(
        pool,
        &nodes,
        Selection::Nearest {
            allow_isolated: true,
        },
        &mut rng,
    )
    .expect("selection");
    for edge in chosen {
        assert_ne!(nodes.part_of(edge.first()), nodes.part_of(edge.second()));
    }
}
