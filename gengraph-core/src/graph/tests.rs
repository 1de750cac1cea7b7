//! Unit tests for graph assembly and the derived neighbour table.

use std::collections::BTreeSet;

use rstest::{fixture, rstest};

use super::*;
use crate::Point;

fn id(index: usize) -> NodeId {
    NodeId::new(index)
}

fn undirected(pairs: &[(usize, usize)]) -> EdgeSet {
    EdgeSet::Undirected(
        pairs
            .iter()
            .filter_map(|&(a, b)| UndirectedEdge::new(id(a), id(b)))
            .collect::<BTreeSet<_>>(),
    )
}

fn directed(pairs: &[(usize, usize)]) -> EdgeSet {
    EdgeSet::Directed(
        pairs
            .iter()
            .filter_map(|&(a, b)| DirectedEdge::new(id(a), id(b)))
            .collect::<BTreeSet<_>>(),
    )
}

fn row(count: usize) -> Vec<Point> {
    (0..count).map(|x| Point::new(x as f64, 0.0)).collect()
}

#[fixture]
fn single_part() -> NodeSet {
    NodeSet::from_part_positions(vec![row(5)])
}

/// Part 0 holds nodes 0 and 1; part 1 holds nodes 2, 3, and 4.
#[fixture]
fn two_parts() -> NodeSet {
    NodeSet::from_part_positions(vec![row(2), row(3)])
}

#[rstest]
fn assemble_accepts_well_formed_edges(single_part: NodeSet) {
    let graph = Graph::assemble(single_part, undirected(&[(0, 1), (3, 1), (2, 4)]))
        .expect("edges are well formed");
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 3);
    assert!(!graph.is_directed());
    assert_eq!(graph.seed(), None);
    assert!(graph.edges().contains(id(1), id(3)));
    assert!(graph.edges().contains(id(3), id(1)));
}

#[rstest]
fn assemble_rejects_missing_endpoint(single_part: NodeSet) {
    let err = Graph::assemble(single_part, undirected(&[(0, 1), (2, 9)]))
        .expect_err("node 9 does not exist");
    match &err {
        GraphError::InvariantViolation { from, to, .. } => assert_eq!((*from, *to), (2, 9)),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.code().as_str(), "GRAPH_INVARIANT_VIOLATION");
}

#[rstest]
fn assemble_rejects_same_part_edges(two_parts: NodeSet) {
    let err = Graph::assemble(two_parts, undirected(&[(0, 2), (3, 4)]))
        .expect_err("nodes 3 and 4 share a part");
    assert!(matches!(
        err,
        GraphError::InvariantViolation { from: 3, to: 4, .. }
    ));
}

#[rstest]
fn assemble_accepts_cross_part_directed_edges(two_parts: NodeSet) {
    let graph = Graph::assemble(two_parts, directed(&[(4, 0), (0, 4), (1, 2)]))
        .expect("every edge crosses parts");
    assert!(graph.is_directed());
    assert!(graph.edges().contains(id(4), id(0)));
    assert!(!graph.edges().contains(id(2), id(1)));
}

#[rstest]
fn undirected_adjacency_is_symmetric(single_part: NodeSet) {
    let graph = Graph::assemble(single_part, undirected(&[(0, 3), (0, 1), (1, 3)]))
        .expect("edges are well formed");
    let adjacency = graph.adjacency();
    assert_eq!(adjacency.neighbours(id(0)), &[id(1), id(3)]);
    assert_eq!(adjacency.neighbours(id(3)), &[id(0), id(1)]);
    assert_eq!(adjacency.degree(id(1)), 2);
    assert_eq!(adjacency.in_degree(id(1)), 2);
    assert_eq!(adjacency.isolated_count(), 2);
}

#[rstest]
fn directed_adjacency_tracks_out_and_in_edges(single_part: NodeSet) {
    let graph = Graph::assemble(single_part, directed(&[(0, 2), (1, 2), (2, 0)]))
        .expect("edges are well formed");
    let adjacency = graph.adjacency();
    assert_eq!(adjacency.neighbours(id(0)), &[id(2)]);
    assert_eq!(adjacency.neighbours(id(2)), &[id(0)]);
    assert_eq!(adjacency.in_degree(id(2)), 2);
    assert_eq!(adjacency.in_degree(id(1)), 0);
    assert_eq!(adjacency.isolated_count(), 2);
}

#[rstest]
fn adjacency_of_unknown_node_is_empty(single_part: NodeSet) {
    let graph = Graph::assemble(single_part, undirected(&[])).expect("empty edge set");
    assert!(graph.adjacency().neighbours(id(42)).is_empty());
    assert_eq!(graph.adjacency().in_degree(id(42)), 0);
    assert_eq!(graph.adjacency().isolated_count(), 5);
    assert!(graph.edges().is_empty());
}

#[rstest]
fn edge_views_report_endpoint_parts(two_parts: NodeSet) {
    let graph = Graph::assemble(two_parts, undirected(&[(1, 4), (0, 2)]))
        .expect("every edge crosses parts");
    let views: Vec<EdgeView> = graph.edge_views().collect();
    assert_eq!(
        views,
        vec![
            EdgeView {
                from: id(0),
                to: id(2),
                from_part: PartId::new(0),
                to_part: PartId::new(1),
            },
            EdgeView {
                from: id(1),
                to: id(4),
                from_part: PartId::new(0),
                to_part: PartId::new(1),
            },
        ]
    );
}

#[test]
fn endpoints_iterate_in_edge_order() {
    let edges = undirected(&[(3, 2), (0, 4), (0, 1)]);
    let pairs: Vec<_> = edges.endpoints().collect();
    assert_eq!(pairs, vec![(id(0), id(1)), (id(0), id(4)), (id(2), id(3))]);
    assert_eq!(edges.endpoints().size_hint(), (3, Some(3)));
}
