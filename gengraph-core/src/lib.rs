//! Gengraph core library.
//!
//! Generates randomised graphs: nodes are split into parts and positioned on
//! a canvas, admissible edges are enumerated for the requested topology, and
//! a selection strategy reduces them to the final edge set.
//!
//! # Determinism
//!
//! All randomness flows through one RNG handle per generation. Given the same
//! configuration and seed, [`GraphGenerator::generate`] returns identical
//! positions and edges. Nearest-neighbour ties are broken by the lower
//! [`NodeId`].
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled each generation emits:
//!
//! - `graph_generations_total` (counter)
//! - `graph_candidate_edges` (histogram)
//! - `graph_selected_edges` (histogram)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod edges;
mod error;
mod generator;
mod geometry;
mod graph;
mod nodes;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    builder::{GraphBuilder, GraphKind},
    edges::{DirectedEdge, Edge, Selection, UndirectedEdge, candidates, select},
    error::{GraphError, GraphErrorCode, Result},
    generator::GraphGenerator,
    geometry::{Canvas, Point},
    graph::{Adjacency, EdgeSet, EdgeView, Endpoints, Graph},
    nodes::{Layout, Node, NodeId, NodeSet, NodeSpec, PartId, Partition, build_nodes},
};
