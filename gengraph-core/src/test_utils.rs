//! Shared test utilities for `gengraph-core`.

use gengraph_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;
use rand::{SeedableRng, rngs::SmallRng};

use crate::{Canvas, Layout, NodeSet, NodeSpec, Partition, build_nodes};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Node-table spec on the default canvas.
#[must_use]
pub(crate) fn spec(size: usize, part_count: usize, layout: Layout, partition: Partition) -> NodeSpec {
    NodeSpec {
        size,
        part_count,
        layout,
        partition,
        canvas: Canvas::default(),
    }
}

/// Builds a node table from `spec`, panicking on invalid input.
pub(crate) fn nodes_for(spec: &NodeSpec, seed: u64) -> NodeSet {
    let mut rng = SmallRng::seed_from_u64(seed);
    match build_nodes(spec, &mut rng) {
        Ok(nodes) => nodes,
        Err(err) => panic!("test node spec must be valid: {err}"),
    }
}
