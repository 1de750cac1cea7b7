//! Benchmark support crate for gengraph.
//!
//! Provides parameter types and generator setup shared by the Criterion
//! benchmarks for the generation pipeline and its candidate stage.

pub mod error;
pub mod params;
