//! Shared test utilities used across gengraph crates.
//!
//! [`tracing`] captures spans and events so suites can assert on
//! instrumentation; [`ci`] reads the environment knobs that tune
//! property-based suites.

pub mod ci;
pub mod tracing;
