//! Support library for the gengraph CLI binary.
//!
//! Exposes argument parsing, command execution, and logging setup so tests
//! can drive the generator without spawning a subprocess.

pub mod cli;
pub mod logging;
