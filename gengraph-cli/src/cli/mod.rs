//! Command-line interface for the graph generator.
//!
//! The `generate` command maps flags onto a [`gengraph_core::GraphBuilder`],
//! runs one generation, and prints the node table and edge list.

mod commands;

pub use commands::{
    Cli, CliError, Command, GenerateCommand, GenerationSummary, KindArg, LayoutArg, PartitionArg,
    SelectionArg, render_summary, run_cli,
};
