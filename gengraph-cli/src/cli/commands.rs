//! Command implementations and argument parsing for the gengraph CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use gengraph_core::{
    EdgeSet, Graph, GraphBuilder, GraphError, GraphKind, Layout, Partition, Selection,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "gengraph", about = "Generate randomised graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate one graph and print its nodes and edges.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
///
/// Unset options fall back to the `--kind` preset when one is given, and to
/// the builder defaults otherwise.
#[derive(Debug, Args, Clone, Default)]
pub struct GenerateCommand {
    /// Start from a named preset.
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,

    /// Total number of nodes.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub size: Option<usize>,

    /// Number of parts; edges only join nodes of different parts when above 1.
    #[arg(long = "parts", value_parser = clap::value_parser!(usize))]
    pub parts: Option<usize>,

    /// Node position strategy.
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// How nodes are spread over parts.
    #[arg(long, value_enum)]
    pub partition: Option<PartitionArg>,

    /// Emit directed edges.
    #[arg(long)]
    pub directed: bool,

    /// Edge selection strategy.
    #[arg(long, value_enum)]
    pub selection: Option<SelectionArg>,

    /// Number of edges kept by random selection.
    #[arg(long, required_if_eq("selection", "random"))]
    pub order: Option<usize>,

    /// Let nearest selection leave nodes without edges. Rejected with any
    /// other selection.
    #[arg(long)]
    pub allow_isolated: bool,

    /// Canvas width.
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height.
    #[arg(long)]
    pub height: Option<f64>,

    /// Margin kept between aligned layouts and the canvas edge.
    #[arg(long)]
    pub margin: Option<f64>,

    /// Seed for reproducible output; a fresh seed is drawn when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Graph kind presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Nearest-neighbour edges; nodes may stay isolated.
    Sparse,
    /// Nearest-neighbour edges; every node draws at least one edge.
    Linked,
    /// Two balanced parts joined by nearest-neighbour edges.
    Bipartite,
    /// Every pair connected.
    Complete,
}

impl From<KindArg> for GraphKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Sparse => Self::Sparse,
            KindArg::Linked => Self::Linked,
            KindArg::Bipartite => Self::Bipartite,
            KindArg::Complete => Self::Complete,
        }
    }
}

/// Node position strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// Uniform random positions.
    Scatter,
    /// Circle or polygon sides.
    Aligned,
}

impl From<LayoutArg> for Layout {
    fn from(layout: LayoutArg) -> Self {
        match layout {
            LayoutArg::Scatter => Self::Scatter,
            LayoutArg::Aligned => Self::Aligned,
        }
    }
}

/// Part assignment strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PartitionArg {
    /// Uniform random part per node.
    Random,
    /// Round-robin assignment.
    Balanced,
}

impl From<PartitionArg> for Partition {
    fn from(partition: PartitionArg) -> Self {
        match partition {
            PartitionArg::Random => Self::Random,
            PartitionArg::Balanced => Self::Balanced,
        }
    }
}

/// Edge selection strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectionArg {
    /// Keep every admissible edge.
    Complete,
    /// Keep `--order` admissible edges chosen uniformly.
    Random,
    /// Link nodes to their nearest admissible neighbours.
    Nearest,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Random selection was requested without an edge count.
    #[error("`--order` is required when `--selection random` is used")]
    MissingOrder,
    /// `--allow-isolated` was given but the effective selection is not
    /// nearest.
    #[error("`--allow-isolated` only applies to nearest selection, not `{selection}`")]
    IsolatedWithoutNearest {
        /// Name of the selection in effect.
        selection: &'static str,
    },
    /// Core generation failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Outcome of a CLI command.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Preset the command started from, if any.
    pub kind: Option<GraphKind>,
    /// Generated graph, including the seed that produced it.
    pub graph: Graph,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the options are inconsistent or the generator
/// rejects them.
///
/// # Examples
/// ```
/// # use gengraph_cli::cli::{Cli, Command, GenerateCommand, SelectionArg, run_cli};
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         size: Some(4),
///         selection: Some(SelectionArg::Complete),
///         seed: Some(1),
///         ..GenerateCommand::default()
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.graph.edge_count(), 6);
/// # Ok::<(), gengraph_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<GenerationSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_command(generate)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(kind = field::Empty, seed = field::Empty),
)]
pub(super) fn run_command(command: GenerateCommand) -> Result<GenerationSummary, CliError> {
    let kind = command.kind.map(GraphKind::from);
    let span = Span::current();
    span.record(
        "kind",
        field::display(kind.map_or("<custom>", GraphKind::name)),
    );

    let generator = configure(&command, kind)?.build()?;
    let graph = generator.generate()?;
    if let Some(seed) = graph.seed() {
        span.record("seed", seed);
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        directed = graph.is_directed(),
        "command completed"
    );
    Ok(GenerationSummary { kind, graph })
}

/// Layers the explicit flags over the preset (or default) builder.
pub(super) fn configure(
    command: &GenerateCommand,
    kind: Option<GraphKind>,
) -> Result<GraphBuilder, CliError> {
    let mut builder = kind.map_or_else(GraphBuilder::new, GraphBuilder::for_kind);

    if let Some(size) = command.size {
        builder = builder.with_size(size);
    }
    if let Some(parts) = command.parts {
        builder = builder.with_parts(parts);
    }
    if let Some(layout) = command.layout {
        builder = builder.with_layout(layout.into());
    }
    if let Some(partition) = command.partition {
        builder = builder.with_partition(partition.into());
    }
    if command.directed {
        builder = builder.with_directed(true);
    }

    let selection = match command.selection {
        Some(SelectionArg::Complete) => Selection::Complete,
        Some(SelectionArg::Random) => Selection::Random {
            order: command.order.ok_or(CliError::MissingOrder)?,
        },
        Some(SelectionArg::Nearest) => Selection::Nearest {
            allow_isolated: command.allow_isolated,
        },
        None => match builder.selection() {
            Selection::Nearest { allow_isolated } => Selection::Nearest {
                allow_isolated: allow_isolated || command.allow_isolated,
            },
            preset => preset,
        },
    };
    if command.allow_isolated && !matches!(selection, Selection::Nearest { .. }) {
        return Err(CliError::IsolatedWithoutNearest {
            selection: selection.name(),
        });
    }
    builder = builder.with_selection(selection);

    let canvas = builder.canvas();
    builder = builder.with_canvas(
        command.width.unwrap_or(canvas.width()),
        command.height.unwrap_or(canvas.height()),
    );
    if let Some(margin) = command.margin {
        builder = builder.with_margin(margin);
    }

    Ok(builder.with_seed(command.seed))
}

/// Renders `summary` to `writer` as tab-separated text.
///
/// The header lists the seed and counts; one `node` line per node gives its
/// id, part, and position, and one `edge` line per edge gives its endpoints
/// (tail first for directed graphs).
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::io::Cursor;
/// # use gengraph_cli::cli::{GenerationSummary, render_summary};
/// # use gengraph_core::{GraphBuilder, Layout, Selection};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let graph = GraphBuilder::new()
///     .with_size(2)
///     .with_layout(Layout::Aligned)
///     .with_selection(Selection::Complete)
///     .with_seed(Some(5))
///     .build()?
///     .generate()?;
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&GenerationSummary { kind: None, graph }, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.starts_with("seed: 5\n"));
/// assert!(text.ends_with("edge\t0\t1\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &GenerationSummary, mut writer: impl Write) -> io::Result<()> {
    let graph = &summary.graph;
    if let Some(seed) = graph.seed() {
        writeln!(writer, "seed: {seed}")?;
    }
    if let Some(kind) = summary.kind {
        writeln!(writer, "kind: {}", kind.name())?;
    }
    let orientation = match graph.edges() {
        EdgeSet::Undirected(_) => "undirected",
        EdgeSet::Directed(_) => "directed",
    };
    writeln!(
        writer,
        "nodes: {} in {} part(s)",
        graph.node_count(),
        graph.nodes().part_count()
    )?;
    writeln!(writer, "edges: {} ({orientation})", graph.edge_count())?;
    for node in graph.nodes().nodes() {
        let position = node.position();
        writeln!(
            writer,
            "node\t{}\t{}\t{:.3}\t{:.3}",
            node.id().get(),
            node.part().get(),
            position.x,
            position.y
        )?;
    }
    for (from, to) in graph.edges().endpoints() {
        writeln!(writer, "edge\t{}\t{}", from.get(), to.get())?;
    }
    Ok(())
}
