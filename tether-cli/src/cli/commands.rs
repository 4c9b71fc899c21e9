//! Command implementations and argument parsing for the tether CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tether_core::{
    ComponentSizes, ConnectingEdge, ConnectivityError, Engine, EngineBuilder, ExecutionStrategy,
    Point,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::{InputError, parse_points};

const DEFAULT_TOP: usize = 3;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "tether",
    about = "Connect points by ascending squared Euclidean distance."
)]
pub struct Cli {
    /// How pairwise distances are computed.
    #[arg(long, value_enum, global = true, default_value_t = Strategy::Auto)]
    pub strategy: Strategy,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Apply the shortest edges and report component sizes.
    Components(ComponentsCommand),
    /// Find the edge that first connects every point.
    Connect(ConnectCommand),
}

/// Options accepted by the `components` command.
#[derive(Debug, Args, Clone)]
pub struct ComponentsCommand {
    /// Coordinate file, one comma-separated point per line.
    pub path: PathBuf,

    /// Number of shortest edges to apply.
    #[arg(long = "edges", value_parser = clap::value_parser!(usize))]
    pub edges: usize,

    /// How many of the largest components to multiply.
    #[arg(long, default_value_t = DEFAULT_TOP)]
    pub top: usize,
}

/// Options accepted by the `connect` command.
#[derive(Debug, Args, Clone)]
pub struct ConnectCommand {
    /// Coordinate file, one comma-separated point per line.
    pub path: PathBuf,
}

/// Execution strategies selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Let the engine choose.
    #[default]
    Auto,
    /// Single-threaded distance computation.
    Sequential,
    /// Distance computation on the rayon pool.
    Parallel,
}

impl From<Strategy> for ExecutionStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Auto => Self::Auto,
            Strategy::Sequential => Self::Sequential,
            Strategy::Parallel => Self::Parallel,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file was malformed.
    #[error("invalid input in `{path}`: {source}")]
    Input {
        /// Path of the malformed file.
        path: PathBuf,
        /// Line-level parse failure.
        #[source]
        source: InputError,
    },
    /// The engine rejected the configuration or the query failed.
    #[error(transparent)]
    Core(#[from] ConnectivityError),
}

/// Result of the `components` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentsSummary {
    /// Number of points read from the input.
    pub points: usize,
    /// Edge limit requested on the command line.
    pub edges: usize,
    /// How many of the largest sizes are multiplied.
    pub top: usize,
    /// Component sizes, largest first.
    pub sizes: ComponentSizes,
}

impl ComponentsSummary {
    /// Product of the `top` largest sizes, or `None` on overflow.
    #[must_use]
    pub fn product(&self) -> Option<u128> {
        self.sizes.product_of_largest(self.top)
    }
}

/// Result of the `connect` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectSummary {
    /// Number of points read from the input.
    pub points: usize,
    /// The edge that first connected every point.
    pub connecting: ConnectingEdge,
}

impl ConnectSummary {
    /// Product of the first coordinates of both endpoints.
    ///
    /// Returns `None` for zero-dimensional points.
    #[must_use]
    pub fn first_coordinate_product(&self) -> Option<i128> {
        let left = self.connecting.left().coords().first()?;
        let right = self.connecting.right().coords().first()?;
        Some(i128::from(*left) * i128::from(*right))
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionSummary {
    /// Output of `components`.
    Components(ComponentsSummary),
    /// Output of `connect`.
    Connect(ConnectSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or the query fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use tether_cli::cli::{Cli, Command, ComponentsCommand, ExecutionSummary, Strategy, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0,0\n0,1\n9,9\n")?;
/// let cli = Cli {
///     strategy: Strategy::Sequential,
///     command: Command::Components(ComponentsCommand {
///         path: file.path().to_path_buf(),
///         edges: 1,
///         top: 3,
///     }),
/// };
/// let ExecutionSummary::Components(summary) = run_cli(cli)? else {
///     unreachable!("components command yields a components summary");
/// };
/// assert_eq!(summary.sizes.as_slice(), &[2, 1]);
/// assert_eq!(summary.product(), Some(2));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty, strategy = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    span.record("strategy", field::debug(cli.strategy));
    let engine = EngineBuilder::new()
        .with_execution_strategy(cli.strategy.into())
        .build()?;

    match cli.command {
        Command::Components(command) => {
            span.record("command", field::display("components"));
            run_components(&engine, &command).map(ExecutionSummary::Components)
        }
        Command::Connect(command) => {
            span.record("command", field::display("connect"));
            run_connect(&engine, &command).map(ExecutionSummary::Connect)
        }
    }
}

#[instrument(
    name = "cli.components",
    err,
    skip(engine, command),
    fields(path = %command.path.display(), edges = command.edges, top = command.top),
)]
pub(super) fn run_components(
    engine: &Engine,
    command: &ComponentsCommand,
) -> Result<ComponentsSummary, CliError> {
    let points = load_points(&command.path)?;
    let sizes = engine.bounded_components(&points, command.edges)?;
    info!(
        components = sizes.len(),
        largest = sizes.as_slice().first().copied().unwrap_or_default(),
        "components command completed"
    );
    Ok(ComponentsSummary {
        points: points.len(),
        edges: command.edges,
        top: command.top,
        sizes,
    })
}

#[instrument(
    name = "cli.connect",
    err,
    skip(engine, command),
    fields(path = %command.path.display()),
)]
pub(super) fn run_connect(
    engine: &Engine,
    command: &ConnectCommand,
) -> Result<ConnectSummary, CliError> {
    let points = load_points(&command.path)?;
    let connecting = engine.first_fully_connecting_edge(&points)?;
    info!(
        edges_examined = connecting.edges_examined(),
        "connect command completed"
    );
    Ok(ConnectSummary {
        points: points.len(),
        connecting,
    })
}

#[instrument(
    name = "cli.load_points",
    err,
    skip(path),
    fields(path = %path.display(), points = field::Empty),
)]
pub(super) fn load_points(path: &Path) -> Result<Vec<Point>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let points = parse_points(BufReader::new(file)).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    Span::current().record("points", points.len());
    Ok(points)
}

/// Renders `summary` to `writer` as `key: value` lines.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use tether_cli::cli::{ComponentsSummary, ExecutionSummary, render_summary};
/// # use tether_core::ComponentSizes;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Components(ComponentsSummary {
///     points: 6,
///     edges: 3,
///     top: 2,
///     sizes: ComponentSizes::from_sizes(vec![1, 3, 2]),
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "components: 3\nsizes: 3,2,1\nproduct of 2 largest: 6\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Components(components) => {
            let sizes: Vec<String> = components.sizes.iter().map(|size| size.to_string()).collect();
            writeln!(writer, "components: {}", components.sizes.len())?;
            writeln!(writer, "sizes: {}", sizes.join(","))?;
            match components.product() {
                Some(product) => {
                    writeln!(writer, "product of {} largest: {product}", components.top)?;
                }
                None => writeln!(writer, "product of {} largest: overflow", components.top)?,
            }
        }
        ExecutionSummary::Connect(connect) => {
            let edge = &connect.connecting;
            writeln!(writer, "left: {}", edge.left())?;
            writeln!(writer, "right: {}", edge.right())?;
            writeln!(writer, "squared distance: {}", edge.edge().distance())?;
            writeln!(writer, "edges examined: {}", edge.edges_examined())?;
            match connect.first_coordinate_product() {
                Some(product) => writeln!(writer, "first coordinate product: {product}")?,
                None => writeln!(writer, "first coordinate product: n/a")?,
            }
        }
    }
    Ok(())
}
