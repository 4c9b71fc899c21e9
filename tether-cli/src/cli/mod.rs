//! Command-line interface orchestration for the tether engine.
//!
//! Two commands read a coordinate file and run one query each:
//! `components` applies a bounded number of shortest edges and reports the
//! component sizes, `connect` reports the edge that first joins every point.

mod commands;
mod input;

pub use commands::{
    Cli, CliError, Command, ComponentsCommand, ComponentsSummary, ConnectCommand, ConnectSummary,
    ExecutionSummary, Strategy, render_summary, run_cli,
};
pub use input::{InputError, parse_points};

#[cfg(test)]
mod tests;
