//! Unit tests for the CLI commands and coordinate parsing.

use super::commands::load_points;
use super::{
    Cli, CliError, Command, ComponentsCommand, ComponentsSummary, ConnectCommand, ExecutionSummary,
    InputError, Strategy, parse_points, render_summary, run_cli,
};

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use rstest::{fixture, rstest};
use tempfile::TempDir;
use tether_core::{ComponentSizes, ConnectivityError, ExecutionStrategy};
use tether_test_support::fixtures::{JUNCTION_BOXES, render_rows};
use tether_test_support::tracing::RecordingLayer;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[fixture]
fn workspace() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

fn write_input(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

fn components(path: PathBuf, edges: usize) -> Cli {
    Cli {
        strategy: Strategy::Auto,
        command: Command::Components(ComponentsCommand {
            path,
            edges,
            top: 3,
        }),
    }
}

fn connect(path: PathBuf) -> Cli {
    Cli {
        strategy: Strategy::Auto,
        command: Command::Connect(ConnectCommand { path }),
    }
}

fn rendered(summary: &ExecutionSummary) -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    render_summary(summary, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[rstest]
fn components_on_junction_boxes(workspace: TempDir) -> TestResult {
    let path = write_input(&workspace, "boxes.txt", &render_rows(&JUNCTION_BOXES))?;
    let summary = run_cli(components(path, 10))?;
    assert_eq!(
        rendered(&summary)?,
        "components: 11\nsizes: 5,4,2,2,1,1,1,1,1,1,1\nproduct of 3 largest: 40\n"
    );
    Ok(())
}

#[rstest]
fn connect_on_junction_boxes(workspace: TempDir) -> TestResult {
    let path = write_input(&workspace, "boxes.txt", &render_rows(&JUNCTION_BOXES))?;
    let summary = run_cli(connect(path))?;
    assert_eq!(
        rendered(&summary)?,
        concat!(
            "left: 216,146,977\n",
            "right: 117,168,530\n",
            "squared distance: 210094\n",
            "edges examined: 29\n",
            "first coordinate product: 25272\n",
        )
    );
    Ok(())
}

#[rstest]
fn connect_rejects_single_point(workspace: TempDir) -> TestResult {
    let path = write_input(&workspace, "one.txt", "1,2,3\n")?;
    let err = run_cli(connect(path)).expect_err("one point cannot be connected");
    assert!(matches!(
        err,
        CliError::Core(ConnectivityError::NoConnectingEdge { points: 1 })
    ));
    Ok(())
}

#[rstest]
fn components_over_empty_file(workspace: TempDir) -> TestResult {
    let path = write_input(&workspace, "empty.txt", "\n\n")?;
    let summary = run_cli(components(path, 5))?;
    assert_eq!(
        rendered(&summary)?,
        "components: 0\nsizes: \nproduct of 3 largest: 1\n"
    );
    Ok(())
}

#[rstest]
fn missing_file_reports_path(workspace: TempDir) {
    let missing = workspace.path().join("missing.txt");
    let err = run_cli(connect(missing.clone())).expect_err("missing file must fail");
    match err {
        CliError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn malformed_file_reports_line(workspace: TempDir) -> TestResult {
    let path = write_input(&workspace, "bad.txt", "1,2\n3,x\n")?;
    let err = load_points(&path).expect_err("malformed input must fail");
    match err {
        CliError::Input {
            source: InputError::InvalidCoordinate { line, field, value, .. },
            ..
        } => {
            assert_eq!((line, field, value.as_str()), (2, 2, "x"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[rstest]
#[case::plain("1,2\n3,4\n", 2)]
#[case::blank_lines("\n1,2\n\n3,4\n\n", 2)]
#[case::whitespace(" 1 , 2 \n-3,  4\n", 2)]
#[case::crlf("1,2\r\n3,4\r\n", 2)]
#[case::empty("", 0)]
fn parses_points(#[case] input: &str, #[case] expected: usize) {
    let points = parse_points(input.as_bytes()).expect("input must parse");
    assert_eq!(points.len(), expected);
    assert!(points.iter().all(|point| point.dimensions() == 2));
}

#[rstest]
#[case::empty_field("1,,2\n", 1, 2)]
#[case::trailing_comma("1,2,\n", 1, 3)]
#[case::float("1.5,2\n", 1, 1)]
#[case::too_large("9223372036854775808,0\n", 1, 1)]
fn rejects_invalid_coordinates(#[case] input: &str, #[case] line: usize, #[case] field: usize) {
    let err = parse_points(input.as_bytes()).expect_err("input must be rejected");
    assert!(
        matches!(err, InputError::InvalidCoordinate { line: l, field: f, .. } if l == line && f == field),
        "unexpected error: {err:?}"
    );
}

#[test]
fn rejects_mixed_arity_with_line_number() {
    let err = parse_points("1,2,3\n\n4,5\n".as_bytes()).expect_err("arity must match");
    assert!(matches!(
        err,
        InputError::ArityMismatch {
            line: 3,
            expected: 3,
            actual: 2,
        }
    ));
    assert_eq!(
        err.to_string(),
        "line 3 has 2 coordinates but 3 were expected"
    );
}

#[test]
fn render_reports_product_overflow() -> TestResult {
    let summary = ExecutionSummary::Components(ComponentsSummary {
        points: 0,
        edges: 0,
        top: 9,
        sizes: ComponentSizes::from_sizes(vec![usize::MAX; 9]),
    });
    let text = rendered(&summary)?;
    assert!(text.ends_with("product of 9 largest: overflow\n"));
    Ok(())
}

#[rstest]
#[case(&["tether", "components", "points.txt", "--edges", "10"], 10, 3, Strategy::Auto)]
#[case(
    &["tether", "--strategy", "sequential", "components", "points.txt", "--edges", "1000", "--top", "5"],
    1000,
    5,
    Strategy::Sequential,
)]
#[case(
    &["tether", "components", "points.txt", "--edges", "0", "--strategy", "parallel"],
    0,
    3,
    Strategy::Parallel,
)]
fn clap_parses_components(
    #[case] args: &[&str],
    #[case] edges: usize,
    #[case] top: usize,
    #[case] strategy: Strategy,
) {
    let cli = Cli::try_parse_from(args).expect("arguments must parse");
    assert_eq!(cli.strategy, strategy);
    match cli.command {
        Command::Components(command) => {
            assert_eq!(command.path, PathBuf::from("points.txt"));
            assert_eq!((command.edges, command.top), (edges, top));
        }
        Command::Connect(_) => panic!("expected components command"),
    }
}

#[rstest]
#[case::missing_edges(&["tether", "components", "points.txt"])]
#[case::negative_edges(&["tether", "components", "points.txt", "--edges", "-1"])]
#[case::unknown_strategy(&["tether", "--strategy", "gpu", "connect", "points.txt"])]
#[case::missing_path(&["tether", "connect"])]
fn clap_rejects_invalid_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[rstest]
#[case(Strategy::Auto, ExecutionStrategy::Auto)]
#[case(Strategy::Sequential, ExecutionStrategy::Sequential)]
#[case(Strategy::Parallel, ExecutionStrategy::Parallel)]
fn strategy_maps_to_engine(#[case] strategy: Strategy, #[case] expected: ExecutionStrategy) {
    assert_eq!(ExecutionStrategy::from(strategy), expected);
}

#[rstest]
fn run_cli_emits_tracing_fields(workspace: TempDir) -> TestResult {
    let path = write_input(&workspace, "boxes.txt", &render_rows(&JUNCTION_BOXES))?;
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let cli = Cli {
        strategy: Strategy::Sequential,
        command: Command::Components(ComponentsCommand {
            path,
            edges: 10,
            top: 3,
        }),
    };
    tracing::subscriber::with_default(subscriber, || run_cli(cli))?;

    let run = layer.span("cli.run").expect("cli.run span must exist");
    assert_eq!(run.field("command"), Some("components"));
    assert_eq!(run.field("strategy"), Some("Sequential"));

    let command = layer
        .span("cli.components")
        .expect("cli.components span must exist");
    assert!(command.field("path").is_some_and(|path| path.ends_with("boxes.txt")));
    assert_eq!(command.field("edges"), Some("10"));

    let load = layer
        .span("cli.load_points")
        .expect("cli.load_points span must exist");
    assert_eq!(load.field("points"), Some("20"));

    let completed = layer.events_with_message("components command completed");
    assert!(completed.iter().any(|event| {
        event.level == Level::INFO
            && event.field("components") == Some("11")
            && event.field("largest") == Some("5")
    }));
    assert!(layer.span("connectivity.bounded").is_some());
    Ok(())
}
