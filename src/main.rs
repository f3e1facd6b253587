//! kube-graph CLI entry point.
//!
//! Reads a graph snapshot, lays it out and writes the scene as SVG or JSON.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kube_graph::renderers::{self, text};
use kube_graph::{Direction, Format, GraphSnapshot, LayoutConfig, fixtures};

/// Resource dependency graph to a laid-out SVG diagram or JSON scene.
#[derive(Parser, Debug)]
#[command(
    name = "kube-graph",
    version = env!("KUBE_GRAPH_VERSION"),
    about = "Resource dependency graph to a laid-out SVG diagram or JSON scene"
)]
struct Cli {
    /// Snapshot JSON file (reads from stdin if not provided)
    input: Option<String>,

    /// Use the bundled online-store demo graph instead of an input
    #[arg(long = "demo", conflicts_with = "input")]
    demo: bool,

    /// Layout direction (LR, TB)
    #[arg(short = 'd', long = "direction", default_value = "LR")]
    direction: Direction,

    /// Output format (svg, json)
    #[arg(short = 'f', long = "format", default_value = "svg")]
    format: Format,

    /// Mark this node selected and print its details to stderr
    #[arg(short = 's', long = "select")]
    select: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_snapshot(cli: &Cli) -> Result<GraphSnapshot, String> {
    if cli.demo {
        return fixtures::online_store().map_err(|e| e.to_string());
    }
    if let Some(ref path) = cli.input {
        return GraphSnapshot::from_path(path)
            .map_err(|e| format!("cannot read '{}': {}", path, e));
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("cannot read stdin: {}", e))?;
    GraphSnapshot::from_json(&buf).map_err(|e| e.to_string())
}

fn run(cli: &Cli) -> Result<String, String> {
    let snapshot = read_snapshot(cli)?;
    let config = LayoutConfig::default().with_direction(cli.direction);
    let selected = cli.select.as_deref();

    if let Some(id) = selected {
        let detail = kube_graph::detail_for(snapshot.clone(), id).map_err(|e| e.to_string())?;
        eprint!("{}", text::render_detail(&detail));
    }

    // Cycle warnings are logged by the layout engine.
    let scene =
        kube_graph::compose_snapshot(snapshot, &config, selected).map_err(|e| e.to_string())?;
    renderers::render(&scene, cli.format).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let rendered = match run(&cli) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, &rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        println!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
