use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use kruskal::input::{self, InputFormat};
use kruskal::report::{self, OutputFormat};
use std::fs;
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kruskal")]
#[command(about = "Minimum spanning tree of a weighted undirected graph (Kruskal)", long_about = None)]
struct Args {
    /// Input graph path ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Output path ("-" for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Input format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    input_format: Format,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    output_format: Format,

    /// Verbose output level (ignored when RUST_LOG is set)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for InputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => InputFormat::Text,
            Format::Json => InputFormat::Json,
        }
    }
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Parse, solve and render. Kept free of I/O so it can be tested directly.
fn solve(text: &str, input_format: InputFormat, output_format: OutputFormat) -> Result<String> {
    let graph = input::parse(text, input_format).context("failed to parse input graph")?;
    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    let result = kruskal::compute_mst(&graph);
    if !result.is_spanning_tree(graph.vertex_count()) {
        tracing::warn!(
            accepted = result.edge_count(),
            expected = graph.vertex_count().saturating_sub(1),
            "graph is not connected; reporting a minimum spanning forest"
        );
    }
    tracing::info!(
        total_weight = %result.total_weight(),
        edges = result.edge_count(),
        "minimum spanning tree computed"
    );

    report::render(&result, graph.vertex_count(), output_format)
        .context("failed to render result")
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(args.verbose))),
        )
        .with_writer(io::stderr)
        .init();

    let mut text = String::new();
    if args.input == "-" {
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read graph from stdin")?;
    } else {
        text = fs::read_to_string(&args.input)
            .with_context(|| format!("failed to read input file: {}", &args.input))?;
    }

    let rendered = solve(&text, args.input_format.into(), args.output_format.into())
        .with_context(|| format!("while processing {}", &args.input))?;

    if args.output == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        if !rendered.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
    } else {
        fs::write(&args.output, rendered)
            .with_context(|| format!("failed to write output file: {}", &args.output))?;
    }

    Ok(())
}
