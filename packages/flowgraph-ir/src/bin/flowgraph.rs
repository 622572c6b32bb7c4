//! Flowgraph CLI
//!
//! Runs the graph pipeline over extractor output and prints the
//! visualization graph as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Analyze one document
//! flowgraph analyze --input records.json --pretty
//!
//! # With a YAML configuration
//! flowgraph analyze --input records.json --config flowgraph.yaml
//!
//! # Print the default configuration
//! flowgraph default-config > flowgraph.yaml
//! ```

use clap::{Parser, Subcommand};
use flowgraph_ir::{
    ExtractionInput, FlowgraphError, FunctionSpanIndex, GraphPipeline, OperatorConfig,
    PipelineConfig, Result,
};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flowgraph")]
#[command(about = "Dataflow graph construction and hierarchical clustering", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the visualization graph for one extraction result
    Analyze {
        /// Extractor output (ExtractionInput JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Debug-level logging (overridden by RUST_LOG)
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the default configuration as YAML
    DefaultConfig,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn analyze(input: PathBuf, config: Option<PathBuf>, pretty: bool) -> Result<()> {
    let config = match config {
        Some(path) => PipelineConfig::from_yaml(path)?,
        None => PipelineConfig::default(),
    };
    let pipeline = GraphPipeline::new(config)?;

    let raw = fs::read_to_string(&input)?;
    let extraction: ExtractionInput = serde_json::from_str(&raw)?;
    let resolver = FunctionSpanIndex::new(&extraction.function_spans);

    let output = pipeline.analyze(&extraction, &resolver);
    if !output.is_valid() {
        tracing::warn!(issues = output.issues.len(), "graph has validation issues");
    }

    let json = if pretty {
        serde_json::to_string_pretty(&output.graph)?
    } else {
        serde_json::to_string(&output.graph)?
    };
    println!("{}", json);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input,
            config,
            pretty,
            verbose,
        } => {
            init_logging(verbose);
            analyze(input, config, pretty)
        }
        Commands::DefaultConfig => PipelineConfig::default()
            .operators(OperatorConfig::default())
            .to_yaml()
            .map(|yaml| print!("{}", yaml))
            .map_err(FlowgraphError::from),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
