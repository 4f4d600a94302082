use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use solgraph_analysis::contract_graph;
use solgraph_core::config::{CliOverrides, GraphConfig};

#[derive(Parser)]
#[command(name = "solgraph")]
#[command(about = "Derive a contract-level call graph from Solidity sources")]
#[command(version = solgraph_core::constants::VERSION)]
struct Cli {
    /// Solidity files to analyze, in order.
    #[arg(required = true)]
    files: Vec<String>,

    /// Crawl transitive import dependencies of the given files.
    #[arg(long)]
    importer: bool,

    /// Treat FILES as literal Solidity source rather than paths.
    #[arg(long)]
    contents: bool,

    /// Suppress call edges derived from using-for library attachments.
    #[arg(long)]
    libraries: bool,

    /// Colour scheme: "default" or "dark".
    #[arg(long)]
    color_scheme: Option<String>,

    /// Write the DOT output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    solgraph_core::tracing::init_tracing();

    let cli = Cli::parse();

    let overrides = CliOverrides {
        color_scheme: cli.color_scheme.clone(),
        importer: cli.importer.then_some(true),
        contents_in_file_path: cli.contents.then_some(true),
        libraries: cli.libraries.then_some(true),
    };
    let config = GraphConfig::load(&std::env::current_dir()?, Some(&overrides))?;

    let dot = contract_graph(&cli.files, &config)?;

    match cli.output {
        Some(path) => std::fs::write(path, dot)?,
        None => print!("{dot}"),
    }
    Ok(())
}
