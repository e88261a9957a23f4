use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use trellis_markup::Node;

#[derive(Parser)]
#[command(name = "trellis", version, about = "Trellis markup CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a markup file and dump the node tree as JSON.
    Dump {
        /// Path to the markup file (omit when using --source)
        input: Option<PathBuf>,
        /// Inline markup string instead of a file
        #[arg(long)]
        source: Option<String>,
        /// Write the JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Emit compact JSON on one line
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Dump {
            input,
            source,
            out,
            compact,
        } => dump_cmd(input.as_deref(), source.as_deref(), out.as_deref(), compact)?,
    }
    Ok(())
}

fn dump_cmd(
    input: Option<&Path>,
    source: Option<&str>,
    out: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let markup = match (source, input) {
        (Some(inline), _) => inline.to_string(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => anyhow::bail!("either an input file or --source is required"),
    };

    let root = trellis_markup::parse(&markup)?.map(Node::Element);

    let json = match &root {
        Some(node) if compact => serde_json::to_string(node)?,
        Some(node) => serde_json::to_string_pretty(node)?,
        None => "null".to_string(),
    };

    match out {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
