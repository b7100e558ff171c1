use bedwars_stats::file_creation::file_creator::{create_json_file, write_json};
use bedwars_stats::process_records_in_parallel;

use anyhow::Context;
use clap::Parser;
use std::io::stdout;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Builds BedWars reports from raw stat records.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// A JSON record file, or a directory of `*.json` record files.
    input: PathBuf,

    /// Number of worker threads. Defaults to one per CPU.
    #[arg(short, long)]
    threads: Option<usize>,

    /// File to write the reports to. Defaults to stdout.
    #[arg(short, long)]
    output: Option<String>,

    /// Write compact JSON instead of pretty-printed JSON.
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let batch = process_records_in_parallel(&args.input, args.threads)
        .with_context(|| format!("failed to process {}", args.input.display()))?;

    match &args.output {
        Some(filename) => create_json_file(filename, &batch, !args.compact)
            .with_context(|| format!("failed to create {}", filename))?,
        None => write_json(stdout().lock(), &batch, !args.compact)
            .context("failed to write reports to stdout")?,
    }

    Ok(())
}
