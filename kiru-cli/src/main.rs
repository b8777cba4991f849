//! kiru command-line interface

use anyhow::Result;
use clap::Parser;
use kiru_cli::commands::Commands;

/// Rule-based multilingual sentence segmentation
#[derive(Debug, Parser)]
#[command(name = "kiru", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
