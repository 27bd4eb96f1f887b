//! shdoc command-line entry point

use clap::Parser;
use shdoc_cli::commands::Commands;
use shdoc_cli::CliResult;

/// Literate documentation from commented scripts
#[derive(Debug, Parser)]
#[command(name = "shdoc", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
