//! recase command-line entry point

use clap::Parser;
use recase_cli::commands::Commands;
use recase_cli::CliResult;

/// Convert text between case styles
#[derive(Debug, Parser)]
#[command(name = "recase", version, about = "Convert text between case styles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    Cli::parse().command.execute()
}
