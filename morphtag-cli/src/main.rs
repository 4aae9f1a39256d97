//! morphtag command-line entry point

use clap::Parser;
use morphtag_cli::commands::Commands;
use std::process::ExitCode;

/// Convert SynTagRus morphological tags into OpenCorpora markers
#[derive(Debug, Parser)]
#[command(name = "morphtag", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
