//! Command-line entry point for interchunk

use clap::Parser;
use interchunk_cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
