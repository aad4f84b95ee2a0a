//! interchunk CLI library
//!
//! This library provides the command-line interface for converting
//! intra-chunk SSF dependency annotations into inter-chunk form.

use clap::Parser;

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

/// Convert intra-chunk SSF dependency annotations into inter-chunk trees
#[derive(Debug, Parser)]
#[command(name = "interchunk", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: commands::Commands,
}

impl Cli {
    /// Execute the parsed command line
    pub fn run(&self) -> CliResult<()> {
        self.command.execute()
    }
}
