//! Check command implementation

use super::CommonArgs;
use crate::input::{FileReader, InputSource};
use crate::output::{JsonReport, ReportFormatter, TextReport};
use anyhow::{Context, Result};
use clap::Args;
use interchunk_core::Converter;
use std::io;
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Input file, or directory of files
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// One line per file
    Text,
    /// JSON document with per-file and total counts
    Json,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();
        log::debug!("Arguments: {:?}", self);

        let mut report: Box<dyn ReportFormatter> = match self.format {
            ReportFormat::Text => Box::new(TextReport::stdout()),
            ReportFormat::Json => Box::new(JsonReport::new(io::stdout())),
        };
        self.run(report.as_mut())
    }

    /// Convert every input file without writing and feed the report
    pub fn run(&self, report: &mut dyn ReportFormatter) -> Result<()> {
        let config = self.common.load_config()?;
        let converter = Converter::new(config.core_config());
        let source = InputSource::resolve(&self.input)?;

        for path in source.files() {
            let text = FileReader::read_text(path)?;
            let document = converter
                .convert_text(&text)
                .with_context(|| format!("Failed to convert {}", path.display()))?;
            report.add_file(path, &document.stats)?;
        }

        report.finish()
    }
}
