//! Output module: SSF document writing and conversion reports

use anyhow::Result;
use interchunk_core::ConversionStats;
use std::path::Path;

/// Trait for conversion report formatters
pub trait ReportFormatter: Send + Sync {
    /// Record the statistics of one converted file
    fn add_file(&mut self, path: &Path, stats: &ConversionStats) -> Result<()>;

    /// Finalize output (e.g., emit totals)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod ssf;
pub mod text;

pub use json::JsonReport;
pub use ssf::{output_path_for, SsfWriter};
pub use text::TextReport;
