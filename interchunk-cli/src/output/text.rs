//! Plain text report formatter

use super::ReportFormatter;
use anyhow::Result;
use interchunk_core::ConversionStats;
use std::io::{self, Write};
use std::path::Path;

/// Plain text report - one line per file, plus a total for several files
pub struct TextReport<W: Write> {
    writer: W,
    total: ConversionStats,
    files: usize,
}

impl<W: Write> TextReport<W> {
    /// Create a new text report
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            total: ConversionStats::default(),
            files: 0,
        }
    }

    /// Consume the report and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextReport<io::Stdout> {
    /// Create a report that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

fn describe(stats: &ConversionStats) -> String {
    format!(
        "{} sentences, {} chunks, {} tokens, {} relations",
        stats.sentences, stats.chunks, stats.tokens, stats.relations
    )
}

impl<W: Write + Send + Sync> ReportFormatter for TextReport<W> {
    fn add_file(&mut self, path: &Path, stats: &ConversionStats) -> Result<()> {
        writeln!(self.writer, "{}: {}", path.display(), describe(stats))?;
        self.total += *stats;
        self.files += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.files > 1 {
            writeln!(
                self.writer,
                "Total ({} files): {}",
                self.files,
                describe(&self.total)
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
