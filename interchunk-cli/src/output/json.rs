//! JSON report formatter

use super::ReportFormatter;
use anyhow::Result;
use interchunk_core::ConversionStats;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// JSON report - a single document with per-file and total statistics
pub struct JsonReport<W: Write> {
    writer: W,
    report: Report,
}

/// Data structure for JSON output
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Report {
    /// Statistics per converted file
    pub files: Vec<FileReport>,
    /// Sum over all files
    pub total: ConversionStats,
}

/// Statistics of one file
#[derive(Debug, Serialize, Deserialize)]
pub struct FileReport {
    /// Path of the input file
    pub path: String,
    /// Counts for the file
    #[serde(flatten)]
    pub stats: ConversionStats,
}

impl<W: Write> JsonReport<W> {
    /// Create a new JSON report
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report: Report::default(),
        }
    }

    /// Consume the report and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> ReportFormatter for JsonReport<W> {
    fn add_file(&mut self, path: &Path, stats: &ConversionStats) -> Result<()> {
        self.report.files.push(FileReport {
            path: path.display().to_string(),
            stats: *stats,
        });
        self.report.total += *stats;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_report_shape() {
        let mut report = JsonReport::new(Vec::new());
        report
            .add_file(
                Path::new("a.ssf"),
                &ConversionStats {
                    sentences: 2,
                    chunks: 5,
                    tokens: 9,
                    relations: 3,
                },
            )
            .unwrap();
        report.finish().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&report.into_inner()).unwrap();
        assert_eq!(value["files"][0]["path"], "a.ssf");
        assert_eq!(value["files"][0]["sentences"], 2);
        assert_eq!(value["files"][0]["relations"], 3);
        assert_eq!(value["total"]["tokens"], 9);
    }
}
