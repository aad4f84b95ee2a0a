//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader for SSF documents
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text with surrounding whitespace removed
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content.trim().to_string())
    }
}
