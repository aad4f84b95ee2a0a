//! Writing converted SSF documents

use anyhow::{Context, Result};
use interchunk_core::ConvertedDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes converted documents to disk
pub struct SsfWriter;

impl SsfWriter {
    /// Write the sentence blocks of a document, newline-separated
    pub fn write(path: &Path, document: &ConvertedDocument) -> Result<()> {
        fs::write(path, document.render())
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }

    /// Create the output directory if it does not exist yet
    pub fn ensure_dir(path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create output directory: {}", path.display()))
    }
}

/// Output location of `input` in directory mode: its file name plus `suffix`,
/// directly under `output_dir`
pub fn output_path_for(input: &Path, output_dir: &Path, suffix: &str) -> PathBuf {
    let mut name = input
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(suffix);
    output_dir.join(name)
}
