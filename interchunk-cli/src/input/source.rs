//! Input source resolution: a single file or every file under a directory

use crate::error::CliError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Where the documents to convert come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// One file, converted to exactly the output path given
    File(PathBuf),
    /// All regular files found recursively under a directory, sorted
    Directory {
        /// The directory that was walked
        root: PathBuf,
        /// Files found beneath it
        files: Vec<PathBuf>,
    },
}

impl InputSource {
    /// Inspect `path` and collect the files it designates
    pub fn resolve(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::InputNotFound(path.display().to_string()).into());
        }

        if !path.is_dir() {
            return Ok(InputSource::File(path.to_path_buf()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(path) {
            let entry =
                entry.with_context(|| format!("Error walking directory: {}", path.display()))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        files.sort();

        if files.is_empty() {
            log::warn!("No files found under {}", path.display());
        }

        Ok(InputSource::Directory {
            root: path.to_path_buf(),
            files,
        })
    }

    /// Files to convert, in processing order
    pub fn files(&self) -> Vec<&Path> {
        match self {
            InputSource::File(path) => vec![path.as_path()],
            InputSource::Directory { files, .. } => files.iter().map(PathBuf::as_path).collect(),
        }
    }

    /// Whether the source is a directory
    pub fn is_directory(&self) -> bool {
        matches!(self, InputSource::Directory { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.ssf");
        fs::write(&file, "x").unwrap();

        let source = InputSource::resolve(&file).unwrap();
        assert_eq!(source, InputSource::File(file.clone()));
        assert_eq!(source.files(), vec![file.as_path()]);
        assert!(!source.is_directory());
    }

    #[test]
    fn test_resolve_directory_recursively() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(temp_dir.path().join("b.ssf"), "x").unwrap();
        fs::write(temp_dir.path().join("a.ssf"), "x").unwrap();
        fs::write(nested.join("c.ssf"), "x").unwrap();

        let source = InputSource::resolve(temp_dir.path()).unwrap();
        assert!(source.is_directory());

        let names: Vec<_> = source
            .files()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.ssf", "b.ssf", "c.ssf"]);
    }

    #[test]
    fn test_resolve_missing_path() {
        let err = InputSource::resolve(Path::new("/nonexistent/corpus")).unwrap_err();
        assert!(err.to_string().contains("Input not found"));
    }

    #[test]
    fn test_resolve_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let source = InputSource::resolve(temp_dir.path()).unwrap();
        assert!(source.files().is_empty());
    }
}
