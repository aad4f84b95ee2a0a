//! Convert command implementation

use super::CommonArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{FileReader, InputSource};
use crate::output::{output_path_for, SsfWriter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use interchunk_core::{ConversionStats, Converter};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input file, or directory of files
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Output file, or output directory when the input is a directory
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Convert the files of a directory in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel conversion
    #[arg(short = 't', long, value_name = "COUNT")]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Read, convert and write one file
pub fn convert_file(converter: &Converter, input: &Path, output: &Path) -> Result<ConversionStats> {
    let text = FileReader::read_text(input)?;
    let document = converter
        .convert_text(&text)
        .with_context(|| format!("Failed to convert {}", input.display()))?;
    SsfWriter::write(output, &document)?;

    log::info!(
        "{} -> {} ({} sentences)",
        input.display(),
        output.display(),
        document.stats.sentences
    );
    Ok(document.stats)
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = self.load_config()?;
        let converter = Converter::new(config.core_config());

        let stats = match InputSource::resolve(&self.input)? {
            InputSource::File(path) => convert_file(&converter, &path, &self.output)?,
            InputSource::Directory { files, .. } => {
                self.convert_directory(&converter, &config, &files)?
            }
        };

        log::info!(
            "Converted {} sentences ({} chunks, {} relations)",
            stats.sentences,
            stats.chunks,
            stats.relations
        );
        Ok(())
    }

    fn load_config(&self) -> Result<CliConfig> {
        let mut config = self.common.load_config()?;
        if self.parallel {
            config.performance.parallel = true;
        }
        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(CliError::ConfigError(
                    "Thread count must be greater than 0".to_string(),
                )
                .into());
            }
            config.performance.threads = threads;
        }
        Ok(config)
    }

    /// Pair every input file with its output path, rejecting collisions
    fn plan_outputs(&self, files: &[PathBuf], suffix: &str) -> Result<Vec<(PathBuf, PathBuf)>> {
        let mut seen: HashMap<PathBuf, &Path> = HashMap::new();
        let mut plan = Vec::with_capacity(files.len());

        for input in files {
            let output = output_path_for(input, &self.output, suffix);
            if let Some(first) = seen.insert(output.clone(), input.as_path()) {
                return Err(CliError::OutputCollision {
                    output: output.display().to_string(),
                    first: first.display().to_string(),
                    second: input.display().to_string(),
                }
                .into());
            }
            plan.push((input.clone(), output));
        }

        Ok(plan)
    }

    fn convert_directory(
        &self,
        converter: &Converter,
        config: &CliConfig,
        files: &[PathBuf],
    ) -> Result<ConversionStats> {
        let plan = self.plan_outputs(files, &config.output.suffix)?;
        SsfWriter::ensure_dir(&self.output)?;

        let mut progress = ProgressReporter::new(self.common.quiet);
        progress.init_files(plan.len() as u64);

        let convert_one = |(input, output): &(PathBuf, PathBuf)| -> Result<ConversionStats> {
            let stats = convert_file(converter, input, output)?;
            progress.file_completed(&input.display().to_string());
            Ok(stats)
        };

        let results: Result<Vec<ConversionStats>> = if config.performance.parallel {
            let mut builder = rayon::ThreadPoolBuilder::new();
            if let Some(threads) = config.threads() {
                builder = builder.num_threads(threads);
            }
            let pool = builder.build().context("Failed to build thread pool")?;
            pool.install(|| plan.par_iter().map(convert_one).collect())
        } else {
            plan.iter().map(convert_one).collect()
        };

        let per_file = match results {
            Ok(per_file) => per_file,
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        };
        progress.finish();

        let mut total = ConversionStats::default();
        for stats in per_file {
            total += stats;
        }
        Ok(total)
    }
}
