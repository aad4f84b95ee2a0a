//! CLI command implementations

use crate::config::CliConfig;
use anyhow::Result;
use clap::{Args, Subcommand};
use interchunk_core::HeadPolicy;
use std::path::PathBuf;

pub mod check;
pub mod convert;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert intra-chunk SSF files into inter-chunk SSF
    Convert(convert::ConvertArgs),

    /// Convert without writing and report statistics
    Check(check::CheckArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Convert(args) => args.execute(),
            Commands::Check(args) => args.execute(),
        }
    }
}

/// Head policy as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HeadPolicyArg {
    /// A chunk must have exactly one head token
    Strict,
    /// The first head token of a chunk carries its relation
    FirstWins,
}

impl From<HeadPolicyArg> for HeadPolicy {
    fn from(arg: HeadPolicyArg) -> Self {
        match arg {
            HeadPolicyArg::Strict => HeadPolicy::Strict,
            HeadPolicyArg::FirstWins => HeadPolicy::FirstWins,
        }
    }
}

/// Options shared by every command
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Policy for chunks without exactly one head token
    #[arg(long, value_enum)]
    pub head_policy: Option<HeadPolicyArg>,

    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Load the configuration file, then apply command-line overrides
    pub fn load_config(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load(self.config.as_deref())?;
        if let Some(policy) = self.head_policy {
            config.conversion.head_policy = policy.into();
        }
        Ok(config)
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn common(config: Option<PathBuf>, head_policy: Option<HeadPolicyArg>) -> CommonArgs {
        CommonArgs {
            config,
            head_policy,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_head_policy_conversion() {
        assert_eq!(HeadPolicy::from(HeadPolicyArg::Strict), HeadPolicy::Strict);
        assert_eq!(
            HeadPolicy::from(HeadPolicyArg::FirstWins),
            HeadPolicy::FirstWins
        );
    }

    #[test]
    fn test_flag_overrides_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[conversion]\nhead_policy = \"strict\"\n").unwrap();

        let args = common(
            Some(file.path().to_path_buf()),
            Some(HeadPolicyArg::FirstWins),
        );
        let config = args.load_config().unwrap();
        assert_eq!(config.conversion.head_policy, HeadPolicy::FirstWins);
    }

    #[test]
    fn test_defaults_without_config_file() {
        let config = common(None, None).load_config().unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_commands_debug_format() {
        let cmd = Commands::Check(check::CheckArgs {
            input: PathBuf::from("corpus"),
            format: check::ReportFormat::Text,
            common: common(None, None),
        });

        let debug_str = format!("{:?}", cmd);
        assert!(debug_str.contains("Check"));
        assert!(debug_str.contains("corpus"));
    }
}
