//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Extract wavetable and noise samples from C array sources into WAV files.
#[derive(Debug, Parser)]
#[command(name = "sampledump")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run (default: extract).
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Options for extraction.
    #[command(flatten)]
    pub extract: ExtractArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that every expected WAV file exists and has the configured format.
    Verify,
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the extract command.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExtractArgs {
    /// Overwrite existing files.
    #[arg(short, long)]
    pub force: bool,

    /// Path to the source file containing the arrays (overrides config).
    #[arg(short, long, global = true, env = "SAMPLEDUMP_SOURCE")]
    pub source: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long, global = true, env = "SAMPLEDUMP_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Configuration file to use instead of the platform default.
    #[arg(long, global = true, env = "SAMPLEDUMP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Expected boundary table, comma-separated (overrides config).
    #[arg(long, value_delimiter = ',', global = true, conflicts_with = "no_reference")]
    pub reference: Option<Vec<usize>>,

    /// Skip the boundary table comparison.
    #[arg(long, global = true)]
    pub no_reference: bool,

    /// Show what would be written without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the final report as JSON on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["sampledump"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.extract.force);
        assert!(cli.extract.source.is_none());
        assert!(cli.extract.output.is_none());
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::try_parse_from([
            "sampledump",
            "-f",
            "-s",
            "resources.cc",
            "-o",
            "out",
            "-q",
        ])
        .unwrap();
        assert!(cli.extract.force);
        assert_eq!(cli.extract.source, Some(PathBuf::from("resources.cc")));
        assert_eq!(cli.extract.output, Some(PathBuf::from("out")));
        assert!(cli.extract.quiet);
    }

    #[test]
    fn test_cli_parse_reference_list() {
        let cli = Cli::try_parse_from(["sampledump", "--reference", "0,2,5"]).unwrap();
        assert_eq!(cli.extract.reference, Some(vec![0, 2, 5]));
    }

    #[test]
    fn test_cli_reference_conflicts_with_no_reference() {
        let cli = Cli::try_parse_from(["sampledump", "--reference", "0,2", "--no-reference"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_verify_with_global_output() {
        let cli = Cli::try_parse_from(["sampledump", "verify", "-o", "out"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Verify)));
        assert_eq!(cli.extract.output, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_cli_parse_config_subcommand() {
        let cli = Cli::try_parse_from(["sampledump", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config {
                action: ConfigAction::Show
            })
        ));
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::try_parse_from(["sampledump", "-vv"]).unwrap();
        assert_eq!(cli.extract.verbose, 2);
    }
}
