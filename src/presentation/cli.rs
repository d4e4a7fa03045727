//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Exactly one positional directory; anything else is a usage error (exit 2)
//! - There is no flag that skips confirmation

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// dirpress - archive a directory with tar, compress it with lz4, then
/// remove the originals once you confirm
#[derive(Parser, Debug)]
#[command(name = "dirpress")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to archive and compress
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Emit NDJSON events on stdout
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v shows tool command lines)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_parse_directory() {
        let cli = Cli::try_parse_from(["dirpress", "data/"]).unwrap();
        assert_eq!(cli.directory, PathBuf::from("data/"));
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.color, None);
    }

    #[test]
    fn test_cli_requires_directory() {
        let err = Cli::try_parse_from(["dirpress"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_cli_rejects_second_directory() {
        let err = Cli::try_parse_from(["dirpress", "a", "b"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_cli_flags() {
        let cli =
            Cli::try_parse_from(["dirpress", "--json", "-vv", "--color", "never", "data"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
    }

    #[test]
    fn test_cli_has_no_yes_flag() {
        assert!(Cli::try_parse_from(["dirpress", "--yes", "data"]).is_err());
    }
}
