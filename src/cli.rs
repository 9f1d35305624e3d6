use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};

/// Writes a fixed LilyPond melody to a file
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Destination file, created or overwritten. Taken verbatim, even when it
    /// starts with `-`.
    #[arg(allow_hyphen_values = true)]
    pub output_path: PathBuf,

    /// Anything after the output path is accepted and ignored.
    #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _ignored: Vec<OsString>,
}

impl Cli {
    pub fn parse_args() -> Result<Self> {
        Self::try_from_args(std::env::args_os())
    }

    /// Like `Parser::try_parse_from`, but the clap error is reduced to a
    /// one-line report so it can exit with status 1.
    pub fn try_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
            .map_err(|err| eyre!("Failed to parse command-line arguments: {}", err.kind()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_output_path() {
        let cli = Cli::try_from_args(["melody-writer", "out.ly"]).unwrap();
        assert_eq!(cli.output_path, PathBuf::from("out.ly"));
    }

    #[test]
    fn missing_output_path_is_an_error() {
        let err = Cli::try_from_args(["melody-writer"]).unwrap_err();
        let msg = err.to_string();

        assert!(msg.starts_with("Failed to parse command-line arguments"));
        assert!(!msg.contains('\n'));
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let cli = Cli::try_from_args(["melody-writer", "a.ly", "b.ly", "--c"]).unwrap();
        assert_eq!(cli.output_path, PathBuf::from("a.ly"));
    }

    #[test]
    fn hyphenated_paths_are_not_flags() {
        for path in ["-x.ly", "--help", "--version", "-h"] {
            let cli = Cli::try_from_args(["melody-writer", path]).unwrap();
            assert_eq!(cli.output_path, PathBuf::from(path));
        }
    }
}
