//! Command-line configuration
//!
//! Log filtering is read from `RUST_LOG` by the subscriber in `main`.

use std::path::PathBuf;

use clap::Parser;

use crate::report::OutputFormat;

/// Count pseudo-legal moves and captures for every piece on a board
#[derive(Debug, Clone, Parser)]
#[command(name = "piece-mobility", version, about)]
pub struct Config {
    /// Board description to analyze
    #[arg(short, long, default_value = "input.txt")]
    pub input: PathBuf,

    /// File that receives the results (or the rejection message)
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Output layout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["piece-mobility"]);
        assert_eq!(config.input, PathBuf::from("input.txt"));
        assert_eq!(config.output, PathBuf::from("output.txt"));
        assert_eq!(config.format, OutputFormat::Plain);
    }

    #[test]
    fn test_overrides() {
        let config = Config::parse_from([
            "piece-mobility",
            "--input",
            "boards/a.txt",
            "-o",
            "out.json",
            "--format",
            "json",
        ]);
        assert_eq!(config.input, PathBuf::from("boards/a.txt"));
        assert_eq!(config.output, PathBuf::from("out.json"));
        assert_eq!(config.format, OutputFormat::Json);
    }
}
