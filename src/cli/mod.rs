//! Command-line parsing.
//!
//! Every flag is optional: with no arguments the binary reads stdin and writes a
//! compact JSON document to stdout.

use std::path::PathBuf;

use clap::Parser;

use crate::app::pipeline::MAX_PRECISION;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "forecast",
    version,
    about = "One-step-ahead linear forecast of a (days, amounts) series read as JSON"
)]
pub struct Cli {
    /// Read the input document from this file instead of stdin.
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Decimal places kept in the forecast.
    #[arg(
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u32).range(0..=MAX_PRECISION as i64)
    )]
    pub precision: u32,

    /// Pretty-print the output document.
    #[arg(long)]
    pub pretty: bool,

    /// Log the fit summary to stderr.
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors to stderr.
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log level when `FORECAST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_read_stdin_compactly() {
        let cli = Cli::parse_from(["forecast"]);
        assert!(cli.input.is_none());
        assert_eq!(cli.precision, 2);
        assert!(!cli.pretty);
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn flags_are_parsed() {
        let cli = Cli::parse_from([
            "forecast",
            "-i",
            "data.json",
            "--precision",
            "4",
            "--pretty",
            "-v",
        ]);
        assert_eq!(cli.input.as_deref(), Some(std::path::Path::new("data.json")));
        assert_eq!(cli.precision, 4);
        assert!(cli.pretty);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn out_of_range_precision_is_rejected() {
        assert!(Cli::try_parse_from(["forecast", "--precision", "11"]).is_err());
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["forecast", "-v", "-q"]).is_err());
    }
}
