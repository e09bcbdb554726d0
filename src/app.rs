//! Top-level application orchestration.
//!
//! `src/main.rs` only maps the result to an exit code; this module:
//! - parses CLI arguments
//! - installs the stderr logger
//! - reads the input document
//! - runs the forecast pipeline
//! - writes exactly one JSON document to stdout, success or failure

use std::io::{Read, Write};

use clap::Parser;
use tracing::{error, info};

use crate::cli::Cli;
use crate::domain::{Forecast, ForecastConfig, InputSource, OutputRecord};
use crate::error::AppError;
use crate::io::{read_document, write_output};

pub mod pipeline;

/// Entry point for the `forecast` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    crate::logging::init(cli.log_level());
    info!("forecaster started");

    let config = forecast_config_from_args(&cli);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute(&config, &mut stdin.lock(), &mut stdout.lock()).map(|_| ())
}

/// Read, forecast and write the output document.
///
/// On failure the `{"error": ...}` document has already been written to `out`
/// when the error is returned.
pub fn execute(
    config: &ForecastConfig,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<Forecast, AppError> {
    let result = read_document(&config.input, stdin)
        .and_then(|text| pipeline::run_forecast(&text, config));

    match result {
        Ok(forecast) => {
            write_output(out, &OutputRecord::Forecast(forecast.value), config.pretty)?;
            Ok(forecast)
        }
        Err(err) => {
            error!("{err}");
            write_output(out, &OutputRecord::Error(err.to_string()), config.pretty)?;
            Err(err)
        }
    }
}

pub fn forecast_config_from_args(cli: &Cli) -> ForecastConfig {
    ForecastConfig {
        input: match &cli.input {
            Some(path) => InputSource::File(path.clone()),
            None => InputSource::Stdin,
        },
        precision: cli.precision,
        pretty: cli.pretty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn execute_str(input: &str) -> (Result<Forecast, AppError>, String) {
        let mut stdin = input.as_bytes();
        let mut out = Vec::new();
        let result = execute(&ForecastConfig::default(), &mut stdin, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn success_writes_forecast_document() {
        let (result, out) = execute_str(r#"{"days":[1,2,3],"amounts":[2,4,6]}"#);
        assert!(result.is_ok());
        assert_eq!(out, "{\"forecast\":8.0}\n");
    }

    #[test]
    fn failure_writes_error_document() {
        let (result, out) = execute_str("not json");
        assert_eq!(result.unwrap_err().exit_code(), 1);
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(doc["error"].is_string());
        assert!(doc.get("forecast").is_none());
    }

    #[test]
    fn config_maps_input_path() {
        let cli = Cli::parse_from(["forecast", "--input", "x.json", "--precision", "3"]);
        let config = forecast_config_from_args(&cli);
        assert_eq!(config.input, InputSource::File("x.json".into()));
        assert_eq!(config.precision, 3);
    }
}
