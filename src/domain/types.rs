//! Shared domain types.
//!
//! These are kept small and serde-friendly: the input and output records are the
//! wire contract of the `forecast` binary.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One `(days, amounts)` series as read from the input document.
///
/// Extra keys in the document are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputRecord {
    pub days: Vec<f64>,
    pub amounts: Vec<f64>,
}

/// The single document written to stdout.
///
/// Serializes as `{"forecast": 8.0}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputRecord {
    Forecast(f64),
    Error(String),
}

/// Where the input document comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

/// Resolved run settings.
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    pub input: InputSource,
    /// Decimal places kept in the forecast.
    pub precision: u32,
    /// Pretty-print the output document.
    pub pretty: bool,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            input: InputSource::Stdin,
            precision: 2,
            pretty: false,
        }
    }
}

/// Fit quality on the training points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    pub r_squared: f64,
    pub n: usize,
}

/// Result of one forecaster run, before it is turned into an `OutputRecord`.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub next_day: f64,
    /// Unrounded model prediction at `next_day`.
    pub raw: f64,
    /// Prediction rounded to the configured precision.
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_record_wire_shape() {
        let ok = serde_json::to_string(&OutputRecord::Forecast(8.0)).unwrap();
        assert_eq!(ok, r#"{"forecast":8.0}"#);

        let err = serde_json::to_string(&OutputRecord::Error("boom".into())).unwrap();
        assert_eq!(err, r#"{"error":"boom"}"#);
    }

    #[test]
    fn input_record_accepts_integers_and_ignores_extra_keys() {
        let rec: InputRecord =
            serde_json::from_str(r#"{"days":[1,2],"amounts":[3.5,4],"note":"x"}"#).unwrap();
        assert_eq!(rec.days, vec![1.0, 2.0]);
        assert_eq!(rec.amounts, vec![3.5, 4.0]);
    }
}
