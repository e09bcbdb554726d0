//! The forecast pipeline:
//! parse -> validate -> fit -> predict at `max(days) + 1` -> round.
//!
//! Kept free of I/O so it can be tested on plain strings.

use tracing::{debug, info};

use crate::domain::{Forecast, ForecastConfig, InputRecord};
use crate::error::AppError;
use crate::io::parse_input;
use crate::models::LinearFit;

/// Largest supported `--precision`.
pub const MAX_PRECISION: u32 = 10;

/// Run the pipeline on a raw input document.
pub fn run_forecast(text: &str, config: &ForecastConfig) -> Result<Forecast, AppError> {
    let record = parse_input(text)?;
    info!("received data: {}", crate::report::format_input_summary(&record));
    forecast_record(&record, config)
}

/// Run the pipeline on an already parsed record.
///
/// This is the only place the record invariants are checked.
pub fn forecast_record(
    record: &InputRecord,
    config: &ForecastConfig,
) -> Result<Forecast, AppError> {
    crate::io::validate(record)?;

    let fit = LinearFit::fit(&record.days, &record.amounts)?;

    let next_day = next_day(&record.days);
    let raw = fit.predict(next_day);
    if !raw.is_finite() {
        return Err(AppError::fit(format!("prediction at day {next_day} is not finite")));
    }

    let forecast = Forecast {
        next_day,
        raw,
        value: round_to(raw, config.precision),
    };
    debug!("\n{}", crate::report::format_fit_summary(&fit, &forecast));

    Ok(forecast)
}

/// `max(days) + 1`. Callers guarantee `days` is non-empty.
pub fn next_day(days: &[f64]) -> f64 {
    days.iter().copied().fold(f64::NEG_INFINITY, f64::max) + 1.0
}

/// Round half away from zero to `precision` decimal places.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        // Too large to carry any fractional digits anyway.
        return value;
    }
    scaled.round() / factor
}
