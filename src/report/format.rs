//! Human-readable fit summary.
//!
//! Only ever logged to stderr; stdout stays reserved for the JSON document.

use crate::domain::{Forecast, InputRecord};
use crate::models::LinearFit;

/// One-line summary of the input series.
pub fn format_input_summary(record: &InputRecord) -> String {
    let (lo, hi) = min_max(&record.days);
    format!(
        "n={} | days=[{}, {}] | amounts=[{}]",
        record.days.len(),
        fmt_num(lo),
        fmt_num(hi),
        fmt_preview(&record.amounts, 8),
    )
}

/// Multi-line summary of the fitted line and the forecast.
pub fn format_fit_summary(fit: &LinearFit, forecast: &Forecast) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "line: amount = {:.6} + {:.6} * day\n",
        fit.intercept, fit.slope
    ));
    out.push_str(&format!(
        "fit: n={} | sse={:.6} | rmse={:.6} | r2={:.4}\n",
        fit.quality.n, fit.quality.sse, fit.quality.rmse, fit.quality.r_squared
    ));
    out.push_str(&format!(
        "forecast: day={} | raw={:.6} | rounded={}",
        fmt_num(forecast.next_day),
        forecast.raw,
        forecast.value
    ));
    out
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

fn fmt_preview(values: &[f64], limit: usize) -> String {
    let mut parts: Vec<String> = values.iter().take(limit).map(|&v| fmt_num(v)).collect();
    if values.len() > limit {
        parts.push(format!("... +{}", values.len() - limit));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_summary_truncates_long_series() {
        let record = InputRecord {
            days: (1..=10).map(f64::from).collect(),
            amounts: (1..=10).map(|v| f64::from(v) * 1.5).collect(),
        };
        let s = format_input_summary(&record);
        assert!(s.starts_with("n=10 | days=[1, 10]"));
        assert!(s.ends_with("... +2]"));
    }

    #[test]
    fn fit_summary_mentions_forecast() {
        let fit = LinearFit::fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        let forecast = Forecast { next_day: 4.0, raw: 8.0, value: 8.0 };
        let s = format_fit_summary(&fit, &forecast);
        assert!(s.contains("forecast: day=4"));
        assert!(s.contains("n=3"));
    }
}
