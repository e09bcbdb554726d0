//! Domain types used throughout the pipeline.
//!
//! - wire records (`InputRecord`, `OutputRecord`)
//! - run settings (`ForecastConfig`, `InputSource`)
//! - fit outputs (`FitQuality`, `Forecast`)

pub mod types;

pub use types::*;
