//! Input/output helpers.
//!
//! - reading + validating the input document (`input`)
//! - writing the output document (`output`)

pub mod input;
pub mod output;

pub use input::*;
pub use output::*;
