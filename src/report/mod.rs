//! Diagnostic reports written to stderr.

pub mod format;

pub use format::*;
