//! `spend-forecast` library crate.
//!
//! The binary (`forecast`) is a thin wrapper around this library so that the
//! whole read-fit-write cycle is testable without spawning processes.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod report;
