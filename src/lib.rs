//! `da-bench` library crate.
//!
//! The binary (`da-bench`) is a thin wrapper around this library so that:
//!
//! - the generate/normalize/report pipeline is testable without spawning processes
//! - a fixed seed gives reproducible tables and summaries in tests

pub mod app;
pub mod clean;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;
