//! Output helpers.
//!
//! - cleaned survey table as CSV (`export`)
//! - executive summary + aggregations as JSON (`export`)

pub mod export;

pub use export::*;
