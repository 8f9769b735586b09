//! PNG chart rendering for the benchmark report.
//!
//! Charts are data-driven: aggregations are computed in `crate::report`, and
//! this module only lays them out and draws them.

pub mod charts;

pub use charts::*;
