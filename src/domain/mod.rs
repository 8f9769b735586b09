//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - survey categorical enums (`FirmType`, `Region`, `Barrier`, `StrategyStage`)
//! - the raw AUM tagged union (`RawAum`) and derived `SizeCohort`
//! - raw and cleaned survey rows (`SurveyRecord`, `CleanRecord`)
//! - the run configuration (`BenchmarkConfig`)

pub mod types;

pub use types::*;
