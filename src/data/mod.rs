//! Survey data sources.
//!
//! There is only one: a synthetic generator that deliberately produces a mix of
//! clean and messy AUM values so the normalizer has something to do.

pub mod sample;

pub use sample::*;
