//! AUM normalization and size classification.
//!
//! `clean_records` is a pure function of the raw table: it never mutates the
//! input and produces one `CleanRecord` per `SurveyRecord`, in order.

pub mod aum;
pub mod cohort;

pub use aum::*;
pub use cohort::*;

use tracing::debug;

use crate::domain::{CleanRecord, SurveyRecord};
use crate::error::AppError;

/// Raw currency units per billion.
pub const BILLION: f64 = 1_000_000_000.0;

/// Normalize every record's AUM and assign its size cohort.
pub fn clean_records(records: &[SurveyRecord]) -> Result<Vec<CleanRecord>, AppError> {
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        let aum_numeric = normalize_aum(&record.aum_raw)
            .map_err(|e| AppError::runtime(format!("Record {}: {e}", record.firm_id)))?;
        let aum_billions = aum_numeric / BILLION;
        out.push(CleanRecord {
            record: record.clone(),
            aum_numeric,
            aum_billions,
            size_cohort: size_cohort(aum_billions),
        });
    }

    let unclassified = out.iter().filter(|r| r.size_cohort.is_none()).count();
    debug!(records = out.len(), unclassified, "normalized AUM");

    Ok(out)
}

/// Share (percent) of raw records whose AUM needed normalization.
///
/// Computed strictly from pre-normalization data.
pub fn normalization_share(records: &[SurveyRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let messy = records
        .iter()
        .filter(|r| needs_normalization(&r.aum_raw))
        .count();
    messy as f64 / records.len() as f64 * 100.0
}
