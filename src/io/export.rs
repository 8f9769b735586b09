//! Export the cleaned survey table (CSV) and the report (JSON).
//!
//! Both exports are meant to be easy to consume in spreadsheets or
//! downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::domain::{CleanRecord, RawAum};
use crate::error::AppError;
use crate::report::BenchmarkReport;

/// JSON document written by `--export-summary`.
#[derive(Debug, Serialize)]
pub struct SummaryFile<'a> {
    pub tool: &'static str,
    pub seed: u64,
    pub records: usize,
    pub report: &'a BenchmarkReport,
}

/// Write the cleaned table to a CSV file.
pub fn write_records_csv(path: &Path, records: &[CleanRecord]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::config(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);

    writeln!(
        out,
        "firm_id,firm_type,region,aum_raw,strategy,top_barrier,satisfaction,aum_numeric,aum_billions,size_cohort"
    )
    .map_err(|e| AppError::runtime(format!("Failed to write export CSV header: {e}")))?;

    for r in records {
        let raw = &r.record;
        let aum_raw = match &raw.aum_raw {
            RawAum::Missing => String::new(),
            other => csv_field(&other.to_string()),
        };
        writeln!(
            out,
            "{},{},{},{},{},{},{},{:.0},{:.6},{}",
            csv_field(&raw.firm_id),
            raw.firm_type.display_name(),
            raw.region.display_name(),
            aum_raw,
            raw.strategy.display_name(),
            raw.top_barrier.display_name(),
            raw.satisfaction,
            r.aum_numeric,
            r.aum_billions,
            r.size_cohort.map(|c| c.display_name()).unwrap_or(""),
        )
        .map_err(|e| AppError::runtime(format!("Failed to write export CSV row: {e}")))?;
    }

    out.flush()
        .map_err(|e| AppError::runtime(format!("Failed to flush export CSV: {e}")))?;
    info!(path = %path.display(), rows = records.len(), "exported cleaned records");
    Ok(())
}

/// Write the report as pretty JSON.
pub fn write_summary_json(path: &Path, summary: &SummaryFile<'_>) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::config(format!("Failed to create summary JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, summary)
        .map_err(|e| AppError::runtime(format!("Failed to write summary JSON: {e}")))?;

    info!(path = %path.display(), "exported summary");
    Ok(())
}

// Quote fields containing separators or quotes.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
