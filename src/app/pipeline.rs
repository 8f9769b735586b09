//! Shared benchmark pipeline.
//!
//! Keeping this in one place avoids mixing the core workflow with presentation:
//! generate -> normalize -> aggregate
//!
//! Nothing here prints or writes files; `app` handles output.

use tracing::info;

use crate::clean::clean_records;
use crate::data::{SampleData, generate_sample};
use crate::domain::{BenchmarkConfig, CleanRecord};
use crate::error::AppError;
use crate::report::{BenchmarkReport, build_report};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub sample: SampleData,
    pub clean: Vec<CleanRecord>,
    pub report: BenchmarkReport,
}

/// Generate a survey per `config` and run it through the pipeline.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<RunOutput, AppError> {
    let sample = generate_sample(config)?;
    run_with_sample(sample)
}

/// Run the pipeline over an already generated sample.
pub fn run_with_sample(sample: SampleData) -> Result<RunOutput, AppError> {
    let clean = clean_records(&sample.records)?;
    let report = build_report(&sample.records, &clean)?;

    info!(
        records = clean.len(),
        legacy_pct = report.summary.legacy_pct,
        normalization_pct = report.summary.normalization_pct,
        "pipeline complete"
    );

    Ok(RunOutput {
        sample,
        clean,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> BenchmarkConfig {
        BenchmarkConfig {
            seed: Some(seed),
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn same_seed_reproduces_tables_and_summary() {
        let a = run_benchmark(&config(2025)).unwrap();
        let b = run_benchmark(&config(2025)).unwrap();

        assert_eq!(a.sample.records.len(), 150);
        assert_eq!(a.clean, b.clean);
        assert_eq!(a.report, b.report);
    }

    #[test]
    fn data_quality_matches_raw_counts() {
        let run = run_benchmark(&config(77)).unwrap();
        let messy = run
            .sample
            .records
            .iter()
            .filter(|r| crate::clean::needs_normalization(&r.aum_raw))
            .count();
        let expected = messy as f64 / run.sample.records.len() as f64 * 100.0;
        assert!((run.report.summary.normalization_pct - expected).abs() < 1e-12);
    }

    #[test]
    fn fails_when_no_record_is_live() {
        use crate::domain::{Barrier, FirmType, RawAum, Region, StrategyStage, SurveyRecord};

        let records = vec![SurveyRecord {
            firm_id: "VX-5000".to_string(),
            firm_type: FirmType::HedgeFund,
            region: Region::Apac,
            aum_raw: RawAum::Text("$12B".to_string()),
            strategy: StrategyStage::NotStarted,
            top_barrier: Barrier::LegacyTechnology,
            satisfaction: 2,
        }];
        let err = run_with_sample(SampleData { records, seed: 0 }).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_RUNTIME);
    }
}
