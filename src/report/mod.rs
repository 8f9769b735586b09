//! Reporting: aggregations over the cleaned table plus presentation settings.
//!
//! Every aggregation is read-only over its input. Formatting lives in
//! `format`, chart drawing in `crate::plot`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::clean::normalization_share;
use crate::domain::{Barrier, BenchmarkConfig, CleanRecord, FirmType, Region, StrategyStage, SurveyRecord};
use crate::error::AppError;

pub mod format;

pub use format::*;

/// Barrier mix for one firm type. Shares are percentages summing to 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarrierShare {
    pub firm_type: FirmType,
    pub respondents: usize,
    pub shares: BTreeMap<Barrier, f64>,
}

/// Strategy stage counts for one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionStageCounts {
    pub region: Region,
    pub counts: BTreeMap<StrategyStage, usize>,
}

/// The three headline findings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveSummary {
    /// Percent of all respondents whose top barrier is legacy technology.
    pub legacy_pct: f64,
    /// Most frequent region among live-production respondents.
    pub leading_region: Region,
    /// Percent of raw records whose AUM needed normalization.
    pub normalization_pct: f64,
}

/// All aggregations for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub barriers: Vec<BarrierShare>,
    pub regional: Vec<RegionStageCounts>,
    pub summary: ExecutiveSummary,
}

/// Presentation settings for the reporter.
///
/// These are explicit so a run never depends on process-wide display state.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub out_dir: PathBuf,
    pub barrier_chart_file: String,
    pub regional_chart_file: String,
    /// Pixel size (width, height).
    pub barrier_chart_size: (u32, u32),
    pub regional_chart_size: (u32, u32),
    pub font_family: String,
    /// Rows shown in the raw/clean sample tables.
    pub sample_rows: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            barrier_chart_file: "chart_1_barriers.png".to_string(),
            regional_chart_file: "chart_2_regional_readiness.png".to_string(),
            barrier_chart_size: (1000, 600),
            regional_chart_size: (800, 600),
            font_family: "sans-serif".to_string(),
            sample_rows: 5,
        }
    }
}

impl ReportConfig {
    pub fn from_config(config: &BenchmarkConfig) -> Self {
        Self {
            out_dir: config.out_dir.clone(),
            sample_rows: config.sample_rows,
            ..Self::default()
        }
    }

    pub fn barrier_chart_path(&self) -> PathBuf {
        self.out_dir.join(&self.barrier_chart_file)
    }

    pub fn regional_chart_path(&self) -> PathBuf {
        self.out_dir.join(&self.regional_chart_file)
    }
}

/// Compute every aggregation for a run.
pub fn build_report(raw: &[SurveyRecord], clean: &[CleanRecord]) -> Result<BenchmarkReport, AppError> {
    Ok(BenchmarkReport {
        barriers: barrier_distribution(clean),
        regional: regional_maturity(clean),
        summary: executive_summary(raw, clean)?,
    })
}

/// Percentage share of each barrier within each firm type.
///
/// Firm types without respondents are omitted; barriers nobody picked show 0.
pub fn barrier_distribution(records: &[CleanRecord]) -> Vec<BarrierShare> {
    let mut out = Vec::new();
    for firm_type in FirmType::ALL {
        let group: Vec<&CleanRecord> = records
            .iter()
            .filter(|r| r.record.firm_type == firm_type)
            .collect();
        if group.is_empty() {
            continue;
        }

        let total = group.len() as f64;
        let shares = Barrier::ALL
            .into_iter()
            .map(|barrier| {
                let n = group.iter().filter(|r| r.record.top_barrier == barrier).count();
                (barrier, n as f64 / total * 100.0)
            })
            .collect();

        out.push(BarrierShare {
            firm_type,
            respondents: group.len(),
            shares,
        });
    }
    out
}

/// Respondent counts per region, broken out by strategy stage.
pub fn regional_maturity(records: &[CleanRecord]) -> Vec<RegionStageCounts> {
    Region::ALL
        .into_iter()
        .map(|region| {
            let counts = StrategyStage::ALL
                .into_iter()
                .map(|stage| {
                    let n = records
                        .iter()
                        .filter(|r| r.record.region == region && r.record.strategy == stage)
                        .count();
                    (stage, n)
                })
                .collect();
            RegionStageCounts { region, counts }
        })
        .collect()
}

/// Derive the three headline statistics.
///
/// `raw` must be the pre-normalization table; the data-quality figure is
/// computed from it alone.
pub fn executive_summary(raw: &[SurveyRecord], clean: &[CleanRecord]) -> Result<ExecutiveSummary, AppError> {
    if clean.is_empty() {
        return Err(AppError::runtime("Cannot summarize an empty survey."));
    }

    let legacy = clean
        .iter()
        .filter(|r| r.record.top_barrier == Barrier::LegacyTechnology)
        .count();
    let legacy_pct = legacy as f64 / clean.len() as f64 * 100.0;

    let summary = ExecutiveSummary {
        legacy_pct,
        leading_region: leading_live_region(clean)?,
        normalization_pct: normalization_share(raw),
    };
    debug!(?summary, "executive summary");
    Ok(summary)
}

/// Most frequent region among live-production respondents.
///
/// Ties go to the alphabetically first region name. Having no live-production
/// respondent at all is an error.
pub fn leading_live_region(records: &[CleanRecord]) -> Result<Region, AppError> {
    Region::ALL
        .into_iter()
        .map(|region| {
            let n = records
                .iter()
                .filter(|r| r.record.strategy.is_terminal() && r.record.region == region)
                .count();
            (region, n)
        })
        .filter(|(_, n)| *n > 0)
        .max_by(|a, b| {
            a.1.cmp(&b.1)
                .then_with(|| b.0.display_name().cmp(a.0.display_name()))
        })
        .map(|(region, _)| region)
        .ok_or_else(|| {
            AppError::runtime(format!(
                "No respondent has reached '{}'; cannot determine a leading region.",
                StrategyStage::LiveProduction.display_name()
            ))
        })
}
