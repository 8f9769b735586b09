//! Synthetic survey sample generation.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{Bernoulli, WeightedIndex};
use tracing::{debug, info};

use crate::domain::{Barrier, BenchmarkConfig, FirmType, RawAum, Region, StrategyStage, SurveyRecord};
use crate::error::AppError;

/// Probability that a record carries a clean numeric AUM.
const CLEAN_AUM_PROB: f64 = 0.3;

/// Range of clean numeric AUM values (raw currency units).
const CLEAN_AUM_MIN: u64 = 10_000_000;
const CLEAN_AUM_MAX: u64 = 500_000_000_000;

#[derive(Debug, Clone)]
pub struct SampleData {
    pub records: Vec<SurveyRecord>,
    /// Seed actually used; pass it back via `--seed` to reproduce the run.
    pub seed: u64,
}

/// Generate the survey table for a run.
///
/// Without a configured seed a fresh one is drawn from the thread RNG, so
/// output differs between runs unless the caller pins it.
pub fn generate_sample(config: &BenchmarkConfig) -> Result<SampleData, AppError> {
    if config.record_count == 0 {
        return Err(AppError::config("Record count must be > 0."));
    }

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    info!(seed, records = config.record_count, "generating survey sample");

    let mut rng = StdRng::seed_from_u64(seed);
    let records = generate_records(&mut rng, config.record_count)?;

    Ok(SampleData { records, seed })
}

/// Generate `count` survey records from the given random source.
pub fn generate_records<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Vec<SurveyRecord>, AppError> {
    let firm_dist = WeightedIndex::new(FirmType::WEIGHTS)
        .map_err(|e| AppError::runtime(format!("Firm type distribution error: {e}")))?;
    let stage_dist = WeightedIndex::new(StrategyStage::WEIGHTS)
        .map_err(|e| AppError::runtime(format!("Strategy distribution error: {e}")))?;
    let clean_dist = Bernoulli::new(CLEAN_AUM_PROB)
        .map_err(|e| AppError::runtime(format!("AUM mix distribution error: {e}")))?;

    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        let aum_raw = if clean_dist.sample(rng) {
            RawAum::Numeric(rng.gen_range(CLEAN_AUM_MIN..=CLEAN_AUM_MAX) as f64)
        } else {
            messy_aum(rng)
        };

        records.push(SurveyRecord {
            firm_id: format!("VX-{}", rng.gen_range(1000..=9999)),
            firm_type: FirmType::ALL[firm_dist.sample(rng)],
            region: Region::ALL[rng.gen_range(0..Region::ALL.len())],
            aum_raw,
            strategy: StrategyStage::ALL[stage_dist.sample(rng)],
            top_barrier: Barrier::ALL[rng.gen_range(0..Barrier::ALL.len())],
            satisfaction: rng.gen_range(1..=10),
        });
    }

    let messy = records
        .iter()
        .filter(|r| !matches!(r.aum_raw, RawAum::Numeric(_)))
        .count();
    debug!(total = records.len(), messy, "sample generated");

    Ok(records)
}

// Billions with a currency symbol, millions without, or nothing at all.
fn messy_aum<R: Rng + ?Sized>(rng: &mut R) -> RawAum {
    match rng.gen_range(0..3) {
        0 => RawAum::Text(format!("${}B", rng.gen_range(1..=500))),
        1 => RawAum::Text(format!("{}M", rng.gen_range(100..=900))),
        _ => RawAum::Missing,
    }
}
