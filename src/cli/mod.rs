//! Command-line parsing for the digital asset adoption benchmark.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! generation/normalization/reporting code. Every flag maps onto a field of
//! `domain::BenchmarkConfig`.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::BenchmarkConfig;

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "da-bench",
    version,
    about = "Institutional digital asset adoption benchmark (synthetic survey)"
)]
pub struct Cli {
    /// Number of synthetic survey responses to generate.
    #[arg(short = 'n', long, env = "DA_BENCH_RECORDS", default_value_t = 150)]
    pub records: usize,

    /// Random seed for survey generation. A fresh seed is drawn (and logged) when omitted.
    #[arg(long, env = "DA_BENCH_SEED")]
    pub seed: Option<u64>,

    /// Directory the chart PNGs are written to.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Rows shown in the raw and clean sample tables.
    #[arg(long, default_value_t = 5)]
    pub sample_rows: usize,

    /// Skip chart rendering (text report only).
    #[arg(long)]
    pub no_charts: bool,

    /// Export the cleaned survey table to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the executive summary and aggregations to JSON.
    #[arg(long = "export-summary", value_name = "JSON")]
    pub export_summary: Option<PathBuf>,
}

impl Cli {
    pub fn to_config(&self) -> BenchmarkConfig {
        BenchmarkConfig {
            record_count: self.records,
            seed: self.seed,
            out_dir: self.out_dir.clone(),
            sample_rows: self.sample_rows,
            charts: !self.no_charts,
            export_records: self.export.clone(),
            export_summary: self.export_summary.clone(),
        }
    }
}
