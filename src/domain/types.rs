//! Shared domain types.
//!
//! These types are kept small and serializable so they can be:
//!
//! - generated and cleaned in-memory
//! - exported to CSV/JSON
//! - printed as terminal tables

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Respondent firm category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FirmType {
    #[serde(rename = "Asset Manager")]
    AssetManager,
    #[serde(rename = "Custodian Bank")]
    CustodianBank,
    #[serde(rename = "Broker-Dealer")]
    BrokerDealer,
    #[serde(rename = "Hedge Fund")]
    HedgeFund,
}

impl FirmType {
    pub const ALL: [FirmType; 4] = [
        FirmType::AssetManager,
        FirmType::CustodianBank,
        FirmType::BrokerDealer,
        FirmType::HedgeFund,
    ];

    /// Sampling weights, aligned with `ALL`.
    pub const WEIGHTS: [f64; 4] = [0.4, 0.2, 0.3, 0.1];

    pub fn display_name(self) -> &'static str {
        match self {
            FirmType::AssetManager => "Asset Manager",
            FirmType::CustodianBank => "Custodian Bank",
            FirmType::BrokerDealer => "Broker-Dealer",
            FirmType::HedgeFund => "Hedge Fund",
        }
    }
}

/// Respondent headquarters region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "APAC")]
    Apac,
    #[serde(rename = "EMEA")]
    Emea,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::NorthAmerica, Region::Apac, Region::Emea];

    pub fn display_name(self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Apac => "APAC",
            Region::Emea => "EMEA",
        }
    }
}

/// Primary barrier to digital asset adoption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Barrier {
    #[serde(rename = "Legacy Technology")]
    LegacyTechnology,
    #[serde(rename = "Regulatory Uncertainty")]
    RegulatoryUncertainty,
    #[serde(rename = "Talent Shortage")]
    TalentShortage,
    #[serde(rename = "Budget Constraints")]
    BudgetConstraints,
}

impl Barrier {
    pub const ALL: [Barrier; 4] = [
        Barrier::LegacyTechnology,
        Barrier::RegulatoryUncertainty,
        Barrier::TalentShortage,
        Barrier::BudgetConstraints,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Barrier::LegacyTechnology => "Legacy Technology",
            Barrier::RegulatoryUncertainty => "Regulatory Uncertainty",
            Barrier::TalentShortage => "Talent Shortage",
            Barrier::BudgetConstraints => "Budget Constraints",
        }
    }
}

/// Digital asset strategy maturity, in adoption order.
///
/// `LiveProduction` is the terminal stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrategyStage {
    #[serde(rename = "Not Started")]
    NotStarted,
    Researching,
    #[serde(rename = "POC Phase")]
    PocPhase,
    #[serde(rename = "Live Production")]
    LiveProduction,
}

impl StrategyStage {
    pub const ALL: [StrategyStage; 4] = [
        StrategyStage::NotStarted,
        StrategyStage::Researching,
        StrategyStage::PocPhase,
        StrategyStage::LiveProduction,
    ];

    /// Sampling weights, aligned with `ALL`.
    pub const WEIGHTS: [f64; 4] = [0.2, 0.3, 0.4, 0.1];

    pub fn display_name(self) -> &'static str {
        match self {
            StrategyStage::NotStarted => "Not Started",
            StrategyStage::Researching => "Researching",
            StrategyStage::PocPhase => "POC Phase",
            StrategyStage::LiveProduction => "Live Production",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == StrategyStage::LiveProduction
    }
}

/// AUM exactly as it arrived from the survey.
///
/// The variant is fixed when the record is produced, so downstream code never
/// has to guess whether a value is "already numeric".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawAum {
    /// Plain number in raw currency units.
    Numeric(f64),
    /// Free text such as `"$250B"` or `"375M"`.
    Text(String),
    /// No value reported.
    Missing,
}

impl fmt::Display for RawAum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAum::Numeric(v) => write!(f, "{v:.0}"),
            RawAum::Text(s) => write!(f, "{s}"),
            RawAum::Missing => write!(f, "NaN"),
        }
    }
}

/// Size bucket derived from AUM in billions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeCohort {
    Small,
    #[serde(rename = "Mid-Tier")]
    MidTier,
    Large,
}

impl SizeCohort {
    pub const ALL: [SizeCohort; 3] = [SizeCohort::Small, SizeCohort::MidTier, SizeCohort::Large];

    pub fn display_name(self) -> &'static str {
        match self {
            SizeCohort::Small => "Small",
            SizeCohort::MidTier => "Mid-Tier",
            SizeCohort::Large => "Large",
        }
    }

    /// Label used in tables and exports.
    pub fn label(self) -> &'static str {
        match self {
            SizeCohort::Small => "Small (<$10B)",
            SizeCohort::MidTier => "Mid-Tier ($10-100B)",
            SizeCohort::Large => "Large (>$100B)",
        }
    }
}

/// One survey response as generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub firm_id: String,
    pub firm_type: FirmType,
    pub region: Region,
    pub aum_raw: RawAum,
    pub strategy: StrategyStage,
    pub top_barrier: Barrier,
    /// 1..=10.
    pub satisfaction: u8,
}

/// A survey response after AUM normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub record: SurveyRecord,
    /// AUM in raw currency units. Always finite and `>= 0`.
    pub aum_numeric: f64,
    pub aum_billions: f64,
    /// `None` when AUM falls outside every cohort bin.
    pub size_cohort: Option<SizeCohort>,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub record_count: usize,
    /// Fixed seed for reproducible runs; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    pub out_dir: PathBuf,
    pub sample_rows: usize,
    pub charts: bool,
    pub export_records: Option<PathBuf>,
    pub export_summary: Option<PathBuf>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            record_count: 150,
            seed: None,
            out_dir: PathBuf::from("."),
            sample_rows: 5,
            charts: true,
            export_records: None,
            export_summary: None,
        }
    }
}
