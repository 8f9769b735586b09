//! Formatted terminal output.
//!
//! We keep formatting code in one place so the aggregation code stays clean
//! and output changes are localized.

use std::path::Path;

use crate::domain::{CleanRecord, SurveyRecord};
use crate::report::ExecutiveSummary;

/// First `rows` raw records as a table.
pub fn format_raw_sample(records: &[SurveyRecord], rows: usize) -> String {
    let mut out = String::new();
    out.push_str("-- Raw Data Sample (Messy data) --\n");

    push_line(
        &mut out,
        format!(
            "{:>3} {:<8} {:<15} {:<14} {:<14} {:<16} {:<23} {:>5}",
            "", "Firm ID", "Firm Type", "Region", "AUM (Raw)", "Strategy", "Top Barrier", "Score"
        ),
    );
    push_line(
        &mut out,
        format!(
            "{:>3} {:-<8} {:-<15} {:-<14} {:-<14} {:-<16} {:-<23} {:->5}",
            "", "", "", "", "", "", "", ""
        ),
    );

    for (i, r) in records.iter().take(rows).enumerate() {
        push_line(
            &mut out,
            format!(
                "{:>3} {:<8} {:<15} {:<14} {:<14} {:<16} {:<23} {:>5}",
                i,
                truncate(&r.firm_id, 8),
                r.firm_type.display_name(),
                r.region.display_name(),
                truncate(&r.aum_raw.to_string(), 14),
                r.strategy.display_name(),
                r.top_barrier.display_name(),
                r.satisfaction,
            ),
        );
    }

    out
}

/// First `rows` cleaned records: firm type, raw AUM, AUM in billions, cohort.
pub fn format_clean_sample(records: &[CleanRecord], rows: usize) -> String {
    let mut out = String::new();
    out.push_str("-- Clean Data Sample --\n");

    push_line(
        &mut out,
        format!(
            "{:>3} {:<15} {:<14} {:>14} {:<20}",
            "", "Firm Type", "AUM (Raw)", "AUM (Billions)", "Size Cohort"
        ),
    );
    push_line(
        &mut out,
        format!("{:>3} {:-<15} {:-<14} {:->14} {:-<20}", "", "", "", "", ""),
    );

    for (i, r) in records.iter().take(rows).enumerate() {
        push_line(
            &mut out,
            format!(
                "{:>3} {:<15} {:<14} {:>14.3} {:<20}",
                i,
                r.record.firm_type.display_name(),
                truncate(&r.record.aum_raw.to_string(), 14),
                r.aum_billions,
                r.size_cohort.map(|c| c.label()).unwrap_or("NaN"),
            ),
        );
    }

    out
}

/// Line announcing a written chart.
pub fn format_generated(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("[Generated] {name}")
}

/// The three-statement executive summary.
pub fn format_executive_summary(summary: &ExecutiveSummary) -> String {
    let mut out = String::new();
    out.push_str("-- Automated Executive Summary --\n");
    out.push_str(&format!(
        "1. Legacy Technology is the primary blocker for {:.1}% of respondents, indicating a critical need for infrastructure modernization before digital asset integration.\n",
        summary.legacy_pct
    ));
    out.push_str(&format!(
        "2. {} is currently leading the 'Live Production' phase, outperforming other regions in operational readiness.\n",
        summary.leading_region.display_name()
    ));
    out.push_str(&format!(
        "3. Data Quality Audit: {:.1}% of input records required automated normalization to be usable for analysis.\n",
        summary.normalization_pct
    ));
    out
}

fn push_line(out: &mut String, line: String) {
    out.push_str(line.trim_end());
    out.push('\n');
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Barrier, FirmType, RawAum, Region, SizeCohort, StrategyStage};

    fn raw(id: &str, aum_raw: RawAum) -> SurveyRecord {
        SurveyRecord {
            firm_id: id.to_string(),
            firm_type: FirmType::BrokerDealer,
            region: Region::NorthAmerica,
            aum_raw,
            strategy: StrategyStage::PocPhase,
            top_barrier: Barrier::RegulatoryUncertainty,
            satisfaction: 9,
        }
    }

    #[test]
    fn raw_sample_limits_rows() {
        let records: Vec<SurveyRecord> = (0..8)
            .map(|i| raw(&format!("VX-10{i:02}"), RawAum::Missing))
            .collect();
        let text = format_raw_sample(&records, 5);
        assert!(text.starts_with("-- Raw Data Sample (Messy data) --\n"));
        assert!(text.contains("VX-1004"));
        assert!(!text.contains("VX-1005"));
        // Title + header + rule + 5 rows.
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn clean_sample_shows_billions_and_cohort() {
        let records = vec![
            CleanRecord {
                record: raw("VX-2000", RawAum::Text("$250B".to_string())),
                aum_numeric: 250e9,
                aum_billions: 250.0,
                size_cohort: Some(SizeCohort::Large),
            },
            CleanRecord {
                record: raw("VX-2001", RawAum::Numeric(2e13)),
                aum_numeric: 2e13,
                aum_billions: 20_000.0,
                size_cohort: None,
            },
        ];
        let text = format_clean_sample(&records, 5);
        assert!(text.contains("$250B"));
        assert!(text.contains("250.000"));
        assert!(text.contains("Large (>$100B)"));
        assert!(text.lines().last().unwrap().ends_with("NaN"));
    }

    #[test]
    fn summary_formats_one_decimal() {
        let summary = ExecutiveSummary {
            legacy_pct: 26.666_666,
            leading_region: Region::Apac,
            normalization_pct: 70.0,
        };
        let text = format_executive_summary(&summary);
        assert!(text.contains("blocker for 26.7% of respondents"));
        assert!(text.contains("2. APAC is currently leading"));
        assert!(text.contains("Data Quality Audit: 70.0% of input records"));
    }

    #[test]
    fn generated_line_uses_file_name() {
        let line = format_generated(Path::new("/tmp/out/chart_1_barriers.png"));
        assert_eq!(line, "[Generated] chart_1_barriers.png");
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("short", 8), "short");
        assert_eq!(truncate("0123456789", 5), "0123.");
    }
}
