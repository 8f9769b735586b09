//! Plotters-powered bar charts written to PNG.
//!
//! Category axes are drawn on a plain `f64` range (one unit per category) so
//! bars can be stacked or grouped within a slot; category names are placed
//! next to the axis by hand.

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use crate::domain::{Barrier, StrategyStage};
use crate::error::AppError;
use crate::report::{BarrierShare, RegionStageCounts, ReportConfig};

/// Viridis samples, one per barrier.
const VIRIDIS: [RGBColor; 4] = [
    RGBColor(68, 1, 84),
    RGBColor(49, 104, 142),
    RGBColor(53, 183, 121),
    RGBColor(253, 231, 37),
];

/// Sequential blues, light to dark, one per strategy stage.
const BLUES: [RGBColor; 4] = [
    RGBColor(198, 219, 239),
    RGBColor(107, 174, 214),
    RGBColor(33, 113, 181),
    RGBColor(8, 48, 107),
];

/// Empty space on each side of a bar within its category slot.
const SLOT_PADDING: f64 = 0.15;

/// Pixels reserved right of the barrier chart for its legend.
const LEGEND_WIDTH: u32 = 220;

type DrawResult = Result<(), Box<dyn Error>>;

/// Render the barrier distribution as a horizontal stacked bar chart.
pub fn render_barrier_chart(rows: &[BarrierShare], config: &ReportConfig) -> Result<PathBuf, AppError> {
    let path = config.barrier_chart_path();
    draw_barrier_chart(&path, rows, config)
        .map_err(|e| AppError::runtime(format!("Failed to render chart '{}': {e}", path.display())))?;
    info!(path = %path.display(), bars = rows.len(), "wrote barrier chart");
    Ok(path)
}

/// Render regional maturity as a grouped bar chart.
pub fn render_regional_chart(rows: &[RegionStageCounts], config: &ReportConfig) -> Result<PathBuf, AppError> {
    let path = config.regional_chart_path();
    draw_regional_chart(&path, rows, config)
        .map_err(|e| AppError::runtime(format!("Failed to render chart '{}': {e}", path.display())))?;
    info!(path = %path.display(), groups = rows.len(), "wrote regional chart");
    Ok(path)
}

/// Cumulative `(barrier, start, end)` spans for one stacked bar, in percent.
pub fn stacked_spans(row: &BarrierShare) -> Vec<(Barrier, f64, f64)> {
    let mut start = 0.0;
    let mut out = Vec::with_capacity(row.shares.len());
    for (&barrier, &share) in &row.shares {
        let end = start + share;
        out.push((barrier, start, end));
        start = end;
    }
    out
}

/// Horizontal extent of bar `member` (of `members`) inside category slot `slot`.
pub fn grouped_bar_span(slot: usize, member: usize, members: usize) -> (f64, f64) {
    let members = members.max(1) as f64;
    let width = (1.0 - 2.0 * SLOT_PADDING) / members;
    let x0 = slot as f64 + SLOT_PADDING + member as f64 * width;
    (x0, x0 + width)
}

/// Upper bound for the count axis, leaving headroom above the tallest bar.
pub fn count_axis_max(rows: &[RegionStageCounts]) -> f64 {
    let tallest = rows
        .iter()
        .flat_map(|r| r.counts.values())
        .copied()
        .max()
        .unwrap_or(0);
    (tallest as f64 * 1.15).ceil().max(1.0)
}

fn draw_barrier_chart(path: &Path, rows: &[BarrierShare], config: &ReportConfig) -> DrawResult {
    let font = config.font_family.as_str();
    let (width, _) = config.barrier_chart_size;

    let root = BitMapBackend::new(path, config.barrier_chart_size).into_drawing_area();
    root.fill(&WHITE)?;
    let (plot_area, legend_area) = root.split_horizontally(width.saturating_sub(LEGEND_WIDTH));

    let slots = rows.len().max(1) as f64;
    let mut chart = ChartBuilder::on(&plot_area)
        .caption(
            "Primary Barriers to Digital Asset Adoption by Firm Type",
            (font, 22).into_font().style(FontStyle::Bold),
        )
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(130)
        .build_cartesian_2d(0f64..100f64, 0f64..slots)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Percentage of Respondents")
        .x_labels(11)
        .x_label_formatter(&|v: &f64| format!("{v:.0}"))
        .y_label_formatter(&|_: &f64| String::new())
        .label_style((font, 14).into_font())
        .draw()?;

    for (idx, barrier) in Barrier::ALL.into_iter().enumerate() {
        let color = VIRIDIS[idx % VIRIDIS.len()];
        chart.draw_series(rows.iter().enumerate().filter_map(|(slot, row)| {
            let (_, x0, x1) = stacked_spans(row).into_iter().find(|(b, _, _)| *b == barrier)?;
            let y = slot as f64;
            Some(Rectangle::new(
                [(x0, y + SLOT_PADDING), (x1, y + 1.0 - SLOT_PADDING)],
                color.filled(),
            ))
        }))?;
    }

    let label_style = TextStyle::from((font, 15).into_font()).pos(Pos::new(HPos::Right, VPos::Center));
    for (slot, row) in rows.iter().enumerate() {
        let (px, py) = chart.backend_coord(&(0.0, slot as f64 + 0.5));
        plot_area.draw(&Text::new(
            row.firm_type.display_name().to_string(),
            (px - 8, py),
            label_style.clone(),
        ))?;
    }

    legend_area.draw(&Text::new(
        "Barrier".to_string(),
        (10, 60),
        (font, 16).into_font().style(FontStyle::Bold),
    ))?;
    let entry_style = TextStyle::from((font, 14).into_font()).pos(Pos::new(HPos::Left, VPos::Center));
    for (idx, barrier) in Barrier::ALL.into_iter().enumerate() {
        let y = 90 + idx as i32 * 26;
        let color = VIRIDIS[idx % VIRIDIS.len()];
        legend_area.draw(&Rectangle::new([(10, y), (26, y + 16)], color.filled()))?;
        legend_area.draw(&Text::new(
            barrier.display_name().to_string(),
            (34, y + 8),
            entry_style.clone(),
        ))?;
    }

    root.present()?;
    Ok(())
}

fn draw_regional_chart(path: &Path, rows: &[RegionStageCounts], config: &ReportConfig) -> DrawResult {
    let font = config.font_family.as_str();

    let root = BitMapBackend::new(path, config.regional_chart_size).into_drawing_area();
    root.fill(&WHITE)?;

    let slots = rows.len().max(1) as f64;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Regional Benchmarking: Digital Asset Maturity",
            (font, 20).into_font().style(FontStyle::Bold),
        )
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(55)
        .build_cartesian_2d(0f64..slots, 0f64..count_axis_max(rows))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Region")
        .y_desc("Number of Firms")
        .x_label_formatter(&|_: &f64| String::new())
        .y_label_formatter(&|v: &f64| format!("{v:.0}"))
        .label_style((font, 14).into_font())
        .draw()?;

    let stages = StrategyStage::ALL.len();
    for (idx, stage) in StrategyStage::ALL.into_iter().enumerate() {
        let color = BLUES[idx % BLUES.len()];
        chart
            .draw_series(rows.iter().enumerate().map(|(slot, row)| {
                let count = row.counts.get(&stage).copied().unwrap_or(0) as f64;
                let (x0, x1) = grouped_bar_span(slot, idx, stages);
                Rectangle::new([(x0, 0.0), (x1, count)], color.filled())
            }))?
            .label(stage.display_name())
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .label_font((font, 13).into_font())
        .draw()?;

    let label_style = TextStyle::from((font, 15).into_font()).pos(Pos::new(HPos::Center, VPos::Top));
    for (slot, row) in rows.iter().enumerate() {
        let (px, py) = chart.backend_coord(&(slot as f64 + 0.5, 0.0));
        root.draw(&Text::new(
            row.region.display_name().to_string(),
            (px, py + 8),
            label_style.clone(),
        ))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::app::pipeline::run_benchmark;
    use crate::domain::{BenchmarkConfig, FirmType, Region};

    const PNG_MAGIC: &[u8] = b"\x89PNG";

    // Text rendering needs a system font; hosts without one cannot draw charts.
    fn font_unavailable(err: &AppError) -> bool {
        err.message().to_lowercase().contains("font")
    }

    #[test]
    fn stacked_spans_cover_zero_to_hundred() {
        let row = BarrierShare {
            firm_type: FirmType::AssetManager,
            respondents: 4,
            shares: Barrier::ALL.into_iter().zip([25.0, 50.0, 0.0, 25.0]).collect(),
        };
        let spans = stacked_spans(&row);
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0], (Barrier::LegacyTechnology, 0.0, 25.0));
        assert_eq!(spans[1], (Barrier::RegulatoryUncertainty, 25.0, 75.0));
        // Zero share collapses to an empty span.
        assert_eq!(spans[2].1, spans[2].2);
        assert!((spans[3].2 - 100.0).abs() < 1e-12);
    }

    #[test]
    fn grouped_spans_stay_inside_their_slot() {
        let members = StrategyStage::ALL.len();
        for slot in 0..3 {
            let mut prev_end = slot as f64;
            for member in 0..members {
                let (x0, x1) = grouped_bar_span(slot, member, members);
                assert!(x0 >= prev_end - 1e-12);
                assert!(x1 > x0);
                assert!(x1 <= slot as f64 + 1.0);
                prev_end = x1;
            }
        }
        let (first, _) = grouped_bar_span(1, 0, members);
        assert!((first - (1.0 + SLOT_PADDING)).abs() < 1e-12);
    }

    #[test]
    fn count_axis_has_headroom() {
        let rows = vec![RegionStageCounts {
            region: Region::Apac,
            counts: BTreeMap::from([(StrategyStage::PocPhase, 20), (StrategyStage::NotStarted, 3)]),
        }];
        assert_eq!(count_axis_max(&rows), 23.0);
        assert_eq!(count_axis_max(&[]), 1.0);
    }

    #[test]
    fn charts_are_written_and_overwritten_in_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let run = run_benchmark(&BenchmarkConfig {
            seed: Some(1),
            ..BenchmarkConfig::default()
        })
        .unwrap();
        let config = ReportConfig {
            out_dir: dir.path().to_path_buf(),
            ..ReportConfig::default()
        };

        let barriers = match render_barrier_chart(&run.report.barriers, &config) {
            Ok(path) => path,
            Err(err) if font_unavailable(&err) => {
                eprintln!("skipping chart rendering: {err}");
                return;
            }
            Err(err) => panic!("barrier chart failed: {err}"),
        };
        let regional = render_regional_chart(&run.report.regional, &config).unwrap();

        assert_eq!(barriers, dir.path().join("chart_1_barriers.png"));
        assert_eq!(regional, dir.path().join("chart_2_regional_readiness.png"));
        for path in [&barriers, &regional] {
            let bytes = std::fs::read(path).unwrap();
            assert!(bytes.starts_with(PNG_MAGIC), "{} is not a PNG", path.display());
        }

        // A second run replaces whatever sits at the fixed names.
        std::fs::write(&barriers, b"stale").unwrap();
        std::fs::write(&regional, b"stale").unwrap();
        render_barrier_chart(&run.report.barriers, &config).unwrap();
        render_regional_chart(&run.report.regional, &config).unwrap();
        for path in [&barriers, &regional] {
            let bytes = std::fs::read(path).unwrap();
            assert!(bytes.starts_with(PNG_MAGIC), "{} was not overwritten", path.display());
        }
    }
}
