//! Fixed-edge size binning on AUM in billions.

use crate::domain::SizeCohort;

/// Bin edges in billions; each bin is `(lower, upper]`.
pub const COHORT_EDGES: [f64; 4] = [-1.0, 10.0, 100.0, 10_000.0];

/// Classify AUM (in billions) into a size cohort.
///
/// Values at or below -1B, above 10,000B, or NaN fall outside every bin.
pub fn size_cohort(aum_billions: f64) -> Option<SizeCohort> {
    COHORT_EDGES
        .windows(2)
        .zip(SizeCohort::ALL)
        .find(|(edge, _)| aum_billions > edge[0] && aum_billions <= edge[1])
        .map(|(_, cohort)| cohort)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_are_right_closed() {
        assert_eq!(size_cohort(0.0), Some(SizeCohort::Small));
        assert_eq!(size_cohort(10.0), Some(SizeCohort::Small));
        assert_eq!(size_cohort(10.000001), Some(SizeCohort::MidTier));
        assert_eq!(size_cohort(100.0), Some(SizeCohort::MidTier));
        assert_eq!(size_cohort(100.5), Some(SizeCohort::Large));
        assert_eq!(size_cohort(10_000.0), Some(SizeCohort::Large));
    }

    #[test]
    fn out_of_range_is_unclassified() {
        assert_eq!(size_cohort(-1.0), None);
        assert_eq!(size_cohort(10_000.5), None);
        assert_eq!(size_cohort(f64::NAN), None);
    }

    #[test]
    fn labels_match_bins() {
        assert_eq!(SizeCohort::Small.label(), "Small (<$10B)");
        assert_eq!(SizeCohort::MidTier.display_name(), "Mid-Tier");
        assert_eq!(SizeCohort::Large.label(), "Large (>$100B)");
    }
}
